// Database connectivity test endpoint handler implementation

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::handlers::{json_response, AppState};
use crate::models::ErrorResponse;

/// Handler for GET /api/database/test - Runs one database connectivity test
/// and reports its outcome
pub async fn test_database_connection(State(tester): State<AppState>) -> Response {
    match tester.test_connection().await {
        // The tester's own verdict is passed through untouched, including
        // results that carry success: false
        Ok(result) => json_response(StatusCode::OK, result),
        Err(err) => {
            tracing::error!("Database connectivity test failed: {}", err);
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::database_test_failed(&err),
            )
        }
    }
}
