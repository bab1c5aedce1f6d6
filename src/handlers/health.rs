// Health check endpoint handler implementation

use axum::Json;

use crate::models::HealthCheckResponse;

/// Handler for GET /health - Returns a simple health check response to verify the API is running
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
