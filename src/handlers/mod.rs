// Handlers Module
// This module contains the API endpoint handlers

mod database;
mod health;

pub use database::test_database_connection;
pub use health::health_check;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, Router};
use axum::Json;
use serde::Serialize;

use crate::services::connection_test::ConnectionTest;

/// Type alias for the application state shared by the handlers
pub type AppState = Arc<dyn ConnectionTest>;

/// Builds an HTTP response with the given status and a JSON body
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Builds the API router serving the health and database test endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/database/test", get(test_database_connection))
        .with_state(state)
}
