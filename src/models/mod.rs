// API response models

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::DbError;

/// Outcome of a database connectivity test, returned verbatim as the body
/// of GET /api/database/test
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    pub checked_at: DateTime<Utc>,
}

impl ConnectionTestResult {
    /// Builds the result for a probe that round-tripped successfully
    pub fn connected(database: &str, version: Option<String>, latency_ms: u64) -> Self {
        ConnectionTestResult {
            success: true,
            message: format!("Connected to {}", database),
            database: Some(database.to_string()),
            version,
            latency_ms: Some(latency_ms),
            checked_at: Utc::now(),
        }
    }

    /// Builds the result for a probe that executed but did not pass
    pub fn failed(message: &str) -> Self {
        ConnectionTestResult {
            success: false,
            message: message.to_string(),
            database: None,
            version: None,
            latency_ms: None,
            checked_at: Utc::now(),
        }
    }
}

/// Error payload returned when the connectivity test itself fails to run
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    /// Builds the payload reported alongside a 500 for a failed test call
    pub fn database_test_failed(err: &DbError) -> Self {
        ErrorResponse {
            success: false,
            message: format!("Database test failed: {}", err),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
}
