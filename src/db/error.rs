// Error types for database operations

use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred while reaching or authenticating with the database
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error occurred during query execution
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => DbError::ConnectionError(e.to_string()),
            sea_orm::DbErr::Exec(e) | sea_orm::DbErr::Query(e) => {
                DbError::QueryError(e.to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}
