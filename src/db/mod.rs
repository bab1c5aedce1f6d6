// Database Module
// This module handles database connectivity for the API

pub mod error;
pub mod pool;

pub use error::DbError;
pub use pool::DbPool;
