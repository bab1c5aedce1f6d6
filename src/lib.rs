// Database probe API library
// Exposes the configuration, database, and HTTP layers of the service

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod services;
