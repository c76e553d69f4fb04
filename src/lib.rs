mod error;
pub use error::{AppError, Result};

pub mod config;
pub mod conversion_service;
pub mod exchange_service;
pub mod models;
pub mod routes;
pub mod telemetry;
pub mod validator;
