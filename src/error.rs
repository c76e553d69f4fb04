use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ConversionRequestBuilderError, ValidationResult};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.message)]
    Validation(ValidationResult),
    /// Request could not be routed to the exchange handler
    #[error("{0}")]
    Dispatch(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, AppError>;

impl From<ConversionRequestBuilderError> for AppError {
    fn from(value: ConversionRequestBuilderError) -> Self {
        Self::Dispatch(value.to_string())
    }
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    data: &'a ValidationResult,
    status: u16,
}

#[derive(Serialize)]
struct DispatchBody<'a> {
    message: &'static str,
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(result) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ValidationBody {
                    data: result,
                    status: status.as_u16(),
                };
                (status, Json(body)).into_response()
            }
            AppError::Dispatch(error) => {
                tracing::debug!("invalid request: {error}");
                let body = DispatchBody {
                    message: "invalid request",
                    error,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Config(_) | AppError::Io(_) => {
                tracing::error!("{self:?}");
                let error = self.to_string();
                let body = DispatchBody {
                    message: "internal error",
                    error: &error,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
