//! Application error type mapping to HTTP status codes and the envelope
//! format.

use axum::response::{IntoResponse, Response};

use ringcraft_types::error::{ConfigError, GatewayError, StorageError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Settings-store failures.
    Storage(StorageError),
    /// Storefront config blob failures.
    Config(ConfigError),
    /// Builder-data backend failures.
    Gateway(GatewayError),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Config(ConfigError::InvalidBlob(msg)) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Config(e) => ("CONFIG_ERROR", e.to_string()),
            AppError::Storage(e) => ("STORAGE_ERROR", e.to_string()),
            AppError::Gateway(e) => ("GATEWAY_ERROR", e.to_string()),
        };

        let request_id = uuid::Uuid::now_v7().to_string();
        ApiResponse::<()>::error(code, &message, request_id).into_response()
    }
}
