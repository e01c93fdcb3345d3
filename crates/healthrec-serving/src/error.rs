//! Error types for the healthrec-serving crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use healthrec_core::CoreError;
use healthrec_model::ModelError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors that can occur while loading the model or answering requests.
#[derive(Debug, Error)]
pub enum ServingError {
    /// Model loading failed.
    #[error("Failed to load model: {0}")]
    ModelLoadError(String),

    /// No model is currently loaded.
    #[error("No model is currently loaded")]
    ModelNotLoaded,

    /// Server error.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Prediction failed.
    #[error("Prediction failed: {0}")]
    PredictionError(String),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServingError {
    /// Create a model load error.
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoadError(msg.into())
    }

    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::ServerError(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a prediction error.
    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::PredictionError(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Check if this is a client error (bad request).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ModelNotLoaded | Self::ModelLoadError(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Input values that fail validation are the caller's fault.
impl From<CoreError> for ServingError {
    fn from(err: CoreError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<ModelError> for ServingError {
    fn from(err: ModelError) -> Self {
        Self::PredictionError(err.to_string())
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

impl IntoResponse for ServingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            error!("Request failed: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
