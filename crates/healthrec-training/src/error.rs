//! Error types for the training pipeline.

use healthrec_data::DataError;
use healthrec_model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for training operations.
pub type TrainingResult<T> = Result<T, TrainingError>;

/// Errors that terminate a training run.
#[derive(Debug, Error)]
pub enum TrainingError {
    /// Loading or splitting the dataset failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Fitting, predicting, or writing artifacts failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Invalid trainer configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file.
    #[error("Failed to read config {path}: {message}")]
    ConfigFile {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

impl TrainingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
