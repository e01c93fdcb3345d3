//! Error types for the healthrec-model crate.

use healthrec_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors from fitting, predicting, and artifact I/O.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The training set has no rows.
    #[error("Cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    /// Feature rows and labels disagree in length.
    #[error("Got {rows} feature rows but {labels} labels")]
    LengthMismatch {
        /// Number of feature rows.
        rows: usize,
        /// Number of labels.
        labels: usize,
    },

    /// A row has the wrong number of features.
    #[error("Expected {expected} features, got {actual}")]
    FeatureCount {
        /// Features the model was trained on.
        expected: usize,
        /// Features supplied.
        actual: usize,
    },

    /// The underlying learner failed to fit.
    #[error("Model fit failed: {0}")]
    Fit(String),

    /// The underlying learner failed to predict.
    #[error("Prediction failed: {0}")]
    Predict(String),

    /// The learner produced a class id with no label.
    #[error("Model produced unknown class id {0}")]
    UnknownClassId(u32),

    /// I/O error on an artifact file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode an artifact.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Failed to decode an artifact.
    #[error("Failed to parse {path}: {source}")]
    Deserialization {
        /// Artifact path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The model artifact was written by an incompatible version.
    #[error("Unsupported model format version: expected {expected}, found {found}")]
    UnsupportedVersion {
        /// Version this build understands.
        expected: u32,
        /// Version found on disk.
        found: u32,
    },

    /// Schema validation failed.
    #[error(transparent)]
    Schema(#[from] CoreError),
}

impl ModelError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a fit error.
    pub fn fit(msg: impl ToString) -> Self {
        Self::Fit(msg.to_string())
    }

    /// Create a predict error.
    pub fn predict(msg: impl ToString) -> Self {
        Self::Predict(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::LengthMismatch { rows: 3, labels: 2 };
        assert_eq!(err.to_string(), "Got 3 feature rows but 2 labels");

        let err = ModelError::fit("no classes");
        assert_eq!(err.to_string(), "Model fit failed: no classes");

        let err = ModelError::UnsupportedVersion {
            expected: 1,
            found: 7,
        };
        assert!(err.to_string().contains("found 7"));
    }

    #[test]
    fn test_schema_error_is_transparent() {
        let err: ModelError = CoreError::schema_mismatch("field 0").into();
        assert_eq!(err.to_string(), "Feature schema mismatch: field 0");
    }
}
