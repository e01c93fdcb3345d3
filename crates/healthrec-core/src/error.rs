//! Error types for the healthrec core library.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating patient inputs and feature schemas.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// The number of values does not match the schema.
    #[error("Expected {expected} feature values, got {actual}")]
    FeatureCount {
        /// Number of fields in the schema.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A continuous value lies outside its declared bounds.
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        /// Field name.
        field: String,
        /// Offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Field name.
        field: String,
    },

    /// A flag field holds something other than 0 or 1.
    #[error("{field} must be 0 or 1, got {value}")]
    InvalidFlag {
        /// Field name.
        field: String,
        /// Offending value.
        value: f64,
    },

    /// Two schemas disagree on field order, names, or kinds.
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A persisted schema was written with an unsupported format version.
    #[error("Unsupported feature schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// Version this build understands.
        expected: u32,
        /// Version found on disk.
        found: u32,
    },
}

impl CoreError {
    /// Create a schema mismatch error.
    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }
}
