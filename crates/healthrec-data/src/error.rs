//! Error types for dataset loading and splitting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while reading, writing, or splitting datasets.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error on a dataset file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header.
    #[error("Missing column {column:?} in dataset header")]
    MissingColumn {
        /// Column name.
        column: String,
    },

    /// A cell could not be parsed.
    #[error("Invalid value {value:?} in column {column:?} at row {row}")]
    InvalidValue {
        /// 1-based data row (the header is not counted).
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// The dataset has no rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Feature rows and labels disagree in length.
    #[error("Dataset has {rows} feature rows but {labels} labels")]
    LengthMismatch {
        /// Number of feature rows.
        rows: usize,
        /// Number of labels.
        labels: usize,
    },

    /// The requested test fraction is not in (0, 1).
    #[error("Invalid test size {0}: must be strictly between 0 and 1")]
    InvalidTestSize(f64),

    /// Too few rows to produce non-empty train and test partitions.
    #[error("Cannot split {rows} rows into non-empty train and test sets")]
    TooFewRows {
        /// Number of rows available.
        rows: usize,
    },
}

impl DataError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
