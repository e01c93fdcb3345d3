//! Training data for healthrec.
//!
//! - [`csv_io`] reads the patient vitals CSV into a [`Dataset`] (columns are
//!   re-ordered by the feature schema) and writes datasets back out.
//! - [`split`] holds out a seeded, reproducible test partition.
//! - [`synthetic`] generates a labelled synthetic dataset for demos and tests.
//!
//! # Example
//!
//! ```
//! use healthrec_data::{synthetic, train_test_split, SplitConfig, SyntheticConfig};
//!
//! let dataset = synthetic::generate(&SyntheticConfig { rows: 100, seed: 7 }).unwrap();
//! let (train, test) = train_test_split(&dataset, &SplitConfig::default()).unwrap();
//! assert_eq!(train.len(), 70);
//! assert_eq!(test.len(), 30);
//! ```

#![warn(missing_docs)]

pub mod csv_io;
pub mod dataset;
pub mod error;
pub mod split;
pub mod synthetic;

pub use csv_io::{load_csv, read_csv, write_csv};
pub use dataset::Dataset;
pub use error::{DataError, DataResult};
pub use split::{train_test_split, SplitConfig};
pub use synthetic::SyntheticConfig;
