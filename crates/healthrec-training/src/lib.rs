//! Offline training for healthrec.
//!
//! The [`Trainer`] runs the whole pipeline once: load the CSV, hold out a
//! seeded test split, fit the forest, evaluate it, and write the model and
//! feature-schema artifacts.
//!
//! ```no_run
//! use healthrec_training::{Trainer, TrainerConfig};
//!
//! let summary = Trainer::new(TrainerConfig::default()).run()?;
//! println!("Accuracy: {}", summary.accuracy);
//! println!("{}", summary.report);
//! # Ok::<(), healthrec_training::TrainingError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod trainer;

pub use config::TrainerConfig;
pub use error::{TrainingError, TrainingResult};
pub use metrics::{accuracy, AverageMetrics, ClassMetrics, ClassificationReport};
pub use trainer::{Trainer, TrainingSummary};
