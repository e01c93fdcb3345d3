//! Diagnosis classifier and its on-disk artifacts.
//!
//! - [`forest`]: a random forest (backed by `smartcore`) over string labels.
//! - [`model`]: the [`DiagnosisModel`] trait the predictor depends on.
//! - [`artifact`]: writing and reading the model and feature-schema files,
//!   including the load-time schema check.
//!
//! # Example
//!
//! ```no_run
//! use healthrec_core::FeatureSchema;
//! use healthrec_model::{artifact, ArtifactPaths, DiagnosisModel};
//!
//! let paths = ArtifactPaths::default();
//! let model = artifact::load_validated(&paths, &FeatureSchema::patient_vitals())?;
//! println!("model knows {:?}", model.labels());
//! # Ok::<(), healthrec_model::ModelError>(())
//! ```

#![warn(missing_docs)]

pub mod artifact;
pub mod error;
pub mod forest;
pub mod model;

pub use artifact::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCHEMA_FILE, MODEL_FORMAT_VERSION};
pub use error::{ModelError, ModelResult};
pub use forest::{ForestClassifier, ForestParams};
pub use model::DiagnosisModel;
