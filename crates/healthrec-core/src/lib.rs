//! Core types for the healthrec diagnosis demo.
//!
//! This crate holds everything the trainer and the predictor must agree on:
//!
//! - **Feature schema**: the ordered, typed list of the nine patient features.
//!   Both the training matrix and the prediction vector are laid out in
//!   exactly this order.
//! - **Patient input**: the raw form values and their assembly into a
//!   [`FeatureVector`].
//! - **Diagnosis labels**: the closed set of labels the advisory table knows.
//! - **Advisory records**: static medicine, diet, and lifestyle guidance per
//!   diagnosis, with a default record for labels the table does not know.
//!
//! # Example
//!
//! ```
//! use healthrec_core::{recommendations_for, FeatureSchema, PatientInput};
//!
//! let input = PatientInput {
//!     age: 45.0,
//!     blood_pressure: 130.0,
//!     glucose_level: 110.0,
//!     heart_rate: 75.0,
//!     bmi: 26.0,
//!     symptom_fever: true,
//!     symptom_cough: false,
//!     symptom_fatigue: true,
//!     symptom_pain: false,
//! };
//!
//! let schema = FeatureSchema::patient_vitals();
//! let vector = input.validate(&schema).unwrap();
//! assert_eq!(vector.as_slice(), &[45.0, 130.0, 110.0, 75.0, 26.0, 1.0, 0.0, 1.0, 0.0]);
//!
//! let advice = recommendations_for("Flu");
//! assert_eq!(advice.medicines[0], "Paracetamol for fever (as per dosage)");
//! ```

#![warn(missing_docs)]

pub mod advice;
pub mod diagnosis;
pub mod error;
pub mod features;
pub mod schema;

pub use advice::{recommendations_for, AdvisoryRecord};
pub use diagnosis::Diagnosis;
pub use error::{CoreError, CoreResult};
pub use features::{FeatureVector, PatientInput};
pub use schema::{
    FeatureSchema, FieldKind, FieldSpec, FEATURE_COLUMNS, NUM_FEATURES, SCHEMA_FORMAT_VERSION,
    TARGET_COLUMN,
};
