//! The prediction interface used by serving.

use crate::error::ModelResult;
use healthrec_core::FeatureVector;

/// A trained classifier that maps one feature vector to one diagnosis label.
///
/// Implementations are immutable after construction and shared across
/// request handlers, hence `Send + Sync`.
pub trait DiagnosisModel: Send + Sync {
    /// Number of features the model was trained on.
    fn n_features(&self) -> usize;

    /// Labels the model can emit, sorted.
    fn labels(&self) -> &[String];

    /// Predict the label for a single example.
    fn predict_one(&self, features: &FeatureVector) -> ModelResult<String>;
}
