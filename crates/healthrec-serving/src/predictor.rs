//! Single-request prediction and advice lookup.

use crate::error::ServingResult;
use crate::model_loader::ModelLoader;
use healthrec_core::{recommendations_for, AdvisoryRecord, Diagnosis, FeatureVector, PatientInput};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// The result of one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    /// Values as submitted.
    pub input: PatientInput,
    /// Encoded vector passed to the model.
    pub features: FeatureVector,
    /// Label the model predicted.
    pub label: String,
    /// The label as a known diagnosis, if it is one.
    pub diagnosis: Option<Diagnosis>,
    /// Advice for the label, or the default advice.
    pub recommendations: &'static AdvisoryRecord,
}

impl PredictionOutcome {
    /// Whether the label has its own advisory record.
    pub fn is_known(&self) -> bool {
        self.diagnosis.is_some()
    }
}

/// Validates input, runs the model and looks up advice.
#[derive(Debug, Clone)]
pub struct Predictor {
    loader: Arc<ModelLoader>,
}

impl Predictor {
    /// Predictor over `loader`.
    pub fn new(loader: Arc<ModelLoader>) -> Self {
        Self { loader }
    }

    /// The underlying loader.
    pub fn loader(&self) -> &Arc<ModelLoader> {
        &self.loader
    }

    /// Predict a diagnosis for `input`.
    ///
    /// Out-of-range values are rejected before the model is called. A label
    /// with no advisory record is not an error: it gets the default advice
    /// and is logged.
    pub fn predict(&self, input: &PatientInput) -> ServingResult<PredictionOutcome> {
        let loaded = self.loader.get_or_load()?;
        let features = input.validate(&loaded.schema)?;

        let label = loaded.model.predict_one(&features)?;
        debug!("Predicted {:?} for {:?}", label, features.as_slice());

        let diagnosis = Diagnosis::from_label(&label);
        if diagnosis.is_none() {
            warn!("Model predicted unknown label {:?}; using default advice", label);
        }

        Ok(PredictionOutcome {
            input: *input,
            features,
            recommendations: recommendations_for(&label),
            label,
            diagnosis,
        })
    }
}
