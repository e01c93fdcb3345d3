//! Load-once access to the trained model.
//!
//! A [`ModelLoader`] starts unloaded and moves to loaded exactly once; it
//! never unloads or reloads. The loaded model is shared behind an `Arc` and
//! is read-only, so request handlers need no locking.

use crate::error::{ServingError, ServingResult};
use healthrec_core::{Diagnosis, FeatureSchema};
use healthrec_model::artifact::load_validated;
use healthrec_model::{ArtifactPaths, DiagnosisModel};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A loaded model ready for serving.
pub struct LoadedModel {
    /// Input schema requests are validated against.
    pub schema: FeatureSchema,

    /// The classifier.
    pub model: Arc<dyn DiagnosisModel>,

    /// Where the model was loaded from, if it came from disk.
    pub source: Option<ArtifactPaths>,

    /// When the model was loaded.
    pub loaded_at: Instant,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("schema_fields", &self.schema.len())
            .field("labels", &self.model.labels())
            .field("source", &self.source)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

/// Lazily loads the model artifacts on first use.
///
/// # Example
///
/// ```no_run
/// use healthrec_model::ArtifactPaths;
/// use healthrec_serving::model_loader::ModelLoader;
///
/// let loader = ModelLoader::new(ArtifactPaths::default());
/// let model = loader.get_or_load()?;
/// println!("Labels: {:?}", model.model.labels());
/// # Ok::<(), healthrec_serving::ServingError>(())
/// ```
pub struct ModelLoader {
    /// Artifact locations; `None` for a loader built around an in-memory model.
    paths: Option<ArtifactPaths>,

    /// Schema the persisted artifacts must match.
    schema: FeatureSchema,

    loaded: OnceCell<Arc<LoadedModel>>,
}

impl ModelLoader {
    /// Loader that reads `paths` on first use.
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths: Some(paths),
            schema: FeatureSchema::patient_vitals(),
            loaded: OnceCell::new(),
        }
    }

    /// Loader that is already loaded with `model`.
    pub fn from_model(model: Arc<dyn DiagnosisModel>) -> ServingResult<Self> {
        let schema = FeatureSchema::patient_vitals();
        if model.n_features() != schema.len() {
            return Err(ServingError::model_load(format!(
                "model expects {} features, input schema has {}",
                model.n_features(),
                schema.len()
            )));
        }
        warn_unadvised_labels(model.as_ref());

        let loaded = OnceCell::with_value(Arc::new(LoadedModel {
            schema: schema.clone(),
            model,
            source: None,
            loaded_at: Instant::now(),
        }));
        Ok(Self {
            paths: None,
            schema,
            loaded,
        })
    }

    /// Return the model, loading it on the first call.
    ///
    /// Concurrent first calls load once; a failed load leaves the loader
    /// unloaded.
    pub fn get_or_load(&self) -> ServingResult<Arc<LoadedModel>> {
        self.loaded.get_or_try_init(|| self.load()).map(Arc::clone)
    }

    /// Whether the model has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Input schema requests are validated against.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn load(&self) -> ServingResult<Arc<LoadedModel>> {
        let paths = self.paths.as_ref().ok_or(ServingError::ModelNotLoaded)?;
        info!("Loading model from: {:?}", paths.model);

        let start = Instant::now();
        let model = load_validated(paths, &self.schema)
            .map_err(|e| ServingError::model_load(e.to_string()))?;
        debug!("Model loaded in {:?}", start.elapsed());

        warn_unadvised_labels(&model);
        info!("Model ready with labels {:?}", model.labels());

        Ok(Arc::new(LoadedModel {
            schema: self.schema.clone(),
            model: Arc::new(model),
            source: Some(paths.clone()),
            loaded_at: Instant::now(),
        }))
    }
}

impl std::fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("paths", &self.paths)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Labels without an advisory record fall back to the default advice.
fn warn_unadvised_labels(model: &dyn DiagnosisModel) {
    for label in model.labels() {
        if Diagnosis::from_label(label).is_none() {
            warn!(
                "Model label {:?} has no advisory record; default advice will be shown",
                label
            );
        }
    }
}
