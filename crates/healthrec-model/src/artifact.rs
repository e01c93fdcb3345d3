//! On-disk model and feature-schema artifacts.
//!
//! Training writes two JSON files:
//!
//! - the model file (`disease_model.json`): a versioned envelope around the
//!   fitted [`ForestClassifier`];
//! - the schema file (`feature_columns.json`): the [`FeatureSchema`] the
//!   model was trained on.
//!
//! Writes overwrite existing files in place. [`load_validated`] reads both
//! and fails unless the persisted schema matches the caller's input schema
//! and the model's width matches the schema.

use crate::error::{ModelError, ModelResult};
use crate::forest::ForestClassifier;
use crate::model::DiagnosisModel;
use healthrec_core::FeatureSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Format version written into model files.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Default model file name.
pub const DEFAULT_MODEL_FILE: &str = "disease_model.json";

/// Default feature-schema file name.
pub const DEFAULT_SCHEMA_FILE: &str = "feature_columns.json";

/// Locations of the two artifact files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Model file.
    pub model: PathBuf,
    /// Feature-schema file.
    pub schema: PathBuf,
}

impl Default for ArtifactPaths {
    /// Both files in the working directory.
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_FILE),
            schema: PathBuf::from(DEFAULT_SCHEMA_FILE),
        }
    }
}

impl ArtifactPaths {
    /// Explicit file locations.
    pub fn new(model: impl Into<PathBuf>, schema: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            schema: schema.into(),
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            schema: dir.join(DEFAULT_SCHEMA_FILE),
        }
    }
}

#[derive(Serialize)]
struct ModelEnvelopeRef<'a> {
    format_version: u32,
    classifier: &'a ForestClassifier,
}

#[derive(Deserialize)]
struct ModelEnvelope {
    format_version: u32,
    classifier: ForestClassifier,
}

/// Write the model file, replacing any existing file.
pub fn save_model(path: impl AsRef<Path>, model: &ForestClassifier) -> ModelResult<()> {
    let path = path.as_ref();
    let envelope = ModelEnvelopeRef {
        format_version: MODEL_FORMAT_VERSION,
        classifier: model,
    };
    let bytes = serde_json::to_vec(&envelope).map_err(ModelError::Serialization)?;
    std::fs::write(path, &bytes).map_err(|e| ModelError::io(path, e))?;
    info!("Saved model ({} bytes) to {:?}", bytes.len(), path);
    Ok(())
}

/// Read a model file.
pub fn load_model(path: impl AsRef<Path>) -> ModelResult<ForestClassifier> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ModelError::io(path, e))?;
    let envelope: ModelEnvelope =
        serde_json::from_slice(&bytes).map_err(|source| ModelError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;
    if envelope.format_version != MODEL_FORMAT_VERSION {
        return Err(ModelError::UnsupportedVersion {
            expected: MODEL_FORMAT_VERSION,
            found: envelope.format_version,
        });
    }
    debug!("Loaded model from {:?}", path);
    Ok(envelope.classifier)
}

/// Write the feature-schema file, replacing any existing file.
pub fn save_schema(path: impl AsRef<Path>, schema: &FeatureSchema) -> ModelResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(schema).map_err(ModelError::Serialization)?;
    std::fs::write(path, json).map_err(|e| ModelError::io(path, e))?;
    info!("Saved feature schema ({} fields) to {:?}", schema.len(), path);
    Ok(())
}

/// Read a feature-schema file.
pub fn load_schema(path: impl AsRef<Path>) -> ModelResult<FeatureSchema> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| ModelError::Deserialization {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both artifacts.
pub fn save(paths: &ArtifactPaths, model: &ForestClassifier, schema: &FeatureSchema) -> ModelResult<()> {
    if model.n_features() != schema.len() {
        return Err(ModelError::FeatureCount {
            expected: schema.len(),
            actual: model.n_features(),
        });
    }
    save_model(&paths.model, model)?;
    save_schema(&paths.schema, schema)
}

/// Read both artifacts and check them against `expected`, the schema the
/// caller will assemble inputs with.
pub fn load_validated(paths: &ArtifactPaths, expected: &FeatureSchema) -> ModelResult<ForestClassifier> {
    let persisted = load_schema(&paths.schema)?;
    expected.ensure_matches(&persisted)?;

    let model = load_model(&paths.model)?;
    if model.n_features() != expected.len() {
        return Err(ModelError::FeatureCount {
            expected: expected.len(),
            actual: model.n_features(),
        });
    }
    info!(
        "Loaded validated model from {:?} ({} labels, {} features)",
        paths.model,
        model.labels().len(),
        model.n_features()
    );
    Ok(model)
}
