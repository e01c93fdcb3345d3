//! Trainer configuration.
//!
//! Every field has a default matching the stock recipe (`medical_data.csv`,
//! 30% held out with seed 42, 100 trees with seed 42), so a JSON config file
//! only needs the keys it changes.

use crate::error::{TrainingError, TrainingResult};
use healthrec_core::TARGET_COLUMN;
use healthrec_data::SplitConfig;
use healthrec_model::{ArtifactPaths, ForestParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default training data file.
pub const DEFAULT_DATA_FILE: &str = "medical_data.csv";

/// Configuration for one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// CSV file to train on.
    pub data_path: PathBuf,
    /// Name of the label column.
    pub target_column: String,
    /// Where to write the model and schema files.
    pub artifacts: ArtifactPaths,
    /// Test partition settings.
    pub split: SplitConfig,
    /// Forest hyperparameters.
    pub forest: ForestParams,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            target_column: TARGET_COLUMN.to_string(),
            artifacts: ArtifactPaths::default(),
            split: SplitConfig::default(),
            forest: ForestParams::default(),
        }
    }
}

impl TrainerConfig {
    /// Read a config from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> TrainingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TrainingError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| TrainingError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Set the training CSV path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set where the model file is written.
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifacts.model = path.into();
        self
    }

    /// Set where the feature-schema file is written.
    pub fn with_schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifacts.schema = path.into();
        self
    }

    /// Set the held-out fraction.
    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.split.test_size = test_size;
        self
    }

    /// Set the number of trees in the forest.
    pub fn with_n_trees(mut self, n_trees: u16) -> Self {
        self.forest.n_trees = n_trees;
        self
    }

    /// Use `seed` for both the split shuffle and the forest.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.split.seed = seed;
        self.forest.seed = seed;
        self
    }

    /// Check the configuration before any file is touched.
    pub fn validate(&self) -> TrainingResult<()> {
        if self.target_column.trim().is_empty() {
            return Err(TrainingError::config("target_column must not be empty"));
        }
        if !(self.split.test_size > 0.0 && self.split.test_size < 1.0) {
            return Err(TrainingError::config(format!(
                "test_size must be between 0 and 1, got {}",
                self.split.test_size
            )));
        }
        if self.forest.n_trees == 0 {
            return Err(TrainingError::config("n_trees must be at least 1"));
        }
        if self.forest.min_samples_leaf == 0 {
            return Err(TrainingError::config("min_samples_leaf must be at least 1"));
        }
        if self.artifacts.model == self.artifacts.schema {
            return Err(TrainingError::config(
                "model and schema artifacts must be different files",
            ));
        }
        Ok(())
    }
}
