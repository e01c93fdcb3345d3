//! Random-forest classifier over string labels.
//!
//! `smartcore` fits on numeric class ids, so labels are encoded to `u32` in
//! sorted order before fitting and decoded after prediction. The label table
//! is stored with the forest so a loaded model decodes exactly as trained.

use crate::error::{ModelError, ModelResult};
use crate::model::DiagnosisModel;
use healthrec_core::FeatureVector;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

type Forest = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

/// Forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestParams {
    /// Number of trees.
    pub n_trees: u16,
    /// Seed for bootstrap sampling and feature selection.
    pub seed: u64,
    /// Maximum tree depth; `None` grows trees until leaves are pure.
    pub max_depth: Option<u16>,
    /// Minimum rows required to split a node.
    pub min_samples_split: usize,
    /// Minimum rows in a leaf.
    pub min_samples_leaf: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl ForestParams {
    fn to_smartcore(self) -> RandomForestClassifierParameters {
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(self.n_trees)
            .with_seed(self.seed)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf);
        match self.max_depth {
            Some(depth) => params.with_max_depth(depth),
            None => params,
        }
    }
}

/// A fitted random forest together with its label table.
#[derive(Serialize, Deserialize)]
pub struct ForestClassifier {
    labels: Vec<String>,
    n_features: usize,
    params: ForestParams,
    forest: Forest,
}

impl std::fmt::Debug for ForestClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForestClassifier")
            .field("labels", &self.labels)
            .field("n_features", &self.n_features)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl ForestClassifier {
    /// Fit a forest on `features` (one row per example) and `labels`.
    pub fn fit(
        features: &[Vec<f64>],
        labels: &[String],
        params: &ForestParams,
    ) -> ModelResult<Self> {
        if features.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        if features.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                rows: features.len(),
                labels: labels.len(),
            });
        }
        if params.n_trees == 0 {
            return Err(ModelError::fit("n_trees must be at least 1"));
        }
        let n_features = features[0].len();
        check_widths(features, n_features)?;

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let class_ids: HashMap<&str, u32> = classes
            .iter()
            .enumerate()
            .map(|(id, label)| (label.as_str(), id as u32))
            .collect();
        let y: Vec<u32> = labels.iter().map(|l| class_ids[l.as_str()]).collect();

        info!(
            "Fitting random forest: rows={}, features={}, classes={}, n_trees={}, seed={}",
            features.len(),
            n_features,
            classes.len(),
            params.n_trees,
            params.seed
        );
        let x = DenseMatrix::from_2d_vec(&features.to_vec());
        let forest = RandomForestClassifier::fit(&x, &y, params.to_smartcore())
            .map_err(ModelError::fit)?;
        debug!("Random forest fitted");

        Ok(Self {
            labels: classes,
            n_features,
            params: *params,
            forest,
        })
    }

    /// Predict a label for every row.
    pub fn predict_batch(&self, features: &[Vec<f64>]) -> ModelResult<Vec<String>> {
        if features.is_empty() {
            return Ok(Vec::new());
        }
        check_widths(features, self.n_features)?;

        let x = DenseMatrix::from_2d_vec(&features.to_vec());
        let ids = self.forest.predict(&x).map_err(ModelError::predict)?;
        ids.into_iter().map(|id| self.decode(id)).collect()
    }

    /// Hyperparameters the forest was fitted with.
    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    fn decode(&self, id: u32) -> ModelResult<String> {
        self.labels
            .get(id as usize)
            .cloned()
            .ok_or(ModelError::UnknownClassId(id))
    }
}

fn check_widths(features: &[Vec<f64>], expected: usize) -> ModelResult<()> {
    match features.iter().find(|row| row.len() != expected) {
        Some(row) => Err(ModelError::FeatureCount {
            expected,
            actual: row.len(),
        }),
        None => Ok(()),
    }
}

impl DiagnosisModel for ForestClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_one(&self, features: &FeatureVector) -> ModelResult<String> {
        let mut predictions = self.predict_batch(&[features.to_vec()])?;
        predictions
            .pop()
            .ok_or_else(|| ModelError::predict("model returned no prediction"))
    }
}
