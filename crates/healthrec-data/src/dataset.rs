//! In-memory labelled dataset.

use crate::error::{DataError, DataResult};
use std::collections::BTreeMap;

/// Feature rows and their diagnosis labels.
///
/// Rows are stored in the column order given by `feature_names`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    labels: Vec<String>,
}

impl Dataset {
    /// Create a dataset, checking that every row has one value per feature
    /// and one label.
    pub fn new(
        feature_names: Vec<String>,
        features: Vec<Vec<f64>>,
        labels: Vec<String>,
    ) -> DataResult<Self> {
        if features.len() != labels.len() {
            return Err(DataError::LengthMismatch {
                rows: features.len(),
                labels: labels.len(),
            });
        }
        if let Some((idx, row)) = features
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != feature_names.len())
        {
            return Err(DataError::InvalidValue {
                row: idx + 1,
                column: "*".to_string(),
                value: format!("{} values for {} features", row.len(), feature_names.len()),
            });
        }
        Ok(Self {
            feature_names,
            features,
            labels,
        })
    }

    /// Feature column names, in row order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature rows.
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Labels, one per row.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row count per label, sorted by label.
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for label in &self.labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// A new dataset holding the given rows, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            feature_names: self.feature_names.clone(),
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i].clone()).collect(),
        }
    }
}
