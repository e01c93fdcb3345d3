//! Seeded train/test partitioning.

use crate::dataset::Dataset;
use crate::error::{DataError, DataResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How to hold out the test partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of rows held out for testing, in (0, 1).
    pub test_size: f64,
    /// Seed for the row shuffle.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_size: 0.3,
            seed: 42,
        }
    }
}

impl SplitConfig {
    /// Validate the test fraction.
    pub fn validate(&self) -> DataResult<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(DataError::InvalidTestSize(self.test_size));
        }
        Ok(())
    }

    /// Number of test rows for a dataset of `rows` rows (rounded up).
    pub fn test_rows(&self, rows: usize) -> usize {
        (rows as f64 * self.test_size).ceil() as usize
    }
}

/// Shuffle row indices with the configured seed and split them into
/// `(train, test)`.
///
/// The test partition takes the first `ceil(n * test_size)` shuffled rows;
/// the same dataset and seed always produce the same partitions.
pub fn train_test_split(dataset: &Dataset, config: &SplitConfig) -> DataResult<(Dataset, Dataset)> {
    config.validate()?;

    let rows = dataset.len();
    let n_test = config.test_rows(rows);
    if n_test == 0 || n_test >= rows {
        return Err(DataError::TooFewRows { rows });
    }

    let mut indices: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    debug!(
        "Split {} rows into {} train / {} test (seed={})",
        rows,
        train_idx.len(),
        test_idx.len(),
        config.seed
    );

    Ok((dataset.select(train_idx), dataset.select(test_idx)))
}
