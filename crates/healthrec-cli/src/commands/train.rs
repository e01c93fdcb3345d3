//! Train Command Implementation
//!
//! Loads the training CSV, fits the forest, prints the evaluation and writes
//! the model and feature-schema files. Settings come from an optional JSON
//! config file, with command-line flags taking precedence.

use anyhow::{Context, Result};
use clap::Args;
use healthrec_training::{Trainer, TrainerConfig};
use std::path::PathBuf;
use tracing::info;

/// Train the diagnosis model
///
/// # Example
///
/// ```bash
/// healthrec train \
///     --data medical_data.csv \
///     --model-out disease_model.json \
///     --schema-out feature_columns.json
/// ```
#[derive(Args, Debug, Clone, Default)]
pub struct TrainCommand {
    /// Training configuration file (JSON)
    #[arg(long, short = 'c', env = "HEALTHREC_TRAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Training CSV [default: medical_data.csv]
    #[arg(long, short = 'd', env = "HEALTHREC_DATA")]
    pub data: Option<PathBuf>,

    /// Where to write the model [default: disease_model.json]
    #[arg(long, env = "HEALTHREC_MODEL")]
    pub model_out: Option<PathBuf>,

    /// Where to write the feature schema [default: feature_columns.json]
    #[arg(long, env = "HEALTHREC_SCHEMA")]
    pub schema_out: Option<PathBuf>,

    /// Fraction of rows held out for evaluation [default: 0.3]
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Number of trees [default: 100]
    #[arg(long)]
    pub n_trees: Option<u16>,

    /// Seed for the split and the forest [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TrainCommand {
    /// Resolve the trainer configuration: file (or defaults), then flags.
    pub fn trainer_config(&self) -> Result<TrainerConfig> {
        let mut config = match &self.config {
            Some(path) => TrainerConfig::from_json_file(path)
                .with_context(|| format!("Failed to load training config {:?}", path))?,
            None => TrainerConfig::default(),
        };

        if let Some(data) = &self.data {
            config = config.with_data_path(data);
        }
        if let Some(model) = &self.model_out {
            config = config.with_model_path(model);
        }
        if let Some(schema) = &self.schema_out {
            config = config.with_schema_path(schema);
        }
        if let Some(test_size) = self.test_size {
            config = config.with_test_size(test_size);
        }
        if let Some(n_trees) = self.n_trees {
            config = config.with_n_trees(n_trees);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate().context("Invalid training configuration")?;
        Ok(config)
    }

    /// Execute the train command
    pub async fn run(&self) -> Result<()> {
        let config = self.trainer_config()?;
        info!("Training on {:?}", config.data_path);

        let summary = tokio::task::spawn_blocking(move || Trainer::new(config).run())
            .await
            .context("Training task panicked")?
            .context("Training failed")?;

        println!("Accuracy: {}", summary.accuracy);
        println!("\nClassification Report:\n{}", summary.report);
        println!("\nModel and feature list saved successfully.");
        Ok(())
    }
}
