//! Generate-Data Command Implementation

use anyhow::{Context, Result};
use clap::Args;
use healthrec_core::TARGET_COLUMN;
use healthrec_data::{synthetic, write_csv, SyntheticConfig};
use std::path::PathBuf;
use tracing::info;

/// Write a seeded synthetic training CSV
///
/// # Example
///
/// ```bash
/// healthrec generate-data --rows 1000 --seed 7 --output medical_data.csv
/// ```
#[derive(Args, Debug, Clone)]
pub struct GenerateDataCommand {
    /// Number of rows
    #[arg(long, short = 'n', default_value = "500")]
    pub rows: usize,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output CSV (overwritten if present)
    #[arg(long, short = 'o', default_value = "medical_data.csv", env = "HEALTHREC_DATA")]
    pub output: PathBuf,
}

impl GenerateDataCommand {
    /// Execute the generate-data command
    pub async fn run(&self) -> Result<()> {
        if self.rows == 0 {
            anyhow::bail!("--rows must be at least 1");
        }
        let dataset = synthetic::generate(&SyntheticConfig {
            rows: self.rows,
            seed: self.seed,
        })
        .context("Failed to generate dataset")?;
        info!("Class counts: {:?}", dataset.class_counts());

        write_csv(&self.output, &dataset, TARGET_COLUMN)
            .with_context(|| format!("Failed to write {:?}", self.output))?;
        println!("Wrote {} rows to {}", dataset.len(), self.output.display());
        Ok(())
    }
}
