//! healthrec CLI library
//!
//! - **Train**: fit the random forest on a CSV and write the artifacts
//! - **Serve**: run the web UI on top of the trained artifacts
//! - **Predict**: one prediction from command-line flags
//! - **GenerateData**: write a seeded synthetic training CSV
//!
//! # Example
//!
//! ```bash
//! healthrec generate-data --rows 500
//! healthrec train
//! healthrec serve --port 8501
//! healthrec predict --age 45 --glucose-level 210 --fatigue
//! ```

#![warn(missing_docs)]

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{GenerateDataCommand, PredictCommand, ServeCommand, TrainCommand};

/// healthrec - disease prediction and lifestyle recommendations
///
/// Educational demo only; not for real medical decisions.
#[derive(Parser, Debug)]
#[command(name = "healthrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the model and write the model and feature-schema files
    Train(TrainCommand),

    /// Serve the web UI
    Serve(ServeCommand),

    /// Predict a diagnosis from command-line values
    Predict(PredictCommand),

    /// Write a synthetic training dataset
    GenerateData(GenerateDataCommand),
}
