//! Predict Command Implementation
//!
//! Runs one prediction against the trained artifacts and prints the same
//! result block the web UI shows.

use anyhow::{Context, Result};
use clap::Args;
use healthrec_core::PatientInput;
use healthrec_model::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCHEMA_FILE};
use healthrec_serving::{render_text, ModelLoader, PredictResponse, Predictor};
use std::path::PathBuf;
use std::sync::Arc;

/// Predict a diagnosis from command-line values
///
/// # Example
///
/// ```bash
/// healthrec predict --age 45 --blood-pressure 130 --glucose-level 110 \
///     --heart-rate 75 --bmi 26 --fever --fatigue
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Model file written by `healthrec train`
    #[arg(long, short = 'm', default_value = DEFAULT_MODEL_FILE, env = "HEALTHREC_MODEL")]
    pub model: PathBuf,

    /// Feature-schema file written by `healthrec train`
    #[arg(long, short = 's', default_value = DEFAULT_SCHEMA_FILE, env = "HEALTHREC_SCHEMA")]
    pub schema: PathBuf,

    /// Age in years (10-90)
    #[arg(long, default_value = "30")]
    pub age: f64,

    /// Systolic blood pressure in mmHg (90-200)
    #[arg(long, default_value = "120")]
    pub blood_pressure: f64,

    /// Glucose level in mg/dL (70-250)
    #[arg(long, default_value = "100")]
    pub glucose_level: f64,

    /// Heart rate in beats per minute (50-140)
    #[arg(long, default_value = "80")]
    pub heart_rate: f64,

    /// Body mass index (15.0-40.0)
    #[arg(long, default_value = "24.0")]
    pub bmi: f64,

    /// Fever
    #[arg(long)]
    pub fever: bool,

    /// Cough
    #[arg(long)]
    pub cough: bool,

    /// Fatigue / tiredness
    #[arg(long)]
    pub fatigue: bool,

    /// Chest or body pain
    #[arg(long)]
    pub pain: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictCommand {
    /// Form values assembled from the flags.
    pub fn patient_input(&self) -> PatientInput {
        PatientInput {
            age: self.age,
            blood_pressure: self.blood_pressure,
            glucose_level: self.glucose_level,
            heart_rate: self.heart_rate,
            bmi: self.bmi,
            symptom_fever: self.fever,
            symptom_cough: self.cough,
            symptom_fatigue: self.fatigue,
            symptom_pain: self.pain,
        }
    }

    /// Execute the predict command
    pub async fn run(&self) -> Result<()> {
        let loader = Arc::new(ModelLoader::new(ArtifactPaths::new(&self.model, &self.schema)));
        let predictor = Predictor::new(loader);
        let outcome = predictor
            .predict(&self.patient_input())
            .context("Prediction failed")?;

        if self.json {
            let response = PredictResponse {
                known: outcome.is_known(),
                diagnosis: outcome.label.clone(),
                recommendations: outcome.recommendations,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            print!("{}", render_text(&outcome));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn command(dir: &std::path::Path) -> PredictCommand {
        PredictCommand {
            model: dir.join("disease_model.json"),
            schema: dir.join("feature_columns.json"),
            age: 45.0,
            blood_pressure: 130.0,
            glucose_level: 110.0,
            heart_rate: 75.0,
            bmi: 26.0,
            fever: true,
            cough: false,
            fatigue: true,
            pain: false,
            json: false,
        }
    }

    #[test]
    fn test_patient_input() {
        let dir = tempdir().unwrap();
        let input = command(dir.path()).patient_input();
        assert_eq!(
            input.to_feature_vector().as_slice(),
            &[45.0, 130.0, 110.0, 75.0, 26.0, 1.0, 0.0, 1.0, 0.0]
        );
    }

    #[tokio::test]
    async fn test_missing_artifacts_fail() {
        let dir = tempdir().unwrap();
        let err = command(dir.path()).run().await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load model"));
    }
}
