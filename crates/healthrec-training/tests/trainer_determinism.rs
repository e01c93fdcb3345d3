use healthrec_core::{FeatureSchema, FeatureVector, PatientInput};
use healthrec_data::{synthetic, write_csv, SyntheticConfig};
use healthrec_model::artifact::load_validated;
use healthrec_model::DiagnosisModel;
use healthrec_training::{Trainer, TrainerConfig};
use std::path::Path;
use tempfile::tempdir;

fn config_in(dir: &Path) -> TrainerConfig {
    TrainerConfig::default()
        .with_data_path(dir.join("medical_data.csv"))
        .with_model_path(dir.join("disease_model.json"))
        .with_schema_path(dir.join("feature_columns.json"))
        .with_n_trees(25)
}

fn write_dataset(dir: &Path, rows: usize) {
    let dataset = synthetic::generate(&SyntheticConfig { rows, seed: 11 }).unwrap();
    write_csv(dir.join("medical_data.csv"), &dataset, "diagnosis").unwrap();
}

#[test]
fn repeated_runs_give_identical_results() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), 300);
    let trainer = Trainer::new(config_in(dir.path()));

    let first = trainer.run().unwrap();
    let second = trainer.run().unwrap();

    assert_eq!(first.accuracy, second.accuracy);
    assert_eq!(first.report, second.report);
    assert_eq!(first.report.to_string(), second.report.to_string());
    assert_eq!(first.test_rows, 90);
}

#[test]
fn written_artifacts_load_and_predict() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), 250);
    let config = config_in(dir.path());
    Trainer::new(config.clone()).run().unwrap();

    let schema = FeatureSchema::patient_vitals();
    let model = load_validated(&config.artifacts, &schema).unwrap();
    assert_eq!(model.n_features(), 9);
    assert_eq!(model.labels().len(), 5);

    let features: FeatureVector = PatientInput::default().validate(&schema).unwrap();
    let label = model.predict_one(&features).unwrap();
    assert!(model.labels().contains(&label));
}

#[test]
fn training_overwrites_existing_artifacts() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), 120);
    let config = config_in(dir.path());
    std::fs::write(&config.artifacts.model, "stale").unwrap();
    std::fs::write(&config.artifacts.schema, "stale").unwrap();

    Trainer::new(config.clone()).run().unwrap();
    assert!(load_validated(&config.artifacts, &FeatureSchema::patient_vitals()).is_ok());
}

#[test]
fn missing_target_column_is_an_error() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), 50);
    let mut config = config_in(dir.path());
    config.target_column = "outcome".to_string();

    let err = Trainer::new(config.clone()).run().unwrap_err();
    assert!(err.to_string().contains("outcome"), "{err}");
    assert!(!config.artifacts.model.exists());
}
