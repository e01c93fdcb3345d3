use healthrec_core::{FeatureSchema, TARGET_COLUMN};
use healthrec_data::{
    load_csv, synthetic, train_test_split, write_csv, DataError, SplitConfig, SyntheticConfig,
};
use tempfile::tempdir;

#[test]
fn synthetic_dataset_survives_a_csv_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("medical_data.csv");

    let dataset = synthetic::generate(&SyntheticConfig { rows: 120, seed: 3 }).unwrap();
    write_csv(&path, &dataset, TARGET_COLUMN).unwrap();

    let loaded = load_csv(&path, &FeatureSchema::patient_vitals(), TARGET_COLUMN).unwrap();
    assert_eq!(loaded, dataset);
}

#[test]
fn write_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("medical_data.csv");
    std::fs::write(&path, "stale contents that are not csv\n").unwrap();

    let dataset = synthetic::generate(&SyntheticConfig { rows: 10, seed: 1 }).unwrap();
    write_csv(&path, &dataset, TARGET_COLUMN).unwrap();

    let loaded = load_csv(&path, &FeatureSchema::patient_vitals(), TARGET_COLUMN).unwrap();
    assert_eq!(loaded.len(), 10);
}

#[test]
fn loaded_dataset_splits_reproducibly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("medical_data.csv");
    let dataset = synthetic::generate(&SyntheticConfig { rows: 200, seed: 11 }).unwrap();
    write_csv(&path, &dataset, TARGET_COLUMN).unwrap();

    let schema = FeatureSchema::patient_vitals();
    let first = load_csv(&path, &schema, TARGET_COLUMN).unwrap();
    let second = load_csv(&path, &schema, TARGET_COLUMN).unwrap();

    let config = SplitConfig::default();
    let (train_a, test_a) = train_test_split(&first, &config).unwrap();
    let (train_b, test_b) = train_test_split(&second, &config).unwrap();
    assert_eq!(train_a, train_b);
    assert_eq!(test_a, test_b);
    assert_eq!(test_a.len(), 60);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_csv(
        dir.path().join("absent.csv"),
        &FeatureSchema::patient_vitals(),
        TARGET_COLUMN,
    )
    .unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
}
