use healthrec_core::{CoreError, FeatureSchema, FeatureVector, FEATURE_COLUMNS};
use healthrec_model::artifact::{self, load_validated};
use healthrec_model::{ArtifactPaths, DiagnosisModel, ForestClassifier, ForestParams, ModelError};
use tempfile::tempdir;

fn vitals(glucose: f64, bp: f64, fever: f64) -> Vec<f64> {
    vec![50.0, bp, glucose, 80.0, 27.0, fever, fever, 0.0, 0.0]
}

fn trained() -> ForestClassifier {
    let mut features = Vec::new();
    let mut labels = Vec::new();
    for i in 0..15 {
        let d = i as f64;
        features.push(vitals(200.0 + d, 120.0, 0.0));
        labels.push("Diabetes".to_string());
        features.push(vitals(90.0 + d, 185.0, 0.0));
        labels.push("Hypertension".to_string());
        features.push(vitals(95.0 + d, 115.0, 1.0));
        labels.push("Flu".to_string());
    }
    let params = ForestParams {
        n_trees: 15,
        ..Default::default()
    };
    ForestClassifier::fit(&features, &labels, &params).unwrap()
}

#[test]
fn saved_model_predicts_like_the_fitted_one() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let schema = FeatureSchema::patient_vitals();
    let model = trained();

    artifact::save(&paths, &model, &schema).unwrap();
    let loaded = load_validated(&paths, &schema).unwrap();

    assert_eq!(loaded.labels(), model.labels());
    assert_eq!(loaded.params(), model.params());

    let probes = vec![
        vitals(230.0, 125.0, 0.0),
        vitals(100.0, 190.0, 0.0),
        vitals(100.0, 118.0, 1.0),
    ];
    assert_eq!(
        loaded.predict_batch(&probes).unwrap(),
        model.predict_batch(&probes).unwrap()
    );

    let single = FeatureVector::from_slice(&probes[0]).unwrap();
    assert_eq!(
        loaded.predict_one(&single).unwrap(),
        model.predict_one(&single).unwrap()
    );
}

#[test]
fn schema_file_lists_columns_in_training_order() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    artifact::save(&paths, &trained(), &FeatureSchema::patient_vitals()).unwrap();

    let persisted = artifact::load_schema(&paths.schema).unwrap();
    assert_eq!(persisted.names(), FEATURE_COLUMNS.to_vec());
}

#[test]
fn reordered_schema_fails_at_load() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let schema = FeatureSchema::patient_vitals();
    artifact::save(&paths, &trained(), &schema).unwrap();

    let mut reordered = schema.clone();
    reordered.fields.swap(1, 2);
    artifact::save_schema(&paths.schema, &reordered).unwrap();

    let err = load_validated(&paths, &schema).unwrap_err();
    assert!(matches!(err, ModelError::Schema(CoreError::SchemaMismatch(_))));
}

#[test]
fn missing_artifacts_fail_at_load() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let schema = FeatureSchema::patient_vitals();

    assert!(matches!(
        load_validated(&paths, &schema),
        Err(ModelError::Io { .. })
    ));

    artifact::save_schema(&paths.schema, &schema).unwrap();
    let err = load_validated(&paths, &schema).unwrap_err();
    match err {
        ModelError::Io { path, .. } => assert_eq!(path, paths.model),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn save_overwrites_previous_artifacts() {
    let dir = tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    std::fs::write(&paths.model, "old model").unwrap();
    std::fs::write(&paths.schema, "old schema").unwrap();

    let schema = FeatureSchema::patient_vitals();
    artifact::save(&paths, &trained(), &schema).unwrap();
    assert!(load_validated(&paths, &schema).is_ok());
}
