//! The training pipeline.

use crate::config::TrainerConfig;
use crate::error::TrainingResult;
use crate::metrics::ClassificationReport;
use healthrec_core::FeatureSchema;
use healthrec_data::{load_csv, train_test_split, Dataset};
use healthrec_model::{artifact, ForestClassifier};
use tracing::{debug, info};

/// Outcome of one training run.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    /// Rows the forest was fitted on.
    pub train_rows: usize,
    /// Rows held out for evaluation.
    pub test_rows: usize,
    /// Accuracy on the held-out rows.
    pub accuracy: f64,
    /// Per-class report on the held-out rows.
    pub report: ClassificationReport,
}

/// Loads data, fits the forest, evaluates it and writes the artifacts.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    schema: FeatureSchema,
}

impl Trainer {
    /// Trainer over the patient-vitals schema.
    pub fn new(config: TrainerConfig) -> Self {
        Self {
            config,
            schema: FeatureSchema::patient_vitals(),
        }
    }

    /// Trainer configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Feature schema the data is loaded against.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run the full pipeline. Existing artifact files are overwritten.
    pub fn run(&self) -> TrainingResult<TrainingSummary> {
        self.config.validate()?;

        let dataset = load_csv(&self.config.data_path, &self.schema, &self.config.target_column)?;
        let (model, summary) = self.fit_and_evaluate(&dataset)?;

        artifact::save(&self.config.artifacts, &model, &self.schema)?;
        info!(
            "Training complete: accuracy={:.4}, model={:?}, schema={:?}",
            summary.accuracy, self.config.artifacts.model, self.config.artifacts.schema
        );
        Ok(summary)
    }

    /// Split `dataset`, fit on the train partition and evaluate on the test
    /// partition. Nothing is written to disk.
    pub fn fit_and_evaluate(
        &self,
        dataset: &Dataset,
    ) -> TrainingResult<(ForestClassifier, TrainingSummary)> {
        debug!("Class counts: {:?}", dataset.class_counts());

        let (train, test) = train_test_split(dataset, &self.config.split)?;
        info!(
            "Split {} rows into {} train / {} test (seed={})",
            dataset.len(),
            train.len(),
            test.len(),
            self.config.split.seed
        );

        let model = ForestClassifier::fit(train.features(), train.labels(), &self.config.forest)?;
        let predictions = model.predict_batch(test.features())?;
        let report = ClassificationReport::from_predictions(test.labels(), &predictions);

        let summary = TrainingSummary {
            train_rows: train.len(),
            test_rows: test.len(),
            accuracy: report.accuracy,
            report,
        };
        Ok((model, summary))
    }
}
