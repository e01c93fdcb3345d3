//! Patient inputs and their encoding into the model's feature vector.

use crate::error::{CoreError, CoreResult};
use crate::schema::{FeatureSchema, FEATURE_COLUMNS, NUM_FEATURES};
use serde::{Deserialize, Serialize};

/// Raw patient values as collected by the input form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in years.
    pub age: f64,
    /// Systolic blood pressure (mmHg).
    pub blood_pressure: f64,
    /// Glucose level (mg/dL).
    pub glucose_level: f64,
    /// Heart rate (beats per minute).
    pub heart_rate: f64,
    /// Body mass index.
    pub bmi: f64,
    /// Fever reported.
    #[serde(default)]
    pub symptom_fever: bool,
    /// Cough reported.
    #[serde(default)]
    pub symptom_cough: bool,
    /// Fatigue or tiredness reported.
    #[serde(default)]
    pub symptom_fatigue: bool,
    /// Chest or body pain reported.
    #[serde(default)]
    pub symptom_pain: bool,
}

impl Default for PatientInput {
    /// The form's initial slider positions, no symptoms selected.
    fn default() -> Self {
        Self {
            age: 30.0,
            blood_pressure: 120.0,
            glucose_level: 100.0,
            heart_rate: 80.0,
            bmi: 24.0,
            symptom_fever: false,
            symptom_cough: false,
            symptom_fatigue: false,
            symptom_pain: false,
        }
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl PatientInput {
    /// Encode the input in column order, flags as 0/1.
    ///
    /// The order here is the order of [`FEATURE_COLUMNS`]; any change must be
    /// made in both places.
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector([
            self.age,
            self.blood_pressure,
            self.glucose_level,
            self.heart_rate,
            self.bmi,
            flag(self.symptom_fever),
            flag(self.symptom_cough),
            flag(self.symptom_fatigue),
            flag(self.symptom_pain),
        ])
    }

    /// Encode the input and check it against `schema`.
    ///
    /// Fails if the schema does not have the patient vitals layout or any
    /// value is out of bounds.
    pub fn validate(&self, schema: &FeatureSchema) -> CoreResult<FeatureVector> {
        if schema.names() != FEATURE_COLUMNS {
            return Err(CoreError::schema_mismatch(format!(
                "patient input encodes {:?}, schema has {:?}",
                FEATURE_COLUMNS,
                schema.names()
            )));
        }
        let vector = self.to_feature_vector();
        schema.validate(vector.as_slice())?;
        Ok(vector)
    }
}

/// A single row of features in training column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    /// Build a vector from a slice already in column order.
    pub fn from_slice(values: &[f64]) -> CoreResult<Self> {
        let array: [f64; NUM_FEATURES] =
            values.try_into().map_err(|_| CoreError::FeatureCount {
                expected: NUM_FEATURES,
                actual: values.len(),
            })?;
        Ok(Self(array))
    }

    /// Values in column order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Values in column order, as an owned row.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Value of the named column.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|idx| self.0[idx])
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        NUM_FEATURES
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }
}
