//! Feature schema shared by training and prediction.
//!
//! The classifier only sees a row of numbers, so the column order used at
//! training time must be exactly the order used when a prediction vector is
//! assembled. [`FeatureSchema`] makes that contract explicit: the trainer
//! persists it next to the model and the predictor refuses to load a model
//! whose persisted schema disagrees with its own.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Format version written into persisted schemas.
pub const SCHEMA_FORMAT_VERSION: u32 = 1;

/// Number of features in the patient vitals schema.
pub const NUM_FEATURES: usize = 9;

/// Feature column names in training order.
pub const FEATURE_COLUMNS: [&str; NUM_FEATURES] = [
    "age",
    "blood_pressure",
    "glucose_level",
    "heart_rate",
    "bmi",
    "symptom_fever",
    "symptom_cough",
    "symptom_fatigue",
    "symptom_pain",
];

/// Name of the target column in the training CSV.
pub const TARGET_COLUMN: &str = "diagnosis";

/// The type of a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// A numeric value within inclusive bounds.
    Continuous {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// A boolean encoded as 0 or 1.
    Flag,
}

impl FieldKind {
    fn same_variant(&self, other: &FieldKind) -> bool {
        matches!(
            (self, other),
            (FieldKind::Continuous { .. }, FieldKind::Continuous { .. })
                | (FieldKind::Flag, FieldKind::Flag)
        )
    }
}

/// A named, typed feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name.
    pub name: String,
    /// Value type.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a continuous field with inclusive bounds.
    pub fn continuous(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Continuous { min, max },
        }
    }

    /// Create a 0/1 flag field.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Flag,
        }
    }

    /// Check a single value against this field.
    pub fn check(&self, value: f64) -> CoreResult<()> {
        if !value.is_finite() {
            return Err(CoreError::NonFinite {
                field: self.name.clone(),
            });
        }
        match self.kind {
            FieldKind::Continuous { min, max } => {
                if value < min || value > max {
                    return Err(CoreError::OutOfRange {
                        field: self.name.clone(),
                        value,
                        min,
                        max,
                    });
                }
            }
            FieldKind::Flag => {
                if value != 0.0 && value != 1.0 {
                    return Err(CoreError::InvalidFlag {
                        field: self.name.clone(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of features a model was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    /// Format version of the persisted schema.
    pub format_version: u32,
    /// Fields in column order.
    pub fields: Vec<FieldSpec>,
}

impl FeatureSchema {
    /// Create a schema from fields in column order.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            format_version: SCHEMA_FORMAT_VERSION,
            fields,
        }
    }

    /// The nine patient vitals, with the bounds the input form enforces.
    pub fn patient_vitals() -> Self {
        Self::new(vec![
            FieldSpec::continuous("age", 10.0, 90.0),
            FieldSpec::continuous("blood_pressure", 90.0, 200.0),
            FieldSpec::continuous("glucose_level", 70.0, 250.0),
            FieldSpec::continuous("heart_rate", 50.0, 140.0),
            FieldSpec::continuous("bmi", 15.0, 40.0),
            FieldSpec::flag("symptom_fever"),
            FieldSpec::flag("symptom_cough"),
            FieldSpec::flag("symptom_fatigue"),
            FieldSpec::flag("symptom_pain"),
        ])
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Position of a field by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a row of values against the schema.
    pub fn validate(&self, values: &[f64]) -> CoreResult<()> {
        if values.len() != self.fields.len() {
            return Err(CoreError::FeatureCount {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }
        for (field, &value) in self.fields.iter().zip(values) {
            field.check(value)?;
        }
        Ok(())
    }

    /// Check that `persisted` (usually read from disk) describes the same
    /// columns, in the same order and of the same kinds, as `self`.
    ///
    /// Bounds are not compared: they constrain inputs, not the column layout.
    pub fn ensure_matches(&self, persisted: &FeatureSchema) -> CoreResult<()> {
        if persisted.format_version != SCHEMA_FORMAT_VERSION {
            return Err(CoreError::UnsupportedSchemaVersion {
                expected: SCHEMA_FORMAT_VERSION,
                found: persisted.format_version,
            });
        }
        if self.fields.len() != persisted.fields.len() {
            return Err(CoreError::schema_mismatch(format!(
                "expected {} fields, persisted schema has {}",
                self.fields.len(),
                persisted.fields.len()
            )));
        }
        for (idx, (ours, theirs)) in self.fields.iter().zip(&persisted.fields).enumerate() {
            if ours.name != theirs.name {
                return Err(CoreError::schema_mismatch(format!(
                    "field {} is {:?}, expected {:?}",
                    idx, theirs.name, ours.name
                )));
            }
            if !ours.kind.same_variant(&theirs.kind) {
                return Err(CoreError::schema_mismatch(format!(
                    "field {:?} has kind {:?}, expected {:?}",
                    ours.name, theirs.kind, ours.kind
                )));
            }
        }
        Ok(())
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::patient_vitals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_vitals_order_matches_columns() {
        let schema = FeatureSchema::patient_vitals();
        assert_eq!(schema.len(), NUM_FEATURES);
        assert_eq!(schema.names(), FEATURE_COLUMNS.to_vec());
        assert_eq!(schema.index_of("heart_rate"), Some(3));
        assert_eq!(schema.index_of("diagnosis"), None);
    }

    #[test]
    fn test_validate_bounds_and_flags() {
        let schema = FeatureSchema::patient_vitals();
        let good = [45.0, 130.0, 110.0, 75.0, 26.0, 1.0, 0.0, 1.0, 0.0];
        assert!(schema.validate(&good).is_ok());

        let mut too_old = good;
        too_old[0] = 91.0;
        assert!(matches!(
            schema.validate(&too_old),
            Err(CoreError::OutOfRange { ref field, .. }) if field == "age"
        ));

        let mut bad_flag = good;
        bad_flag[6] = 0.5;
        assert!(matches!(
            schema.validate(&bad_flag),
            Err(CoreError::InvalidFlag { ref field, .. }) if field == "symptom_cough"
        ));

        let mut nan = good;
        nan[4] = f64::NAN;
        assert!(matches!(schema.validate(&nan), Err(CoreError::NonFinite { .. })));

        assert!(matches!(
            schema.validate(&good[..8]),
            Err(CoreError::FeatureCount {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schema = FeatureSchema::patient_vitals();
        let low = [10.0, 90.0, 70.0, 50.0, 15.0, 0.0, 0.0, 0.0, 0.0];
        let high = [90.0, 200.0, 250.0, 140.0, 40.0, 1.0, 1.0, 1.0, 1.0];
        assert!(schema.validate(&low).is_ok());
        assert!(schema.validate(&high).is_ok());
    }

    #[test]
    fn test_ensure_matches_detects_reordering() {
        let ours = FeatureSchema::patient_vitals();
        assert!(ours.ensure_matches(&ours.clone()).is_ok());

        let mut swapped = ours.clone();
        swapped.fields.swap(0, 1);
        let err = ours.ensure_matches(&swapped).unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
        assert!(err.to_string().contains("\"blood_pressure\""));
    }

    #[test]
    fn test_ensure_matches_detects_kind_and_length() {
        let ours = FeatureSchema::patient_vitals();

        let mut retyped = ours.clone();
        retyped.fields[5] = FieldSpec::continuous("symptom_fever", 0.0, 1.0);
        assert!(ours.ensure_matches(&retyped).is_err());

        let mut shorter = ours.clone();
        shorter.fields.pop();
        assert!(ours.ensure_matches(&shorter).is_err());

        let mut rebounded = ours.clone();
        rebounded.fields[0] = FieldSpec::continuous("age", 0.0, 120.0);
        assert!(ours.ensure_matches(&rebounded).is_ok());
    }

    #[test]
    fn test_ensure_matches_rejects_future_version() {
        let ours = FeatureSchema::patient_vitals();
        let mut future = ours.clone();
        future.format_version = SCHEMA_FORMAT_VERSION + 1;
        assert!(matches!(
            ours.ensure_matches(&future),
            Err(CoreError::UnsupportedSchemaVersion { .. })
        ));
    }

    #[test]
    fn test_schema_json_shape() {
        let schema = FeatureSchema::new(vec![
            FieldSpec::continuous("age", 10.0, 90.0),
            FieldSpec::flag("symptom_pain"),
        ]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["format_version"], 1);
        assert_eq!(json["fields"][0]["name"], "age");
        assert_eq!(json["fields"][0]["kind"]["type"], "continuous");
        assert_eq!(json["fields"][0]["kind"]["max"], 90.0);
        assert_eq!(json["fields"][1]["kind"]["type"], "flag");

        let back: FeatureSchema = serde_json::from_value(json).unwrap();
        assert_eq!(back, schema);
    }
}
