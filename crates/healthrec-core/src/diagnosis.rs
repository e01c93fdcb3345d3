//! Diagnosis labels known to the advisory table.

use crate::advice::{self, AdvisoryRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of diagnoses that have dedicated advice.
///
/// The classifier may emit labels outside this set; those are handled by
/// [`advice::recommendations_for`] through the default record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Diagnosis {
    /// "Diabetes"
    Diabetes,
    /// "Hypertension"
    Hypertension,
    /// "Heart Disease"
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    /// "Flu"
    Flu,
    /// "Normal"
    Normal,
}

impl Diagnosis {
    /// Every known diagnosis.
    pub const ALL: [Diagnosis; 5] = [
        Diagnosis::Diabetes,
        Diagnosis::Hypertension,
        Diagnosis::HeartDisease,
        Diagnosis::Flu,
        Diagnosis::Normal,
    ];

    /// The label string used in training data and model output.
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Diabetes => "Diabetes",
            Diagnosis::Hypertension => "Hypertension",
            Diagnosis::HeartDisease => "Heart Disease",
            Diagnosis::Flu => "Flu",
            Diagnosis::Normal => "Normal",
        }
    }

    /// Parse a label exactly as the classifier emits it (case-sensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// The advisory record for this diagnosis.
    pub fn recommendations(&self) -> &'static AdvisoryRecord {
        advice::record_for(*self)
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiagnosis(pub String);

impl fmt::Display for UnknownDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagnosis label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDiagnosis {}

impl FromStr for Diagnosis {
    type Err = UnknownDiagnosis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownDiagnosis(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for diagnosis in Diagnosis::ALL {
            assert_eq!(Diagnosis::from_label(diagnosis.label()), Some(diagnosis));
            assert_eq!(diagnosis.to_string(), diagnosis.label());
        }
        assert_eq!(
            "Heart Disease".parse::<Diagnosis>(),
            Ok(Diagnosis::HeartDisease)
        );
    }

    #[test]
    fn test_label_matching_is_exact() {
        assert_eq!(Diagnosis::from_label("diabetes"), None);
        assert_eq!(Diagnosis::from_label("HeartDisease"), None);
        assert_eq!(Diagnosis::from_label(" Flu"), None);
        assert!("Unknown".parse::<Diagnosis>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Diagnosis::HeartDisease).unwrap();
        assert_eq!(json, "\"Heart Disease\"");
        let back: Diagnosis = serde_json::from_str("\"Flu\"").unwrap();
        assert_eq!(back, Diagnosis::Flu);
    }
}
