//! Static medicine, diet, and lifestyle advice per diagnosis.

use crate::diagnosis::Diagnosis;
use serde::Serialize;

/// Advice shown alongside a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisoryRecord {
    /// Medicine suggestions.
    pub medicines: &'static [&'static str],
    /// Diet recommendations.
    pub diet: &'static [&'static str],
    /// Lifestyle suggestions.
    pub lifestyle: &'static [&'static str],
}

impl AdvisoryRecord {
    /// Returned for any label without a dedicated record.
    pub const DEFAULT: AdvisoryRecord = AdvisoryRecord {
        medicines: &["Consult a registered medical practitioner."],
        diet: &["Follow a simple, balanced home-cooked diet."],
        lifestyle: &["Maintain regular exercise and sleep schedule."],
    };

    /// The three sections with their display headings, in display order.
    pub fn sections(&self) -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("Medicine Suggestions", self.medicines),
            ("Diet Recommendations", self.diet),
            ("Lifestyle Suggestions", self.lifestyle),
        ]
    }
}

static DIABETES: AdvisoryRecord = AdvisoryRecord {
    medicines: &[
        "Metformin (as prescribed by doctor)",
        "Insulin therapy (if advised by doctor)",
    ],
    diet: &[
        "Avoid sugary drinks and sweets",
        "Eat more whole grains, vegetables, and high-fiber foods",
        "Control portion sizes, avoid overeating",
    ],
    lifestyle: &[
        "Walk at least 30 minutes daily",
        "Regular checkup for blood sugar levels",
        "Maintain healthy body weight",
    ],
};

static HYPERTENSION: AdvisoryRecord = AdvisoryRecord {
    medicines: &[
        "ACE inhibitors / ARBs (doctor prescribed)",
        "Beta-blockers or calcium channel blockers (if prescribed)",
    ],
    diet: &[
        "Low-salt (low-sodium) diet",
        "Avoid junk food and deep-fried items",
        "Increase intake of fruits and green leafy vegetables",
    ],
    lifestyle: &[
        "Regular blood pressure monitoring",
        "Reduce stress, practice yoga/meditation",
        "Avoid smoking and alcohol",
    ],
};

static HEART_DISEASE: AdvisoryRecord = AdvisoryRecord {
    medicines: &[
        "Antiplatelet drugs (like aspirin if prescribed)",
        "Statins to control cholesterol (doctor prescribed)",
    ],
    diet: &[
        "Low-fat, heart-healthy diet",
        "Avoid red meat and trans fats",
        "Eat more omega-3 rich foods (fish, flaxseeds)",
    ],
    lifestyle: &[
        "Regular moderate exercise (as per cardiologist guidance)",
        "Avoid smoking completely",
        "Manage stress properly",
    ],
};

static FLU: AdvisoryRecord = AdvisoryRecord {
    medicines: &[
        "Paracetamol for fever (as per dosage)",
        "Cough syrup (if prescribed)",
        "Plenty of fluids and rest",
    ],
    diet: &[
        "Warm fluids like soup and herbal tea",
        "Avoid cold drinks and junk food",
        "Eat light, easy-to-digest food",
    ],
    lifestyle: &[
        "Take proper rest and sleep",
        "Avoid going out to prevent spreading infection",
        "Maintain hygiene and use mask if coughing",
    ],
};

static NORMAL: AdvisoryRecord = AdvisoryRecord {
    medicines: &["No specific medicine required"],
    diet: &[
        "Maintain a balanced diet with fruits and vegetables",
        "Avoid excessive sugar, salt, and fast food",
    ],
    lifestyle: &[
        "Regular exercise (30 mins/day)",
        "Regular yearly health checkup",
        "Stay hydrated and sleep 7–8 hours",
    ],
};

static DEFAULT: AdvisoryRecord = AdvisoryRecord::DEFAULT;

pub(crate) fn record_for(diagnosis: Diagnosis) -> &'static AdvisoryRecord {
    match diagnosis {
        Diagnosis::Diabetes => &DIABETES,
        Diagnosis::Hypertension => &HYPERTENSION,
        Diagnosis::HeartDisease => &HEART_DISEASE,
        Diagnosis::Flu => &FLU,
        Diagnosis::Normal => &NORMAL,
    }
}

/// Advice for a predicted label; unknown labels get [`AdvisoryRecord::DEFAULT`].
pub fn recommendations_for(label: &str) -> &'static AdvisoryRecord {
    match Diagnosis::from_label(label) {
        Some(diagnosis) => record_for(diagnosis),
        None => &DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_record_is_complete() {
        for diagnosis in Diagnosis::ALL {
            let record = recommendations_for(diagnosis.label());
            assert_ne!(*record, AdvisoryRecord::DEFAULT, "{diagnosis}");
            for (heading, items) in record.sections() {
                assert!(!items.is_empty(), "{diagnosis}: {heading} is empty");
                assert!(items.iter().all(|s| !s.trim().is_empty()));
            }
        }
    }

    #[test]
    fn test_diabetes_literal_text() {
        let record = recommendations_for("Diabetes");
        assert_eq!(
            record.medicines,
            &[
                "Metformin (as prescribed by doctor)",
                "Insulin therapy (if advised by doctor)"
            ]
        );
        assert_eq!(
            record.diet,
            &[
                "Avoid sugary drinks and sweets",
                "Eat more whole grains, vegetables, and high-fiber foods",
                "Control portion sizes, avoid overeating"
            ]
        );
        assert_eq!(
            record.lifestyle,
            &[
                "Walk at least 30 minutes daily",
                "Regular checkup for blood sugar levels",
                "Maintain healthy body weight"
            ]
        );
    }

    #[test]
    fn test_hypertension_literal_text() {
        let record = recommendations_for("Hypertension");
        assert_eq!(
            record.medicines,
            &[
                "ACE inhibitors / ARBs (doctor prescribed)",
                "Beta-blockers or calcium channel blockers (if prescribed)"
            ]
        );
        assert_eq!(
            record.diet,
            &[
                "Low-salt (low-sodium) diet",
                "Avoid junk food and deep-fried items",
                "Increase intake of fruits and green leafy vegetables"
            ]
        );
        assert_eq!(
            record.lifestyle,
            &[
                "Regular blood pressure monitoring",
                "Reduce stress, practice yoga/meditation",
                "Avoid smoking and alcohol"
            ]
        );
    }

    #[test]
    fn test_heart_disease_literal_text() {
        let record = recommendations_for("Heart Disease");
        assert_eq!(
            record.medicines,
            &[
                "Antiplatelet drugs (like aspirin if prescribed)",
                "Statins to control cholesterol (doctor prescribed)"
            ]
        );
        assert_eq!(
            record.diet,
            &[
                "Low-fat, heart-healthy diet",
                "Avoid red meat and trans fats",
                "Eat more omega-3 rich foods (fish, flaxseeds)"
            ]
        );
        assert_eq!(
            record.lifestyle,
            &[
                "Regular moderate exercise (as per cardiologist guidance)",
                "Avoid smoking completely",
                "Manage stress properly"
            ]
        );
    }

    #[test]
    fn test_flu_literal_text() {
        let record = recommendations_for("Flu");
        assert_eq!(
            record.medicines,
            &[
                "Paracetamol for fever (as per dosage)",
                "Cough syrup (if prescribed)",
                "Plenty of fluids and rest"
            ]
        );
        assert_eq!(
            record.diet,
            &[
                "Warm fluids like soup and herbal tea",
                "Avoid cold drinks and junk food",
                "Eat light, easy-to-digest food"
            ]
        );
        assert_eq!(
            record.lifestyle,
            &[
                "Take proper rest and sleep",
                "Avoid going out to prevent spreading infection",
                "Maintain hygiene and use mask if coughing"
            ]
        );
    }

    #[test]
    fn test_normal_literal_text() {
        let record = recommendations_for("Normal");
        assert_eq!(record.medicines, &["No specific medicine required"]);
        assert_eq!(
            record.diet,
            &[
                "Maintain a balanced diet with fruits and vegetables",
                "Avoid excessive sugar, salt, and fast food"
            ]
        );
        assert_eq!(
            record.lifestyle,
            &[
                "Regular exercise (30 mins/day)",
                "Regular yearly health checkup",
                "Stay hydrated and sleep 7–8 hours"
            ]
        );
    }

    #[test]
    fn test_unknown_label_gets_default() {
        for label in ["Unknown", "", "diabetes", "Heart disease", "Migraine"] {
            let record = recommendations_for(label);
            assert_eq!(
                record.medicines,
                &["Consult a registered medical practitioner."]
            );
            assert_eq!(record.diet, &["Follow a simple, balanced home-cooked diet."]);
            assert_eq!(
                record.lifestyle,
                &["Maintain regular exercise and sleep schedule."]
            );
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        for label in ["Flu", "Unknown", "Normal"] {
            let first = recommendations_for(label);
            let second = recommendations_for(label);
            assert!(std::ptr::eq(first, second));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_diagnosis_and_label_lookup_agree() {
        for diagnosis in Diagnosis::ALL {
            assert_eq!(
                diagnosis.recommendations(),
                recommendations_for(diagnosis.label())
            );
        }
    }
}
