use healthrec_core::{recommendations_for, AdvisoryRecord, Diagnosis};

#[test]
fn every_known_label_has_three_non_empty_sections() {
    for diagnosis in Diagnosis::ALL {
        let record = recommendations_for(diagnosis.label());
        assert_ne!(*record, AdvisoryRecord::DEFAULT, "{diagnosis}");
        for (heading, items) in record.sections() {
            assert!(!items.is_empty(), "{diagnosis}: empty {heading}");
            assert!(items.iter().all(|item| !item.trim().is_empty()));
        }
    }
}

#[test]
fn heart_disease_label_has_a_space() {
    let record = recommendations_for("Heart Disease");
    assert_eq!(
        record.medicines,
        &[
            "Antiplatelet drugs (like aspirin if prescribed)",
            "Statins to control cholesterol (doctor prescribed)",
        ]
    );
    assert_eq!(*recommendations_for("HeartDisease"), AdvisoryRecord::DEFAULT);
}

#[test]
fn unknown_labels_get_the_default_record() {
    for label in ["Unknown", "", "diabetes", " Flu", "Normal "] {
        let record = recommendations_for(label);
        assert_eq!(record.medicines, &["Consult a registered medical practitioner."]);
        assert_eq!(record.diet, &["Follow a simple, balanced home-cooked diet."]);
        assert_eq!(record.lifestyle, &["Maintain regular exercise and sleep schedule."]);
    }
}

#[test]
fn lookup_is_idempotent() {
    for label in ["Flu", "Normal", "Unknown"] {
        assert!(std::ptr::eq(recommendations_for(label), recommendations_for(label)));
    }
}
