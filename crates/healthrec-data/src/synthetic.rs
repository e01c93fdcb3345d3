//! Seeded synthetic patient data.
//!
//! Each row first draws a diagnosis uniformly, then draws vitals and
//! symptoms from ranges typical for that diagnosis. Ranges overlap, so the
//! classes are learnable but not perfectly separable.

use crate::dataset::Dataset;
use crate::error::DataResult;
use healthrec_core::{Diagnosis, FEATURE_COLUMNS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of rows to generate.
    pub rows: usize,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            rows: 500,
            seed: 42,
        }
    }
}

struct Profile {
    age: RangeInclusive<u32>,
    blood_pressure: RangeInclusive<u32>,
    glucose_level: RangeInclusive<u32>,
    heart_rate: RangeInclusive<u32>,
    bmi: RangeInclusive<f64>,
    /// Probability of fever, cough, fatigue, pain.
    symptoms: [f64; 4],
}

fn profile(diagnosis: Diagnosis) -> Profile {
    match diagnosis {
        Diagnosis::Diabetes => Profile {
            age: 40..=80,
            blood_pressure: 110..=160,
            glucose_level: 160..=250,
            heart_rate: 65..=100,
            bmi: 26.0..=40.0,
            symptoms: [0.05, 0.05, 0.7, 0.15],
        },
        Diagnosis::Hypertension => Profile {
            age: 45..=90,
            blood_pressure: 150..=200,
            glucose_level: 80..=140,
            heart_rate: 70..=110,
            bmi: 24.0..=36.0,
            symptoms: [0.05, 0.05, 0.35, 0.2],
        },
        Diagnosis::HeartDisease => Profile {
            age: 50..=90,
            blood_pressure: 130..=190,
            glucose_level: 90..=180,
            heart_rate: 95..=140,
            bmi: 25.0..=38.0,
            symptoms: [0.05, 0.1, 0.6, 0.85],
        },
        Diagnosis::Flu => Profile {
            age: 10..=70,
            blood_pressure: 100..=140,
            glucose_level: 70..=130,
            heart_rate: 80..=120,
            bmi: 17.0..=30.0,
            symptoms: [0.9, 0.8, 0.6, 0.3],
        },
        Diagnosis::Normal => Profile {
            age: 10..=70,
            blood_pressure: 90..=130,
            glucose_level: 70..=120,
            heart_rate: 55..=90,
            bmi: 18.0..=27.0,
            symptoms: [0.05, 0.1, 0.1, 0.05],
        },
    }
}

/// Generate a labelled dataset in schema column order.
pub fn generate(config: &SyntheticConfig) -> DataResult<Dataset> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut features = Vec::with_capacity(config.rows);
    let mut labels = Vec::with_capacity(config.rows);

    for _ in 0..config.rows {
        let diagnosis = Diagnosis::ALL[rng.gen_range(0..Diagnosis::ALL.len())];
        let p = profile(diagnosis);

        let bmi = (rng.gen_range(p.bmi.clone()) * 10.0).round() / 10.0;
        let mut row = vec![
            rng.gen_range(p.age) as f64,
            rng.gen_range(p.blood_pressure) as f64,
            rng.gen_range(p.glucose_level) as f64,
            rng.gen_range(p.heart_rate) as f64,
            bmi,
        ];
        for probability in p.symptoms {
            row.push(if rng.gen_bool(probability) { 1.0 } else { 0.0 });
        }

        features.push(row);
        labels.push(diagnosis.label().to_string());
    }

    Dataset::new(
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        features,
        labels,
    )
}
