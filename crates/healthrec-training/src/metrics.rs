//! Classification metrics for evaluating the trained forest.
//!
//! [`ClassificationReport`] computes per-class precision, recall, F1 and
//! support plus accuracy, macro and weighted averages. Its `Display` output
//! uses the familiar tabular layout:
//!
//! ```text
//!               precision    recall  f1-score   support
//!
//!     Diabetes       1.00      0.95      0.97        20
//!          Flu       0.94      1.00      0.97        17
//!
//!     accuracy                           0.97        37
//!    macro avg       0.97      0.97      0.97        37
//! weighted avg       0.97      0.97      0.97        37
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fraction of positions where `y_pred` equals `y_true`.
///
/// Pairs are formed positionally; returns 0.0 when there are none.
pub fn accuracy(y_true: &[String], y_pred: &[String]) -> f64 {
    let total = y_true.len().min(y_pred.len());
    if total == 0 {
        return 0.0;
    }
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    correct as f64 / total as f64
}

/// Precision, recall and F1 for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Class label.
    pub label: String,
    /// TP / (TP + FP), 0.0 when nothing was predicted as this class.
    pub precision: f64,
    /// TP / (TP + FN), 0.0 when the class never occurs.
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0.0 when both are 0.
    pub f1_score: f64,
    /// Number of true occurrences.
    pub support: usize,
}

/// An averaged row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Averaged precision.
    pub precision: f64,
    /// Averaged recall.
    pub recall: f64,
    /// Averaged F1.
    pub f1_score: f64,
    /// Total support.
    pub support: usize,
}

/// Per-class and aggregate classification metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// One entry per label seen in either truth or predictions, sorted.
    pub classes: Vec<ClassMetrics>,
    /// Overall accuracy.
    pub accuracy: f64,
    /// Unweighted mean over classes.
    pub macro_avg: AverageMetrics,
    /// Support-weighted mean over classes.
    pub weighted_avg: AverageMetrics,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl ClassificationReport {
    /// Build a report from paired true and predicted labels.
    pub fn from_predictions(y_true: &[String], y_pred: &[String]) -> Self {
        let labels: BTreeSet<&str> = y_true
            .iter()
            .chain(y_pred)
            .map(String::as_str)
            .collect();
        let pairs: Vec<(&str, &str)> = y_true
            .iter()
            .zip(y_pred)
            .map(|(t, p)| (t.as_str(), p.as_str()))
            .collect();

        let classes: Vec<ClassMetrics> = labels
            .into_iter()
            .map(|label| {
                let tp = pairs.iter().filter(|(t, p)| *t == label && *p == label).count();
                let predicted = pairs.iter().filter(|(_, p)| *p == label).count();
                let support = pairs.iter().filter(|(t, _)| *t == label).count();

                let precision = ratio(tp, predicted);
                let recall = ratio(tp, support);
                let f1_score = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                ClassMetrics {
                    label: label.to_string(),
                    precision,
                    recall,
                    f1_score,
                    support,
                }
            })
            .collect();

        let total: usize = classes.iter().map(|c| c.support).sum();
        let n = classes.len().max(1) as f64;
        let macro_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / n,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / n,
            f1_score: classes.iter().map(|c| c.f1_score).sum::<f64>() / n,
            support: total,
        };
        let weighted = |f: fn(&ClassMetrics) -> f64| -> f64 {
            if total == 0 {
                0.0
            } else {
                classes.iter().map(|c| f(c) * c.support as f64).sum::<f64>() / total as f64
            }
        };
        let weighted_avg = AverageMetrics {
            precision: weighted(|c| c.precision),
            recall: weighted(|c| c.recall),
            f1_score: weighted(|c| c.f1_score),
            support: total,
        };

        Self {
            accuracy: accuracy(y_true, y_pred),
            classes,
            macro_avg,
            weighted_avg,
        }
    }

    /// Metrics for a single class.
    pub fn class(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.label == label)
    }
}

const AVG_ROW: &str = "weighted avg";

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.label.chars().count())
            .chain(std::iter::once(AVG_ROW.len()))
            .max()
            .unwrap_or(AVG_ROW.len());

        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label, c.precision, c.recall, c.f1_score, c.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), (AVG_ROW, &self.weighted_avg)] {
            writeln!(
                f,
                "{:>width$}  {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, avg.precision, avg.recall, avg.f1_score, avg.support
            )?;
        }
        Ok(())
    }
}
