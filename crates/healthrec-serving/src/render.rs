//! HTML page and terminal text for predictions.

use crate::predictor::PredictionOutcome;
use healthrec_core::{FeatureSchema, FieldKind, PatientInput};
use std::fmt::{self, Display, Formatter};

/// Page title.
pub const TITLE: &str = "Healthcare Recommendation System";

/// Shown under every prediction.
pub const DISCLAIMER: &str = "Disclaimer: This is a student project and should not be used for real medical decisions. Always consult a certified doctor for diagnosis and treatment.";

const INTRO: &str = "This application predicts a possible health condition based on your inputs and provides basic medicine, diet, and lifestyle recommendations.";

const NOTE: &str =
    "This project is for educational purposes only and not a substitute for professional medical advice.";

const SECTION_ICONS: [&str; 3] = ["💊", "🥗", "🌱"];

struct Slider {
    name: &'static str,
    label: &'static str,
    step: f64,
}

const SLIDERS: [Slider; 5] = [
    Slider { name: "age", label: "Age", step: 1.0 },
    Slider { name: "blood_pressure", label: "Blood Pressure (Systolic mmHg)", step: 1.0 },
    Slider { name: "glucose_level", label: "Glucose Level (mg/dL)", step: 1.0 },
    Slider { name: "heart_rate", label: "Heart Rate (beats per minute)", step: 1.0 },
    Slider { name: "bmi", label: "BMI (Body Mass Index)", step: 0.1 },
];

const SYMPTOMS: [(&str, &str); 4] = [
    ("symptom_fever", "Fever"),
    ("symptom_cough", "Cough"),
    ("symptom_fatigue", "Fatigue / Tiredness"),
    ("symptom_pain", "Pain (Chest / Body Pain)"),
];

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;line-height:1.4}\
.field{display:flex;align-items:center;gap:.75rem;margin:.4rem 0}\
.field label{flex:0 0 16rem}.field input{flex:1}\
.success{background:#e6f4ea;padding:.75rem;border-radius:.4rem}\
.info{background:#e8f0fe;padding:.75rem;border-radius:.4rem}\
.error{background:#fce8e6;padding:.75rem;border-radius:.4rem}";

/// Escapes text for use in HTML content and attribute values.
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    Escaped(text).to_string()
}

/// The full input page, optionally with a prediction or an error.
pub struct Page<'a> {
    /// Bounds for the sliders.
    pub schema: &'a FeatureSchema,
    /// Values the form is pre-filled with.
    pub input: &'a PatientInput,
    /// Result block, if a prediction was made.
    pub outcome: Option<&'a PredictionOutcome>,
    /// Error banner, if the request was rejected.
    pub error: Option<&'a str>,
}

impl Page<'_> {
    fn slider_value(&self, name: &str) -> f64 {
        let i = self.input;
        match name {
            "age" => i.age,
            "blood_pressure" => i.blood_pressure,
            "glucose_level" => i.glucose_level,
            "heart_rate" => i.heart_rate,
            _ => i.bmi,
        }
    }

    fn checked(&self, name: &str) -> bool {
        let i = self.input;
        match name {
            "symptom_fever" => i.symptom_fever,
            "symptom_cough" => i.symptom_cough,
            "symptom_fatigue" => i.symptom_fatigue,
            _ => i.symptom_pain,
        }
    }

    fn write_sliders(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for slider in &SLIDERS {
            let (min, max) = match self.schema.field(slider.name).map(|spec| spec.kind) {
                Some(FieldKind::Continuous { min, max }) => (min, max),
                _ => continue,
            };
            let decimals: usize = if slider.step < 1.0 { 1 } else { 0 };
            let value = self.slider_value(slider.name).clamp(min, max);
            writeln!(
                f,
                r#"<div class="field"><label for="{name}">{label}</label><input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="{step}" value="{value:.decimals$}" oninput="this.nextElementSibling.value=this.value"><output>{value:.decimals$}</output></div>"#,
                name = slider.name,
                label = Escaped(slider.label),
                step = slider.step,
            )?;
        }
        Ok(())
    }

    fn write_symptoms(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (name, label) in SYMPTOMS {
            let checked = if self.checked(name) { " checked" } else { "" };
            writeln!(
                f,
                r#"<div><label><input type="checkbox" name="{name}" value="1"{checked}> {}</label></div>"#,
                Escaped(label)
            )?;
        }
        Ok(())
    }

    fn write_outcome(f: &mut Formatter<'_>, outcome: &PredictionOutcome) -> fmt::Result {
        writeln!(f, r#"<section id="result">"#)?;
        writeln!(
            f,
            r#"<p class="success"><strong>🩺 Predicted Condition: {}</strong></p>"#,
            Escaped(&outcome.label)
        )?;
        for ((heading, items), icon) in outcome.recommendations.sections().into_iter().zip(SECTION_ICONS) {
            writeln!(f, "<h3>{icon} {heading}</h3>\n<ul>")?;
            for item in items {
                writeln!(f, "<li>{}</li>", Escaped(item))?;
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, r#"<p class="info">⚠️ {}</p>"#, Escaped(DISCLAIMER))?;
        writeln!(f, "</section>")
    }
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(
            f,
            r#"<head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{TITLE}</title><style>{STYLE}</style></head>"#
        )?;
        writeln!(f, "<body>\n<main>")?;
        writeln!(f, "<h1>⚕️ {TITLE}</h1>")?;
        writeln!(f, "<p>{}</p>", Escaped(INTRO))?;
        writeln!(f, "<p><strong>Note:</strong> {}</p>", Escaped(NOTE))?;

        writeln!(f, r#"<form method="post" action="/predict">"#)?;
        writeln!(f, "<h2>1. Enter Patient Details</h2>")?;
        self.write_sliders(f)?;
        writeln!(f, "<h2>2. Select Symptoms</h2>")?;
        self.write_symptoms(f)?;
        writeln!(f, "<h2>3. Predict Disease &amp; Get Recommendations</h2>")?;
        writeln!(f, r#"<button type="submit">🔍 Predict</button>"#)?;
        writeln!(f, "</form>")?;

        if let Some(error) = self.error {
            writeln!(f, r#"<p class="error">{}</p>"#, Escaped(error))?;
        }
        if let Some(outcome) = self.outcome {
            Self::write_outcome(f, outcome)?;
        }
        writeln!(f, "</main>\n</body>\n</html>")
    }
}

/// Render the page to a string.
pub fn render_page(
    schema: &FeatureSchema,
    input: &PatientInput,
    outcome: Option<&PredictionOutcome>,
    error: Option<&str>,
) -> String {
    Page {
        schema,
        input,
        outcome,
        error,
    }
    .to_string()
}

/// Plain-text rendering of a prediction for the terminal.
pub struct TextReport<'a>(pub &'a PredictionOutcome);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted Condition: {}", self.0.label)?;
        for (heading, items) in self.0.recommendations.sections() {
            writeln!(f, "\n{heading}")?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }
        writeln!(f, "\n{DISCLAIMER}")
    }
}

/// Plain-text result block for the terminal.
pub fn render_text(outcome: &PredictionOutcome) -> String {
    TextReport(outcome).to_string()
}
