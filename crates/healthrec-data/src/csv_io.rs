//! Reading and writing patient vitals CSV files.
//!
//! The header decides where each column lives; values are re-ordered into
//! schema order, so the file's own column order does not matter. Extra
//! columns are ignored. Flag columns accept `0`/`1` as well as
//! `true`/`false` in any case.

use crate::dataset::Dataset;
use crate::error::{DataError, DataResult};
use healthrec_core::{FeatureSchema, FieldKind};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Load a dataset from a CSV file.
pub fn load_csv(
    path: impl AsRef<Path>,
    schema: &FeatureSchema,
    target_column: &str,
) -> DataResult<Dataset> {
    let path = path.as_ref();
    info!("Loading dataset from: {:?}", path);
    let file = std::fs::File::open(path).map_err(|e| DataError::io(path, e))?;
    let dataset = read_csv(file, schema, target_column)?;
    info!(
        "Loaded {} rows with {} features from {:?}",
        dataset.len(),
        dataset.feature_names().len(),
        path
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source with a header row.
pub fn read_csv<R: Read>(
    reader: R,
    schema: &FeatureSchema,
    target_column: &str,
) -> DataResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column_index = |name: &str| -> DataResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::missing_column(name))
    };

    let feature_columns = schema
        .fields
        .iter()
        .map(|field| column_index(&field.name))
        .collect::<DataResult<Vec<_>>>()?;
    let target_idx = column_index(target_column)?;
    debug!(
        "Column mapping: features={:?}, target={}",
        feature_columns, target_idx
    );

    let mut features = Vec::new();
    let mut labels = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let row_number = idx + 1;

        let mut row = Vec::with_capacity(feature_columns.len());
        for (field, &col) in schema.fields.iter().zip(&feature_columns) {
            let raw = record.get(col).unwrap_or("");
            row.push(parse_cell(raw, &field.kind).ok_or_else(|| DataError::InvalidValue {
                row: row_number,
                column: field.name.clone(),
                value: raw.to_string(),
            })?);
        }

        let label = record.get(target_idx).unwrap_or("");
        if label.is_empty() {
            return Err(DataError::InvalidValue {
                row: row_number,
                column: target_column.to_string(),
                value: String::new(),
            });
        }

        features.push(row);
        labels.push(label.to_string());
    }

    if labels.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let names = schema.fields.iter().map(|f| f.name.clone()).collect();
    Dataset::new(names, features, labels)
}

fn parse_cell(raw: &str, kind: &FieldKind) -> Option<f64> {
    if let Ok(value) = raw.parse::<f64>() {
        return value.is_finite().then_some(value);
    }
    match kind {
        FieldKind::Flag if raw.eq_ignore_ascii_case("true") => Some(1.0),
        FieldKind::Flag if raw.eq_ignore_ascii_case("false") => Some(0.0),
        _ => None,
    }
}

/// Write a dataset as CSV with a header row, features then `target_column`.
///
/// Existing files are overwritten.
pub fn write_csv(
    path: impl AsRef<Path>,
    dataset: &Dataset,
    target_column: &str,
) -> DataResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| DataError::io(path, e))?;
    write_csv_to(file, dataset, target_column)?;
    info!("Wrote {} rows to {:?}", dataset.len(), path);
    Ok(())
}

/// Write a dataset as CSV to any sink.
pub fn write_csv_to<W: Write>(
    writer: W,
    dataset: &Dataset,
    target_column: &str,
) -> DataResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = dataset.feature_names().iter().map(String::as_str).collect();
    header.push(target_column);
    wtr.write_record(&header)?;

    for (row, label) in dataset.features().iter().zip(dataset.labels()) {
        let mut record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        record.push(label.clone());
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| DataError::Csv(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthrec_core::{FEATURE_COLUMNS, TARGET_COLUMN};

    const HEADER: &str = "age,blood_pressure,glucose_level,heart_rate,bmi,symptom_fever,symptom_cough,symptom_fatigue,symptom_pain,diagnosis";

    fn schema() -> FeatureSchema {
        FeatureSchema::patient_vitals()
    }

    #[test]
    fn test_read_in_schema_order() {
        let csv = format!(
            "{HEADER}\n45,130,110,75,26.0,1,0,1,0,Flu\n60,170,120,90,31.5,0,0,0,1,Hypertension\n"
        );
        let dataset = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.feature_names(), FEATURE_COLUMNS.map(String::from));
        assert_eq!(
            dataset.features()[0],
            vec![45.0, 130.0, 110.0, 75.0, 26.0, 1.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(dataset.labels()[1], "Hypertension");
    }

    #[test]
    fn test_columns_are_reordered_by_schema() {
        let csv = "diagnosis,symptom_pain,patient_id,bmi,age,heart_rate,glucose_level,blood_pressure,symptom_cough,symptom_fatigue,symptom_fever\n\
                   Heart Disease,1,p-17,29.1,66,118,140,165,0,1,0\n";
        let dataset = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap();
        assert_eq!(
            dataset.features()[0],
            vec![66.0, 165.0, 140.0, 118.0, 29.1, 0.0, 0.0, 1.0, 1.0]
        );
        assert_eq!(dataset.labels()[0], "Heart Disease");
    }

    #[test]
    fn test_flags_accept_booleans() {
        let csv = format!("{HEADER}\n30,120,100,80,24,True,false,FALSE,true,Normal\n");
        let dataset = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap();
        assert_eq!(&dataset.features()[0][5..], &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_missing_column() {
        let csv = "age,blood_pressure,glucose_level,heart_rate,symptom_fever,symptom_cough,symptom_fatigue,symptom_pain,diagnosis\n\
                   30,120,100,80,0,0,0,0,Normal\n";
        let err = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column } if column == "bmi"));
    }

    #[test]
    fn test_missing_target_column() {
        let csv = "age,blood_pressure,glucose_level,heart_rate,bmi,symptom_fever,symptom_cough,symptom_fatigue,symptom_pain\n\
                   30,120,100,80,24,0,0,0,0\n";
        let err = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column } if column == "diagnosis"));
    }

    #[test]
    fn test_invalid_value_reports_row_and_column() {
        let csv = format!("{HEADER}\n30,120,100,80,24,0,0,0,0,Normal\n30,120,high,80,24,0,0,0,0,Normal\n");
        let err = read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN).unwrap_err();
        match err {
            DataError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "glucose_level");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_continuous_rejects_boolean_text() {
        let csv = format!("{HEADER}\ntrue,120,100,80,24,0,0,0,0,Normal\n");
        assert!(matches!(
            read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN),
            Err(DataError::InvalidValue { ref column, .. }) if column == "age"
        ));
    }

    #[test]
    fn test_empty_label_rejected() {
        let csv = format!("{HEADER}\n30,120,100,80,24,0,0,0,0,\n");
        assert!(matches!(
            read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN),
            Err(DataError::InvalidValue { ref column, .. }) if column == "diagnosis"
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = format!("{HEADER}\n");
        assert!(matches!(
            read_csv(csv.as_bytes(), &schema(), TARGET_COLUMN),
            Err(DataError::EmptyDataset)
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dataset = Dataset::new(
            FEATURE_COLUMNS.map(String::from).to_vec(),
            vec![vec![52.0, 150.0, 200.0, 88.0, 33.2, 0.0, 0.0, 1.0, 0.0]],
            vec!["Diabetes".to_string()],
        )
        .unwrap();

        let mut buf = Vec::new();
        write_csv_to(&mut buf, &dataset, TARGET_COLUMN).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with(HEADER));

        let back = read_csv(buf.as_slice(), &schema(), TARGET_COLUMN).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_csv("/nonexistent/medical_data.csv", &schema(), TARGET_COLUMN).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
