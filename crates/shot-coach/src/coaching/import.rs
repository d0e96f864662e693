use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{FlawId, Measurements};

/// Failure while reading a measurement session export.
#[derive(Debug, thiserror::Error)]
pub enum MeasurementImportError {
    #[error("failed to read measurement export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid measurement CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: value '{value}' for '{metric}' is neither a number nor a yes/no signal")]
    InvalidValue {
        row: usize,
        metric: String,
        value: String,
    },
}

/// Reads `metric,value` exports produced by the pose-measurement step.
///
/// Numeric values become metrics. `true`/`false`/`yes`/`no` values become
/// qualitative signals keyed by flaw id. Blank values are skipped. When a
/// name repeats, the last row wins.
pub struct MeasurementImporter;

impl MeasurementImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Measurements, MeasurementImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Measurements, MeasurementImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut measurements = Measurements::new();

        for (position, record) in csv_reader.deserialize::<MeasurementRow>().enumerate() {
            let row = record?;
            let Some(raw) = row.value.filter(|value| !value.is_empty()) else {
                continue;
            };

            match parse_value(&raw) {
                Some(ParsedValue::Number(value)) => {
                    measurements.metrics.insert(row.metric, value);
                }
                Some(ParsedValue::Signal(observed)) => {
                    measurements.signals.insert(FlawId(row.metric), observed);
                }
                None => {
                    return Err(MeasurementImportError::InvalidValue {
                        // header is line 1
                        row: position + 2,
                        metric: row.metric,
                        value: raw,
                    })
                }
            }
        }

        Ok(measurements)
    }
}

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    metric: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, PartialEq)]
enum ParsedValue {
    Number(f64),
    Signal(bool),
}

fn parse_value(raw: &str) -> Option<ParsedValue> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" => return Some(ParsedValue::Signal(true)),
        "false" | "no" => return Some(ParsedValue::Signal(false)),
        _ => {}
    }

    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(ParsedValue::Number)
}
