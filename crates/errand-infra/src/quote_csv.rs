//! CSV loader for batch quoting
//!
//! Columns (header optional):
//! `distance_km, weather, time_of_day, weight, [stops], [label]`
//!
//! Empty condition columns fall back to CLEAR / DAY / LIGHT and an empty
//! stop count to a plain single-leg delivery. Rows that fail to parse are
//! collected with their line number instead of aborting the load.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::warn;

use errand_domain::model::PriceFactors;
use errand_types::{Result, TimeCondition, ValidationError, WeatherCondition, WeightClass};

/// One parsed batch line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub line: u64,
    pub factors: PriceFactors,
    /// `Some(n)` when the row is a multi-stop delivery
    pub stops: Option<u32>,
    pub label: Option<String>,
}

/// A line that could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchLoad {
    pub rows: Vec<BatchRow>,
    pub rejected: Vec<RejectedRow>,
}

/// Load batch rows from a CSV file
pub fn load_batch_from_csv(path: &Path) -> Result<BatchLoad> {
    let file = std::fs::File::open(path)?;
    load_batch_from_reader(file)
}

/// Load batch rows from any reader
pub fn load_batch_from_reader<R: Read>(reader: R) -> Result<BatchLoad> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut load = BatchLoad::default();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if index == 0 && is_header(&record) {
            continue;
        }
        match parse_record(&record) {
            Ok((factors, stops, label)) => load.rows.push(BatchRow {
                line,
                factors,
                stops,
                label,
            }),
            Err(e) => {
                warn!(line, error = %e, "skipping batch row");
                load.rejected.push(RejectedRow {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(load)
}

/// First-column names recognised as a header row
const DISTANCE_HEADERS: [&str; 3] = ["distance_km", "distance", "거리"];

fn is_header(record: &StringRecord) -> bool {
    record.get(0).map_or(false, |first| {
        let first = first.trim().to_lowercase();
        DISTANCE_HEADERS.contains(&first.as_str())
    })
}

fn parse_record(
    record: &StringRecord,
) -> std::result::Result<(PriceFactors, Option<u32>, Option<String>), ValidationError> {
    let distance_field = record.get(0).unwrap_or("");
    let distance: f64 = distance_field
        .parse()
        .map_err(|_| ValidationError::UnknownValue {
            kind: "distance",
            value: distance_field.to_string(),
        })?;
    let weather = parse_or_default::<WeatherCondition>(record.get(1))?;
    let time_of_day = parse_or_default::<TimeCondition>(record.get(2))?;
    let weight = parse_or_default::<WeightClass>(record.get(3))?;

    let stops = match record.get(4).filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<u32>().map_err(|_| ValidationError::UnknownValue {
            kind: "stop count",
            value: s.to_string(),
        })?),
        None => None,
    };
    let label = record
        .get(5)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let factors = PriceFactors::try_new(distance, weather, time_of_day, weight)?;
    Ok((factors, stops, label))
}

fn parse_or_default<T>(field: Option<&str>) -> std::result::Result<T, ValidationError>
where
    T: std::str::FromStr<Err = ValidationError> + Default,
{
    match field.filter(|s| !s.is_empty()) {
        Some(s) => s.parse(),
        None => Ok(T::default()),
    }
}
