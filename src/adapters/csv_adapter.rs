//! CSV file data adapter.
//!
//! Input contract: header row with `Date, Open, High, Low, Close` columns
//! (any order, extra columns ignored), dates as YYYY-MM-DD, prices as
//! non-negative decimals. Output series is sorted by date.

use crate::domain::error::SmacrossError;
use crate::domain::price::PricePoint;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Open", "High", "Low", "Close"];

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataPort for CsvAdapter {
    fn load_series(&self) -> Result<Vec<PricePoint>, SmacrossError> {
        let content = fs::read_to_string(&self.path).map_err(|e| SmacrossError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        parse_series(&content)
    }
}

/// Parse CSV content into a sorted price series.
pub fn parse_series(content: &str) -> Result<Vec<PricePoint>, SmacrossError> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| SmacrossError::Data {
            reason: format!("CSV header error: {}", e),
        })?
        .clone();

    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h.trim() == *name) {
            Some(idx) => indices[slot] = idx,
            None => missing.push(*name),
        }
    }
    if !missing.is_empty() {
        return Err(SmacrossError::Schema {
            missing: missing.join(", "),
        });
    }

    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| SmacrossError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let date_str = field(&record, indices[0], "Date")?;
        let date =
            NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| SmacrossError::Data {
                reason: format!("invalid date {:?}: {}", date_str, e),
            })?;

        points.push(PricePoint {
            date,
            open: parse_price(&record, indices[1], "Open")?,
            high: parse_price(&record, indices[2], "High")?,
            low: parse_price(&record, indices[3], "Low")?,
            close: parse_price(&record, indices[4], "Close")?,
        });
    }

    points.sort_by_key(|p| p.date);
    Ok(points)
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'a str, SmacrossError> {
    record.get(index).ok_or_else(|| SmacrossError::Data {
        reason: format!("row is missing the {} field", name),
    })
}

fn parse_price(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<f64, SmacrossError> {
    let raw = field(record, index, name)?;
    let value: f64 = raw.trim().parse().map_err(|e| SmacrossError::Data {
        reason: format!("invalid {} value {:?}: {}", name, raw, e),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(SmacrossError::Data {
            reason: format!("{} must be a non-negative number, got {}", name, raw),
        });
    }
    Ok(value)
}
