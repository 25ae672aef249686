//! OHLC price points and the close-price range filter.

use chrono::NaiveDate;

use super::error::SmacrossError;

/// One OHLC record. Dates are unique and the containing series is sorted
/// ascending by the ingestion adapter; the core never re-sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Keep points whose close lies in the closed interval
/// `min_price..=max_price`, preserving order.
///
/// An empty result is an error: the caller decides the fallback (typically
/// showing the unfiltered dataset) rather than simulating over nothing.
pub fn filter_close_range(
    series: &[PricePoint],
    min_price: f64,
    max_price: f64,
) -> Result<Vec<PricePoint>, SmacrossError> {
    let filtered: Vec<PricePoint> = series
        .iter()
        .filter(|p| p.close >= min_price && p.close <= max_price)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return Err(SmacrossError::EmptyRange {
            min: min_price,
            max: max_price,
        });
    }
    Ok(filtered)
}

/// Dataset range information shown by `info` and on empty-range fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub rows: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub min_close: f64,
    pub max_close: f64,
}

pub fn summarize(series: &[PricePoint]) -> Option<SeriesSummary> {
    let first = series.first()?;
    let last = series.last()?;

    let mut min_close = f64::INFINITY;
    let mut max_close = f64::NEG_INFINITY;
    for point in series {
        if point.close < min_close {
            min_close = point.close;
        }
        if point.close > max_close {
            max_close = point.close;
        }
    }

    Some(SeriesSummary {
        rows: series.len(),
        first_date: first.date,
        last_date: last.date,
        min_close,
        max_close,
    })
}
