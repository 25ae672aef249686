#![allow(dead_code)]

use chrono::NaiveDate;
use smacross::domain::backtest::BacktestParams;
use smacross::domain::error::SmacrossError;
pub use smacross::domain::price::PricePoint;
use smacross::ports::data_port::DataPort;

pub struct MockDataPort {
    pub series: Vec<PricePoint>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            error: None,
        }
    }

    pub fn with_series(mut self, series: Vec<PricePoint>) -> Self {
        self.series = series;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn load_series(&self) -> Result<Vec<PricePoint>, SmacrossError> {
        if let Some(reason) = &self.error {
            return Err(SmacrossError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.series.clone())
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_point(date: NaiveDate, close: f64) -> PricePoint {
    PricePoint {
        date,
        open: close,
        high: close * 1.02,
        low: close * 0.98,
        close,
    }
}

/// Daily series starting 2024-01-01 with the given closes.
pub fn make_series(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            make_point(
                date(2024, 1, 1) + chrono::Duration::days(i as i64),
                close,
            )
        })
        .collect()
}

pub fn sample_params() -> BacktestParams {
    BacktestParams {
        min_price: 1.0,
        max_price: 1_000.0,
        window_size: 2,
        starting_capital: 1_000.0,
    }
}
