//! CSV report adapter implementing ReportPort.
//!
//! Writes the decorated series (one row per point: OHLC, rolling mean,
//! signals, portfolio value) followed by a `#`-commented metrics trailer.
//! The columns mirror what a charting front end needs for price lines,
//! buy/sell markers, and the equity curve.

use std::fs;
use std::path::Path;

use crate::domain::backtest::BacktestResult;
use crate::domain::error::SmacrossError;
use crate::ports::report_port::ReportPort;

pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn render(result: &BacktestResult) -> Result<String, SmacrossError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record([
        "date",
        "open",
        "high",
        "low",
        "close",
        "rolling_mean",
        "buy_entry",
        "sell_entry",
        "portfolio_value",
    ])
    .map_err(|e| SmacrossError::Data {
        reason: format!("report write error: {}", e),
    })?;

    for ((point, signal), equity) in result
        .series
        .iter()
        .zip(&result.signals)
        .zip(&result.equity)
    {
        let rolling_mean = signal
            .rolling_mean
            .map(|m| format!("{:.6}", m))
            .unwrap_or_default();

        wtr.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            format!("{:.6}", point.open),
            format!("{:.6}", point.high),
            format!("{:.6}", point.low),
            format!("{:.6}", point.close),
            rolling_mean,
            u8::from(signal.buy_entry).to_string(),
            u8::from(signal.sell_entry).to_string(),
            format!("{:.6}", equity.portfolio_value),
        ])
        .map_err(|e| SmacrossError::Data {
            reason: format!("report write error: {}", e),
        })?;
    }

    let body = wtr.into_inner().map_err(|e| SmacrossError::Data {
        reason: format!("report write error: {}", e),
    })?;
    let mut output = String::from_utf8(body).map_err(|e| SmacrossError::Data {
        reason: format!("report encoding error: {}", e),
    })?;

    output.push_str(&format!(
        "# total_return,{:.6}\n# max_drawdown,{:.6}\n# sharpe_ratio,{:.6}\n",
        result.metrics.total_return, result.metrics.max_drawdown, result.metrics.sharpe_ratio
    ));

    Ok(output)
}

impl ReportPort for CsvReportAdapter {
    fn write(&self, result: &BacktestResult, output_path: &Path) -> Result<(), SmacrossError> {
        let content = render(result)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
