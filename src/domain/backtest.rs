//! Backtest orchestration: filter, signals, simulation, metrics.
//!
//! One deterministic pass per invocation; every stage produces a new
//! sequence and no state outlives the call.

use super::error::SmacrossError;
use super::metrics::Metrics;
use super::price::{PricePoint, filter_close_range};
use super::signal::{SignalRecord, generate_signals};
use super::simulation::{PortfolioPoint, run_simulation};

/// Strategy and filter parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestParams {
    pub min_price: f64,
    pub max_price: f64,
    pub window_size: usize,
    pub starting_capital: f64,
}

impl Default for BacktestParams {
    fn default() -> Self {
        BacktestParams {
            min_price: 1.0,
            max_price: 100_000.0,
            window_size: 10,
            starting_capital: 100_000.0,
        }
    }
}

/// Everything the presentation collaborator needs: the filtered series,
/// the aligned signals (chart markers), the equity curve, and the metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResult {
    pub series: Vec<PricePoint>,
    pub signals: Vec<SignalRecord>,
    pub equity: Vec<PortfolioPoint>,
    pub metrics: Metrics,
}

/// Run the full pipeline over an already-sorted price series.
pub fn run_backtest(
    series: &[PricePoint],
    params: &BacktestParams,
) -> Result<BacktestResult, SmacrossError> {
    let filtered = filter_close_range(series, params.min_price, params.max_price)?;
    let signals = generate_signals(&filtered, params.window_size);
    let equity = run_simulation(&filtered, &signals, params.starting_capital);
    let metrics = Metrics::compute(&equity, params.starting_capital)?;

    Ok(BacktestResult {
        series: filtered,
        signals,
        equity,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                open: close,
                high: close,
                low: close,
                close,
            })
            .collect()
    }

    fn sample_params() -> BacktestParams {
        BacktestParams {
            min_price: 1.0,
            max_price: 1_000.0,
            window_size: 2,
            starting_capital: 1_000.0,
        }
    }

    #[test]
    fn default_params() {
        let p = BacktestParams::default();
        assert_relative_eq!(p.min_price, 1.0);
        assert_relative_eq!(p.max_price, 100_000.0);
        assert_eq!(p.window_size, 10);
        assert_relative_eq!(p.starting_capital, 100_000.0);
    }

    #[test]
    fn outputs_align_with_filtered_series() {
        let series = make_series(&[10.0, 12.0, 11.0, 13.0, 9.0]);
        let result = run_backtest(&series, &sample_params()).unwrap();

        assert_eq!(result.series.len(), 5);
        assert_eq!(result.signals.len(), 5);
        assert_eq!(result.equity.len(), 5);
    }

    #[test]
    fn spec_scenario_end_to_end() {
        let series = make_series(&[10.0, 12.0, 11.0, 13.0, 9.0]);
        let result = run_backtest(&series, &sample_params()).unwrap();

        // buy at 12, sell at 11, buy at 13, sell at 9
        let final_cash = 1_000.0 / 12.0 * 11.0 / 13.0 * 9.0;
        let last = result.equity.last().unwrap();
        assert_relative_eq!(last.portfolio_value, final_cash);
        assert_relative_eq!(
            result.metrics.total_return,
            (final_cash - 1_000.0) / 1_000.0
        );
    }

    #[test]
    fn filter_excludes_out_of_range_closes() {
        let series = make_series(&[10.0, 2_000.0, 12.0, 11.0]);
        let result = run_backtest(&series, &sample_params()).unwrap();
        assert_eq!(result.series.len(), 3);
    }

    #[test]
    fn empty_range_aborts_before_simulation() {
        let series = make_series(&[10.0, 12.0, 11.0]);
        let params = BacktestParams {
            min_price: 500.0,
            max_price: 1_000.0,
            ..sample_params()
        };

        assert!(matches!(
            run_backtest(&series, &params),
            Err(SmacrossError::EmptyRange { .. })
        ));
    }

    #[test]
    fn pipeline_is_deterministic() {
        let series = make_series(&[10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 8.0]);
        let params = sample_params();

        let first = run_backtest(&series, &params).unwrap();
        let second = run_backtest(&series, &params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn no_trades_triggers_undefined_metric() {
        // constant closes: no signals, flat equity, zero-variance Sharpe
        let series = make_series(&[100.0, 100.0, 100.0, 100.0]);
        let result = run_backtest(&series, &sample_params());

        assert!(matches!(
            result,
            Err(SmacrossError::UndefinedMetric { .. })
        ));
    }
}
