//! Performance metrics over the portfolio-value sequence.

use super::error::SmacrossError;
use super::simulation::PortfolioPoint;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub total_return: f64,
    /// Historical minimum of portfolio value minus starting capital.
    /// This floor-vs-start measure is kept as-is; it is not the
    /// conventional peak-to-trough drawdown.
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}

impl Metrics {
    /// Reduce the equity curve to summary statistics.
    ///
    /// Fails with `UndefinedMetric` when the Sharpe ratio hits zero
    /// variance; total return and drawdown remain available through the
    /// standalone functions.
    pub fn compute(
        equity: &[PortfolioPoint],
        starting_capital: f64,
    ) -> Result<Self, SmacrossError> {
        Ok(Metrics {
            total_return: total_return(equity, starting_capital),
            max_drawdown: max_drawdown(equity, starting_capital),
            sharpe_ratio: sharpe_ratio(equity)?,
        })
    }
}

/// (final value - starting capital) / starting capital.
pub fn total_return(equity: &[PortfolioPoint], starting_capital: f64) -> f64 {
    let final_value = equity
        .last()
        .map(|p| p.portfolio_value)
        .unwrap_or(starting_capital);

    if starting_capital > 0.0 {
        (final_value - starting_capital) / starting_capital
    } else {
        0.0
    }
}

/// min(portfolio value) - starting capital.
pub fn max_drawdown(equity: &[PortfolioPoint], starting_capital: f64) -> f64 {
    let min_value = equity
        .iter()
        .map(|p| p.portfolio_value)
        .fold(f64::INFINITY, f64::min);

    if min_value.is_finite() {
        min_value - starting_capital
    } else {
        0.0
    }
}

/// Annualized Sharpe ratio over successive value differences:
/// mean(diff) / stddev(diff) * sqrt(252), population standard deviation.
///
/// Sequences of one point or fewer score 0. Zero variance in the
/// differences leaves the ratio undefined and is reported as an error.
pub fn sharpe_ratio(equity: &[PortfolioPoint]) -> Result<f64, SmacrossError> {
    if equity.len() <= 1 {
        return Ok(0.0);
    }

    let diffs: Vec<f64> = equity
        .windows(2)
        .map(|w| w[1].portfolio_value - w[0].portfolio_value)
        .collect();

    let n = diffs.len() as f64;
    let mean: f64 = diffs.iter().sum::<f64>() / n;
    let variance: f64 = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    if stddev == 0.0 {
        return Err(SmacrossError::UndefinedMetric {
            reason: "zero variance in portfolio value differences".into(),
        });
    }

    Ok(mean / stddev * TRADING_DAYS_PER_YEAR.sqrt())
}
