//! Single-position long/flat simulation over a signalled price series.
//!
//! The walk is strictly sequential: each step's state depends on the
//! previous one, so there is one ownership chain per run and no
//! parallelism along the time axis.

use chrono::NaiveDate;

use super::price::PricePoint;
use super::signal::SignalRecord;

/// Mutable state threaded through the walk. After every step exactly one
/// of `cash` / `position_units` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub cash: f64,
    pub position_units: f64,
}

impl SimulationState {
    pub fn new(starting_capital: f64) -> Self {
        SimulationState {
            cash: starting_capital,
            position_units: 0.0,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.position_units == 0.0
    }

    pub fn portfolio_value(&self, close: f64) -> f64 {
        self.cash + self.position_units * close
    }
}

/// Portfolio value at one step of the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioPoint {
    pub date: NaiveDate,
    pub portfolio_value: f64,
}

/// Walk the series applying the Flat/Long state machine.
///
/// Flat + buy signal: invest all cash at the close. Long + sell signal:
/// liquidate all units at the close. Signals arriving in the wrong state
/// are no-ops. No forced liquidation at series end; the final value is
/// marked-to-market. `series` and `signals` must be the same length, and
/// closes must be positive (the range filter with `min_price > 0`
/// guarantees this upstream).
pub fn run_simulation(
    series: &[PricePoint],
    signals: &[SignalRecord],
    starting_capital: f64,
) -> Vec<PortfolioPoint> {
    let mut state = SimulationState::new(starting_capital);
    let mut equity = Vec::with_capacity(series.len());

    for (point, signal) in series.iter().zip(signals) {
        let close = point.close;

        if signal.buy_entry && state.is_flat() {
            state.position_units = state.cash / close;
            state.cash = 0.0;
        } else if signal.sell_entry && !state.is_flat() {
            state.cash = state.position_units * close;
            state.position_units = 0.0;
        }

        equity.push(PortfolioPoint {
            date: point.date,
            portfolio_value: state.portfolio_value(close),
        });
    }

    equity
}
