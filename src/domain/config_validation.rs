//! Configuration validation.
//!
//! Checks all parameter ranges before the pipeline runs; in particular
//! `min_price <= max_price` is enforced here, not inside the core.

use crate::domain::error::SmacrossError;
use crate::ports::config_port::ConfigPort;

pub const MIN_WINDOW_SIZE: i64 = 5;
pub const MAX_WINDOW_SIZE: i64 = 50;
pub const MIN_STARTING_CAPITAL: f64 = 10_000.0;

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    validate_price_range(config)?;
    validate_window_size(config)?;
    validate_starting_capital(config)?;
    Ok(())
}

fn validate_price_range(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let min_price = config.get_float("filter", "min_price", 1.0);
    if min_price <= 0.0 {
        return Err(SmacrossError::ConfigInvalid {
            section: "filter".to_string(),
            key: "min_price".to_string(),
            reason: "min_price must be positive".to_string(),
        });
    }

    let max_price = config.get_float("filter", "max_price", 100_000.0);
    if max_price < min_price {
        return Err(SmacrossError::ConfigInvalid {
            section: "filter".to_string(),
            key: "max_price".to_string(),
            reason: "max_price must be >= min_price".to_string(),
        });
    }
    Ok(())
}

fn validate_window_size(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let window = config.get_int("strategy", "window_size", 10);
    if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window) {
        return Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "window_size".to_string(),
            reason: format!(
                "window_size must be between {} and {}",
                MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            ),
        });
    }
    Ok(())
}

fn validate_starting_capital(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let capital = config.get_float("strategy", "starting_capital", 100_000.0);
    if capital < MIN_STARTING_CAPITAL {
        return Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "starting_capital".to_string(),
            reason: format!("starting_capital must be at least {}", MIN_STARTING_CAPITAL),
        });
    }
    Ok(())
}
