//! Report output port trait.

use crate::domain::backtest::BacktestResult;
use crate::domain::error::SmacrossError;
use std::path::Path;

/// Port for writing backtest results for an external presentation layer.
pub trait ReportPort {
    fn write(&self, result: &BacktestResult, output_path: &Path) -> Result<(), SmacrossError>;
}
