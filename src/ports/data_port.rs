//! Price-series source port trait.

use crate::domain::error::SmacrossError;
use crate::domain::price::PricePoint;

/// Produces a chronologically sorted OHLC series. Implementations own
/// schema validation; the core trusts the ordering invariant.
pub trait DataPort {
    fn load_series(&self) -> Result<Vec<PricePoint>, SmacrossError>;
}
