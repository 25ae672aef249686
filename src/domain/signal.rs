//! Rolling-mean indicator and buy/sell entry signals.
//!
//! Rolling mean over the last `window_size` closes ending at the current
//! point. Warmup: the first (window_size - 1) points have no mean and no
//! signals. The window is positional, not calendar-aware.

use super::price::PricePoint;

/// Derived fields for one price point, aligned 1:1 with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRecord {
    pub rolling_mean: Option<f64>,
    pub buy_entry: bool,
    pub sell_entry: bool,
}

/// Compute rolling means and entry signals for the whole series.
///
/// `buy_entry` when close is above the mean, `sell_entry` when below.
/// Equality produces neither. `window_size` must be >= 1.
pub fn generate_signals(series: &[PricePoint], window_size: usize) -> Vec<SignalRecord> {
    let warmup = window_size.saturating_sub(1);
    let mut records = Vec::with_capacity(series.len());

    for i in 0..series.len() {
        if i < warmup {
            records.push(SignalRecord {
                rolling_mean: None,
                buy_entry: false,
                sell_entry: false,
            });
            continue;
        }

        let start = i + 1 - window_size;
        let window = &series[start..=i];
        let mean: f64 = window.iter().map(|p| p.close).sum::<f64>() / window_size as f64;

        let close = series[i].close;
        records.push(SignalRecord {
            rolling_mean: Some(mean),
            buy_entry: close > mean,
            sell_entry: close < mean,
        });
    }

    records
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

    #[test]
    fn warmup_points_have_no_mean() {
        let series = make_series(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let signals = generate_signals(&series, 3);

        assert_eq!(signals.len(), 5);
        assert_eq!(signals[0].rolling_mean, None);
        assert_eq!(signals[1].rolling_mean, None);
        assert!(signals[2].rolling_mean.is_some());
        assert!(!signals[0].buy_entry);
        assert!(!signals[0].sell_entry);
    }

    #[test]
    fn mean_is_window_average() {
        let series = make_series(&[10.0, 20.0, 30.0, 40.0]);
        let signals = generate_signals(&series, 3);

        assert_relative_eq!(signals[2].rolling_mean.unwrap(), 20.0);
        assert_relative_eq!(signals[3].rolling_mean.unwrap(), 30.0);
    }

    #[test]
    fn window_of_one_tracks_close() {
        let series = make_series(&[10.0, 20.0, 30.0]);
        let signals = generate_signals(&series, 1);

        for (signal, point) in signals.iter().zip(&series) {
            assert_relative_eq!(signal.rolling_mean.unwrap(), point.close);
            // close == mean: neither side triggers
            assert!(!signal.buy_entry);
            assert!(!signal.sell_entry);
        }
    }

    #[test]
    fn spec_scenario_window_two() {
        // closes [10, 12, 11, 13, 9], window 2
        // means:  [-, 11, 11.5, 12, 11]
        let series = make_series(&[10.0, 12.0, 11.0, 13.0, 9.0]);
        let signals = generate_signals(&series, 2);

        assert_eq!(signals[0].rolling_mean, None);
        assert_relative_eq!(signals[1].rolling_mean.unwrap(), 11.0);
        assert_relative_eq!(signals[2].rolling_mean.unwrap(), 11.5);
        assert_relative_eq!(signals[3].rolling_mean.unwrap(), 12.0);
        assert_relative_eq!(signals[4].rolling_mean.unwrap(), 11.0);

        let buys: Vec<usize> = signals
            .iter()
            .enumerate()
            .filter(|(_, s)| s.buy_entry)
            .map(|(i, _)| i)
            .collect();
        let sells: Vec<usize> = signals
            .iter()
            .enumerate()
            .filter(|(_, s)| s.sell_entry)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(buys, vec![1, 3]);
        assert_eq!(sells, vec![2, 4]);
    }

    #[test]
    fn equal_close_and_mean_is_neutral() {
        let series = make_series(&[100.0, 100.0, 100.0, 100.0]);
        let signals = generate_signals(&series, 2);

        for signal in &signals {
            assert!(!signal.buy_entry);
            assert!(!signal.sell_entry);
        }
    }

    #[test]
    fn buy_and_sell_never_both() {
        let series = make_series(&[10.0, 14.0, 9.0, 17.0, 8.0, 12.0, 12.0]);
        let signals = generate_signals(&series, 3);

        for signal in &signals {
            assert!(!(signal.buy_entry && signal.sell_entry));
        }
    }

    #[test]
    fn window_longer_than_series() {
        let series = make_series(&[10.0, 20.0]);
        let signals = generate_signals(&series, 5);

        assert_eq!(signals.len(), 2);
        assert!(signals.iter().all(|s| s.rolling_mean.is_none()));
    }
}
