//! Benchmark utilities for ohlczoom.

use ohlczoom_lib::{OhlcPoint, Series};

/// First timestamp of generated series (2024-01-01T00:00:00Z).
pub const START_TIMESTAMP: i64 = 1_704_067_200;

/// Builds a deterministic minute-bar series of `len` points.
///
/// Prices follow a bounded sawtooth so the value range is stable across
/// sizes; volume counts up with the index.
///
/// # Panics
///
/// Never in practice; timestamps are generated strictly increasing.
pub fn synthetic_series(len: usize) -> Series {
    let mut price = 100.0_f64;
    let points = (0..len)
        .map(|i| {
            let drift = ((i % 97) as f64 - 48.0) * 0.01;
            let open = price;
            let close = price + drift;
            let high = open.max(close) + 0.05;
            let low = open.min(close) - 0.05;
            price = close;
            OhlcPoint::new(START_TIMESTAMP + i as i64 * 60, open, high, low, close, i as f64)
        })
        .collect();

    Series::new(points).expect("generated timestamps are strictly increasing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_series_is_ordered() {
        let series = synthetic_series(1_000);
        assert_eq!(series.len(), 1_000);
        assert_eq!(series.first().unwrap().timestamp, START_TIMESTAMP);
        assert_eq!(series.last().unwrap().timestamp, START_TIMESTAMP + 999 * 60);
    }

    #[test]
    fn test_synthetic_series_empty() {
        assert!(synthetic_series(0).is_empty());
    }
}
