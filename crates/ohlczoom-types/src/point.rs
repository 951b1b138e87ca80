//! OHLC sample representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Field;

/// A single OHLC sample.
///
/// Points are never mutated once they enter a [`Series`](crate::Series);
/// decimation and view composition only read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    /// Start of the interval, in seconds since the Unix epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume. Carried through but not plotted.
    pub volume: f64,
}

impl OhlcPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the value of the given field.
    #[must_use]
    pub const fn value(&self, field: Field) -> f64 {
        match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
        }
    }

    /// Returns the timestamp as a UTC date-time.
    ///
    /// The timestamp is interpreted as whole seconds (milliseconds = seconds * 1000).
    /// Returns `None` if it falls outside chrono's representable range.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp.checked_mul(1000)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn create_test_point() -> OhlcPoint {
        OhlcPoint::new(1_704_110_400, 185.0, 188.5, 183.2, 187.1, 52_000_000.0)
    }

    #[test]
    fn test_value_by_field() {
        let point = create_test_point();
        assert!((point.value(Field::Open) - 185.0).abs() < 1e-10);
        assert!((point.value(Field::High) - 188.5).abs() < 1e-10);
        assert!((point.value(Field::Low) - 183.2).abs() < 1e-10);
        assert!((point.value(Field::Close) - 187.1).abs() < 1e-10);
    }

    #[test]
    fn test_datetime_from_seconds() {
        let point = create_test_point();
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(point.datetime(), Some(expected));
        assert_eq!(point.datetime().unwrap().day(), 1);
    }

    #[test]
    fn test_datetime_out_of_range() {
        let point = OhlcPoint::new(i64::MAX, 1.0, 1.0, 1.0, 1.0, 0.0);
        assert!(point.datetime().is_none());
    }
}
