//! Error types for ohlczoom series.

use thiserror::Error;

/// Error for series that are not strictly increasing by timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// A point's timestamp is not greater than its predecessor's.
    #[error("Point {index} has timestamp {timestamp}, not after previous timestamp {previous}")]
    OutOfOrder {
        /// Index of the offending point.
        index: usize,
        /// Timestamp of the preceding point.
        previous: i64,
        /// Timestamp of the offending point.
        timestamp: i64,
    },
}
