//! JSON envelope returned by the history endpoint.
//!
//! ```json
//! { "symbol": "AAPL", "data": [ { "timestamp": "1704067200", "open": 1.0, ... } ] }
//! ```
//!
//! Timestamps are Unix seconds encoded as decimal strings. Plain JSON
//! integers are accepted too.

use std::fmt;

use ohlczoom_types::{OhlcPoint, Series, Symbol};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::FetchError;

/// One point as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WirePoint {
    /// Unix seconds, as a decimal string on the wire.
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    #[serde(default)]
    pub volume: f64,
}

impl From<WirePoint> for OhlcPoint {
    fn from(p: WirePoint) -> Self {
        Self::new(p.timestamp, p.open, p.high, p.low, p.close, p.volume)
    }
}

impl From<&OhlcPoint> for WirePoint {
    fn from(p: &OhlcPoint) -> Self {
        Self {
            timestamp: p.timestamp,
            open: p.open,
            high: p.high,
            low: p.low,
            close: p.close,
            volume: p.volume,
        }
    }
}

/// The history endpoint's response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Symbol the data belongs to.
    pub symbol: Symbol,
    /// Points in the order delivered.
    pub data: Vec<WirePoint>,
}

/// A decoded, validated series together with its symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPayload {
    /// Symbol the data belongs to.
    pub symbol: Symbol,
    /// The validated series.
    pub series: Series,
}

impl From<SeriesResponse> for SeriesPayload {
    fn from(response: SeriesResponse) -> Self {
        let points = response.data.into_iter().map(OhlcPoint::from).collect();
        Self {
            symbol: response.symbol,
            series: normalize_points(points),
        }
    }
}

/// Orders points by timestamp and keeps the first point of each timestamp.
///
/// The endpoint only promises non-decreasing timestamps, so repeats and
/// out-of-order points are repaired here instead of failing the load.
fn normalize_points(points: Vec<OhlcPoint>) -> Series {
    let ordered = points.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp);
    let reordered = points.windows(2).any(|pair| pair[1].timestamp < pair[0].timestamp);
    let received = points.len();
    let series = Series::normalized(points);
    if !ordered {
        warn!(
            received,
            kept = series.len(),
            reordered,
            "normalized series with repeated or out-of-order timestamps"
        );
    }
    series
}

/// Decodes and validates a response body.
///
/// Repeated timestamps keep their first point; out-of-order points are
/// sorted into place.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] for malformed JSON.
pub fn decode_response(body: &[u8]) -> Result<SeriesPayload, FetchError> {
    let response: SeriesResponse = serde_json::from_slice(body)?;
    Ok(SeriesPayload::from(response))
}

/// Encodes a series in the wire envelope, so it can be read back with
/// [`decode_response`].
#[must_use]
pub fn encode_response(symbol: &Symbol, series: &Series) -> SeriesResponse {
    SeriesResponse {
        symbol: symbol.clone(),
        data: series.iter().map(WirePoint::from).collect(),
    }
}

fn serialize_timestamp<S>(timestamp: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(timestamp)
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct TimestampVisitor;

    impl Visitor<'_> for TimestampVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Unix seconds as a decimal string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }
    }

    deserializer.deserialize_any(TimestampVisitor)
}
