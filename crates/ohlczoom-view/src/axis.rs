//! Value-axis tick computation.

use ohlczoom_types::{Field, Series};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of ticks on the value axis.
pub const TICK_COUNT: usize = 5;

/// Ticks returned for empty or flat data.
pub const FALLBACK_TICKS: [f64; TICK_COUNT] = [0.0, 1.0, 2.0, 3.0, 4.0];

/// Five value-axis ticks, top of the axis first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisTicks([f64; TICK_COUNT]);

impl AxisTicks {
    /// The degenerate-range fallback `[0, 1, 2, 3, 4]`.
    #[must_use]
    pub const fn fallback() -> Self {
        Self(FALLBACK_TICKS)
    }

    /// Returns the tick values, descending.
    #[must_use]
    pub const fn values(&self) -> &[f64; TICK_COUNT] {
        &self.0
    }

    /// Returns the top tick.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.0[0]
    }

    /// Returns the bottom tick.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.0[TICK_COUNT - 1]
    }

    /// Returns true if these are the fallback ticks.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_TICKS
    }

    /// Returns an iterator over the tick values.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

impl Default for AxisTicks {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Computes value-axis ticks over all four OHLC fields.
///
/// Returns `max, min + 3*step, min + 2*step, min + step, min` with
/// `step = (max - min) / 4`, each rounded to two decimals. Empty series and
/// series where `min == max` yield [`FALLBACK_TICKS`].
#[must_use]
pub fn compute_ticks(series: &Series) -> AxisTicks {
    compute_ticks_for(series, Field::all().iter().copied())
}

/// Computes value-axis ticks over a subset of fields.
///
/// Non-finite values are skipped. With no fields, or no finite values, the
/// fallback ticks are returned.
#[must_use]
pub fn compute_ticks_for(series: &Series, fields: impl IntoIterator<Item = Field>) -> AxisTicks {
    let fields: Vec<Field> = fields.into_iter().collect();

    let (min, max) = series
        .iter()
        .flat_map(|point| fields.iter().map(move |field| point.value(*field)))
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });

    if min == f64::INFINITY || max == f64::NEG_INFINITY || min == max {
        trace!(points = series.len(), "degenerate value range, using fallback ticks");
        return AxisTicks::fallback();
    }

    let step = (max - min) / 4.0;
    if !step.is_finite() {
        trace!(min, max, "value range overflows, using fallback ticks");
        return AxisTicks::fallback();
    }

    AxisTicks([
        round2(max),
        round2(min + step * 3.0),
        round2(min + step * 2.0),
        round2(min + step),
        round2(min),
    ])
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
