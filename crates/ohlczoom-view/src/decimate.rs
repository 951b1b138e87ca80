//! Nth-sample decimation.
//!
//! Decimation keeps every point whose index is a multiple of the step
//! `ceil(factor)`. The point at index 0 is always kept so the left edge of the
//! chart stays anchored regardless of zoom. There is no smoothing or min/max
//! bucketing: at aggressive factors, local extrema between kept samples are
//! not shown.

use ohlczoom_types::Series;
use tracing::trace;

/// Clamps a zoom factor into the valid domain `[1, +inf)`.
///
/// Non-finite and non-positive factors map to `1.0`. Factors in `(0, 1)` also
/// map to `1.0`, since a step below one point is meaningless.
#[must_use]
pub fn sanitize_factor(factor: f64) -> f64 {
    if factor.is_finite() && factor >= 1.0 {
        factor
    } else {
        1.0
    }
}

/// Returns the decimation step `ceil(factor)` for a zoom factor.
///
/// Always at least 1. Factors beyond `usize::MAX` saturate.
#[must_use]
pub fn decimation_step(factor: f64) -> usize {
    // Float-to-int casts saturate.
    (sanitize_factor(factor).ceil() as usize).max(1)
}

/// Decimates a series for the given zoom factor.
///
/// Returns every point whose zero-based index is divisible by
/// `ceil(factor)`, in original order. `factor = 1` returns the series
/// unchanged; invalid factors are clamped to 1.
#[must_use]
pub fn decimate(series: &Series, factor: f64) -> Series {
    let step = decimation_step(factor);
    let decimated = series.every_nth(step);
    trace!(
        factor,
        step,
        input = series.len(),
        output = decimated.len(),
        "decimated series"
    );
    decimated
}
