//! View command implementation.

use crate::commands::open_view;
use crate::display::{open_output, summarize, write_frame};
use crate::{OutputArgs, SourceArgs, ViewArgs};
use anyhow::Result;
use ohlczoom_lib::prelude::*;
use tracing::debug;

/// Render one frame with the zoom committed at `factor`.
pub(crate) async fn view(
    source: SourceArgs,
    view: ViewArgs,
    output: OutputArgs,
    factor: f64,
    quiet: bool,
) -> Result<()> {
    let (_cache, mut chart) = open_view(&source, &view, quiet).await?;

    apply_factor(&mut chart, factor);
    debug!(summary = %summarize(&chart), "frame ready");

    let writer = open_output(output.output.as_deref())?;
    write_frame(chart.frame(), writer, output.format)?;
    Ok(())
}

/// Commits `factor` as one pinch from the current zoom.
///
/// Non-positive or non-finite factors leave the zoom unchanged; factors
/// below 1 commit as 1.
pub(crate) fn apply_factor(chart: &mut ChartView, factor: f64) -> ZoomTransition {
    chart.handle_gesture(GestureEvent::Start);
    chart.handle_gesture(GestureEvent::Update {
        scale_delta: factor,
    });
    chart.handle_gesture(GestureEvent::End)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view(len: i64) -> ChartView {
        let points = (0..len)
            .map(|i| {
                let v = i as f64;
                OhlcPoint::new(i * 60, v, v + 1.0, v - 1.0, v, 0.0)
            })
            .collect();
        ChartView::with_series(ViewConfig::default(), Series::new(points).unwrap())
    }

    #[test]
    fn test_apply_factor_decimates() {
        let mut chart = make_view(100);
        let transition = apply_factor(&mut chart, 3.0);
        assert!(transition.is_commit());
        assert_eq!(chart.frame().step, 3);
        assert_eq!(chart.frame().decimated_len, 34);
    }

    #[test]
    fn test_apply_factor_one_is_identity() {
        let mut chart = make_view(10);
        apply_factor(&mut chart, 1.0);
        assert_eq!(chart.frame().decimated_len, 10);
    }
}
