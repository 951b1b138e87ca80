//! Feeding cache results into a [`ChartView`].

use ohlczoom_fetch::{FetchStatus, SeriesCache, SeriesSource};
use ohlczoom_view::ChartView;
use tracing::debug;

/// Loads the series through `cache` and reflects the outcome in `view`.
///
/// A view with no data yet shows
/// [`LoadState::Loading`](ohlczoom_view::LoadState) while the load runs;
/// a ready view keeps showing its chart. On success it receives the new series (zoom and
/// visibility are kept). On failure it becomes unavailable with the
/// error message, even if an older series is still cached. Returns the
/// cache's status afterwards.
pub async fn refresh_view<S: SeriesSource>(
    cache: &mut SeriesCache<S>,
    view: &mut ChartView,
) -> FetchStatus {
    view.mark_loading();
    match cache.get().await {
        Ok(payload) => {
            debug!(symbol = %payload.symbol, points = payload.series.len(), "refreshing view");
            view.replace_series(payload.series.clone());
        }
        Err(e) => view.mark_unavailable(e.to_string()),
    }
    cache.status().clone()
}
