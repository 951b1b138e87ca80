//! Per-view context tying the pipeline together.

use ohlczoom_types::{Field, Series};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    AxisTicks, GestureEvent, TickScope, ViewConfig, ViewModel, VisibilityFlags, ZoomState,
    ZoomTransition, compose, compute_ticks, compute_ticks_for, decimate,
};

/// Availability of the series backing a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No series has been delivered yet.
    #[default]
    Loading,
    /// A series is loaded.
    Ready,
    /// The data source failed.
    Unavailable {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Everything a rendering surface needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    /// Committed zoom factor.
    pub committed_factor: f64,
    /// Decimation step, `ceil(committed_factor)`.
    pub step: usize,
    /// Number of points in the raw series.
    pub raw_len: usize,
    /// Number of points after decimation.
    pub decimated_len: usize,
    /// Value-axis ticks, top first.
    pub ticks: AxisTicks,
    /// Point arrays for visible fields.
    pub series: ViewModel,
}

/// What the rendering surface should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderState<'a> {
    /// Data is still loading.
    Loading,
    /// The data source failed; no chart is drawn.
    Unavailable {
        /// Human-readable failure description.
        reason: &'a str,
    },
    /// A chart is ready to draw.
    Ready(&'a ChartFrame),
}

/// A single chart view.
///
/// Owns the raw series, the zoom and visibility state, and the derived
/// decimated series, ticks and view model. Derived state is recomputed
/// synchronously whenever an input changes:
///
/// - a new series re-decimates,
/// - a committed zoom change re-decimates only if the step changed,
/// - a visibility toggle recomposes without re-decimating.
///
/// Live gesture updates never trigger recomputation.
#[derive(Debug, Clone)]
pub struct ChartView {
    config: ViewConfig,
    series: Series,
    zoom: ZoomState,
    visibility: VisibilityFlags,
    load: LoadState,
    decimated: Series,
    frame: ChartFrame,
}

impl ChartView {
    /// Creates a view in the [`LoadState::Loading`] state.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        let mut view = Self {
            config,
            series: Series::empty(),
            zoom: ZoomState::new(),
            visibility: config.visibility,
            load: LoadState::Loading,
            decimated: Series::empty(),
            frame: ChartFrame {
                committed_factor: 1.0,
                step: 1,
                raw_len: 0,
                decimated_len: 0,
                ticks: AxisTicks::fallback(),
                series: ViewModel::default(),
            },
        };
        view.redecimate();
        view
    }

    /// Creates a view already holding a series.
    #[must_use]
    pub fn with_series(config: ViewConfig, series: Series) -> Self {
        let mut view = Self::new(config);
        view.replace_series(series);
        view
    }

    /// Returns the view configuration.
    #[must_use]
    pub const fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the raw series.
    #[must_use]
    pub const fn series(&self) -> &Series {
        &self.series
    }

    /// Returns the decimated series.
    #[must_use]
    pub const fn decimated(&self) -> &Series {
        &self.decimated
    }

    /// Returns the zoom state.
    #[must_use]
    pub const fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Returns the visibility flags.
    #[must_use]
    pub const fn visibility(&self) -> &VisibilityFlags {
        &self.visibility
    }

    /// Returns the load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Returns the current axis ticks.
    #[must_use]
    pub const fn ticks(&self) -> &AxisTicks {
        &self.frame.ticks
    }

    /// Returns the current view model.
    #[must_use]
    pub const fn view_model(&self) -> &ViewModel {
        &self.frame.series
    }

    /// Returns the current frame, regardless of load state.
    #[must_use]
    pub const fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    /// Returns what the rendering surface should show.
    #[must_use]
    pub fn render_state(&self) -> RenderState<'_> {
        match &self.load {
            LoadState::Loading => RenderState::Loading,
            LoadState::Unavailable { reason } => RenderState::Unavailable {
                reason: reason.as_str(),
            },
            LoadState::Ready => RenderState::Ready(&self.frame),
        }
    }

    /// Replaces the raw series wholesale and marks the view ready.
    ///
    /// Zoom and visibility carry over to the new series.
    pub fn replace_series(&mut self, series: Series) {
        info!(points = series.len(), "series replaced");
        self.series = series;
        self.load = LoadState::Ready;
        self.redecimate();
    }

    /// Signals that a fetch is in flight.
    ///
    /// A view that already shows a chart keeps showing it during a refetch.
    pub fn mark_loading(&mut self) {
        if self.load != LoadState::Ready {
            self.load = LoadState::Loading;
        }
    }

    /// Signals that the data source failed.
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "series unavailable");
        self.load = LoadState::Unavailable { reason };
    }

    /// Feeds a pinch gesture event to the zoom state.
    ///
    /// Derived state is only recomputed when the gesture commits.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> ZoomTransition {
        let transition = self.zoom.apply(event);
        if transition.is_commit() {
            self.refresh_zoom();
        }
        transition
    }

    /// Resets the zoom to factor 1.
    pub fn reset(&mut self) -> ZoomTransition {
        let transition = self.zoom.reset();
        self.refresh_zoom();
        transition
    }

    /// Flips the visibility of one field and returns the new value.
    pub fn toggle(&mut self, field: Field) -> bool {
        let visible = self.visibility.toggle(field);
        debug!(%field, visible, "visibility toggled");
        self.recompose();
        visible
    }

    /// Sets the visibility of one field.
    pub fn set_visible(&mut self, field: Field, visible: bool) {
        if self.visibility.is_visible(field) != visible {
            self.visibility.set(field, visible);
            self.recompose();
        }
    }

    fn refresh_zoom(&mut self) {
        let step = self.zoom.step();
        self.frame.committed_factor = self.zoom.committed();
        if step == self.frame.step {
            debug!(step, "zoom step unchanged, keeping decimated series");
            return;
        }
        self.redecimate();
    }

    fn redecimate(&mut self) {
        self.decimated = decimate(&self.series, self.zoom.committed());
        self.frame.committed_factor = self.zoom.committed();
        self.frame.step = self.zoom.step();
        self.frame.raw_len = self.series.len();
        self.frame.decimated_len = self.decimated.len();
        self.frame.ticks = self.compute_ticks();
        self.frame.series = self.compose();
        debug!(
            step = self.frame.step,
            raw = self.frame.raw_len,
            decimated = self.frame.decimated_len,
            "view recomputed"
        );
    }

    fn recompose(&mut self) {
        if self.config.tick_scope == TickScope::VisibleFields {
            self.frame.ticks = self.compute_ticks();
        }
        self.frame.series = self.compose();
    }

    fn compute_ticks(&self) -> AxisTicks {
        match self.config.tick_scope {
            TickScope::AllFields => compute_ticks(&self.decimated),
            TickScope::VisibleFields => {
                compute_ticks_for(&self.decimated, self.visibility.visible_fields())
            }
        }
    }

    fn compose(&self) -> ViewModel {
        compose(&self.decimated, &self.visibility, self.config.label_policy)
    }
}
