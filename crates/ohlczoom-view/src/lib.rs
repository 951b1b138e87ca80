//! Decimation, zoom state and view composition for ohlczoom.
//!
//! This crate is the interactive core of ohlczoom:
//!
//! - [`decimate`] - Keep every Nth point of a series for a zoom factor
//! - [`ZoomState`] - Live/committed zoom factor driven by [`GestureEvent`]s
//! - [`VisibilityFlags`] - Per-field visibility toggles
//! - [`compute_ticks`] - Five descending value-axis ticks
//! - [`compose`] - Per-field labeled point arrays for a rendering surface
//! - [`ChartView`] - The per-view context owning all of the above

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ohlczoom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod axis;
mod compose;
mod config;
mod decimate;
mod view;
mod visibility;
mod zoom;

pub use axis::{AxisTicks, FALLBACK_TICKS, TICK_COUNT, compute_ticks, compute_ticks_for};
pub use compose::{ChartPoint, ViewModel, compose};
pub use config::{ConfigError, LabelPolicy, TickScope, ViewConfig, VisibilityPreset};
pub use decimate::{decimate, decimation_step, sanitize_factor};
pub use view::{ChartFrame, ChartView, LoadState, RenderState};
pub use visibility::VisibilityFlags;
pub use zoom::{GestureEvent, ZoomPhase, ZoomState, ZoomTransition};
