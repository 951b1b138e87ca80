//! Pinch-to-zoom decimation and view state for OHLC time series.
//!
//! This is a facade crate that re-exports functionality from the ohlczoom
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use ohlczoom_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cache = SeriesCache::new(FetchClient::with_defaults()?);
//!     let mut view = ChartView::new(ViewConfig::default());
//!     ohlczoom_lib::refresh_view(&mut cache, &mut view).await;
//!
//!     view.handle_gesture(GestureEvent::Start);
//!     view.handle_gesture(GestureEvent::Update { scale_delta: 4.0 });
//!     view.handle_gesture(GestureEvent::End);
//!
//!     JsonFormatter::new().write_frame(view.frame(), std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ohlczoom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
#[cfg(feature = "fetch")]
mod refresh;

pub use error::{OhlczoomError, Result};

// Re-export core types
pub use ohlczoom_types::*;

// Re-export the view pipeline
pub use ohlczoom_view::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use ohlczoom_fetch::{
    ClientConfig, DEFAULT_STALE_TIME, FetchClient, FetchError, FetchStatus, FileSource,
    SeriesCache, SeriesPayload, SeriesSource, decode_response, encode_response, url,
};

#[cfg(feature = "fetch")]
pub use refresh::refresh_view;

// Re-export formatters
#[cfg(feature = "format")]
pub use ohlczoom_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use ohlczoom_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{OhlczoomError, Result};

    pub use ohlczoom_types::{Field, OhlcPoint, Series, SeriesError, Symbol};

    pub use ohlczoom_view::{
        AxisTicks, ChartFrame, ChartView, GestureEvent, LabelPolicy, LoadState, RenderState,
        TickScope, ViewConfig, VisibilityFlags, VisibilityPreset, ZoomState, ZoomTransition,
    };

    #[cfg(feature = "fetch")]
    pub use ohlczoom_fetch::{
        ClientConfig, FetchClient, FetchError, FetchStatus, FileSource, SeriesCache,
        SeriesSource,
    };

    #[cfg(feature = "format")]
    pub use ohlczoom_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
