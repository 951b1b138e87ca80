//! Umbrella error type for ohlczoom.

use ohlczoom_view::ConfigError;
use thiserror::Error;

/// Result type alias for ohlczoom operations.
pub type Result<T> = std::result::Result<T, OhlczoomError>;

/// Errors that can occur while loading, viewing and exporting series.
#[derive(Error, Debug)]
pub enum OhlczoomError {
    /// The view configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading the series failed.
    #[cfg(feature = "fetch")]
    #[error(transparent)]
    Fetch(#[from] ohlczoom_fetch::FetchError),

    /// Writing output failed.
    #[cfg(feature = "format")]
    #[error(transparent)]
    Format(#[from] ohlczoom_format::FormatError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
