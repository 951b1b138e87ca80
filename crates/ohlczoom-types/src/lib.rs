//! Core types for the ohlczoom decimation and view pipeline.
//!
//! This crate provides the fundamental data structures used throughout ohlczoom:
//!
//! - [`OhlcPoint`] - A single OHLC sample with a Unix-seconds timestamp
//! - [`Series`] - An ordered, strictly increasing sequence of points
//! - [`Field`] - One of the four plotted price fields
//! - [`Symbol`] - The instrument symbol a series belongs to

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ohlczoom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod field;
mod point;
mod series;
mod symbol;

pub use error::SeriesError;
pub use field::{Field, FieldParseError};
pub use point::OhlcPoint;
pub use series::Series;
pub use symbol::Symbol;
