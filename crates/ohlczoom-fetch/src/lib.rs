//! HTTP client and fetch cache for ohlczoom series data.
//!
//! This crate provides the data-loading side of ohlczoom:
//!
//! - [`url::history_url`] - Builds the market-data history URL
//! - [`FetchClient`] - HTTP client with retries for transient failures
//! - [`decode_response`] - Decodes the `{ symbol, data }` envelope
//! - [`SeriesSource`] - Anything that can produce a series (HTTP, file)
//! - [`SeriesCache`] - Keeps a fetched series fresh for a staleness window

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ohlczoom/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod client;
mod source;
pub mod url;
mod wire;

pub use cache::{DEFAULT_STALE_TIME, FetchStatus, SeriesCache};
pub use client::{ClientConfig, FetchClient, FetchError};
pub use source::{FileSource, SeriesSource};
pub use wire::{SeriesPayload, SeriesResponse, WirePoint, decode_response, encode_response};
