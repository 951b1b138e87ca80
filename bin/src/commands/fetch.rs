//! Fetch command implementation.
//!
//! Downloads the series from the history endpoint and exports it unchanged.

use crate::display::{Format, open_output, spinner, write_series};
use anyhow::{Context, Result};
use ohlczoom_lib::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// Download the series and write it to `output`.
pub(crate) async fn fetch(
    url: Option<String>,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let mut config = ClientConfig::default();
    if let Some(url) = url {
        config = config.with_url(url);
    }
    let client = FetchClient::new(config).context("Failed to create HTTP client")?;

    let progress = spinner(format!("Fetching {}", client.config().url), quiet)?;
    let payload = client
        .fetch_series()
        .await
        .with_context(|| format!("Failed to fetch {}", client.config().url))?;
    progress.finish_with_message(format!(
        "Fetched {} points for {}",
        payload.series.len(),
        payload.symbol
    ));

    let output = output.unwrap_or_else(|| default_output_path(&payload.symbol, format));

    let writer = open_output(Some(&output))?;
    write_series(&payload.series, writer, format)?;
    info!(path = %output.display(), points = payload.series.len(), "series written");

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}

/// `<symbol>.<format>` in the working directory.
///
/// The symbol comes from the server, so only its ASCII alphanumerics are
/// kept; an empty result falls back to `series`.
pub(crate) fn default_output_path(symbol: &Symbol, format: Format) -> PathBuf {
    let mut stem: String = symbol
        .as_str()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    if stem.is_empty() {
        stem = "series".to_string();
    }
    PathBuf::from(format!("{stem}.{}", format.extension()))
}
