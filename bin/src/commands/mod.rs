//! Command implementations for the ohlczoom CLI.

pub(crate) mod fetch;
pub(crate) mod interactive;
pub(crate) mod replay;
pub(crate) mod view;

use anyhow::{Context, Result, bail};
use ohlczoom_lib::prelude::*;
use ohlczoom_lib::refresh_view;

use crate::display::spinner;
use crate::{SourceArgs, ViewArgs};

/// Cache over whichever source the flags selected.
pub(crate) type DynCache = SeriesCache<Box<dyn SeriesSource>>;

/// Builds the series source selected by `--url` / `--input`.
pub(crate) fn build_source(args: &SourceArgs) -> ohlczoom_lib::Result<Box<dyn SeriesSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path)));
    }

    let mut config = ClientConfig::default();
    if let Some(url) = &args.url {
        config = config.with_url(url.as_str());
    }
    let client = FetchClient::new(config).map_err(FetchError::from)?;
    Ok(Box::new(client))
}

/// Resolves the view config from `--config`, `--tick-scope` and `--hide`.
pub(crate) fn build_config(args: &ViewArgs) -> ohlczoom_lib::Result<ViewConfig> {
    let mut config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };

    if let Some(scope) = args.tick_scope {
        config = config.with_tick_scope(scope.into());
    }

    let mut visibility = config.visibility;
    for field in &args.hide {
        visibility.set(*field, false);
    }
    Ok(config.with_visibility(visibility))
}

/// Loads the series into a fresh view, failing if the source is unavailable.
pub(crate) async fn open_view(
    source: &SourceArgs,
    view: &ViewArgs,
    quiet: bool,
) -> Result<(DynCache, ChartView)> {
    let config = build_config(view).context("Invalid view config")?;
    let source = build_source(source).context("Failed to create HTTP client")?;
    let mut cache = SeriesCache::new(source);
    let mut chart = ChartView::new(config);

    let progress = spinner(format!("Loading {}", cache.source().describe()), quiet)?;
    refresh_view(&mut cache, &mut chart).await;
    progress.finish_and_clear();

    if let RenderState::Unavailable { reason } = chart.render_state() {
        bail!("Series unavailable: {reason}");
    }
    Ok((cache, chart))
}
