//! Staleness-window cache in front of a [`SeriesSource`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::client::FetchError;
use crate::source::SeriesSource;
use crate::wire::SeriesPayload;

/// How long a fetched series stays fresh.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// State of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed with the given message.
    Failed(String),
}

#[derive(Debug)]
struct Entry {
    payload: Arc<SeriesPayload>,
    fetched_at: Instant,
    invalidated: bool,
}

/// Caches the series produced by a source for `stale_time`.
///
/// A failed refetch reports [`FetchStatus::Failed`] but leaves the
/// previously fetched series available through [`SeriesCache::cached`].
#[derive(Debug)]
pub struct SeriesCache<S> {
    source: S,
    stale_time: Duration,
    entry: Option<Entry>,
    status: FetchStatus,
}

impl<S: SeriesSource> SeriesCache<S> {
    /// Creates a cache with the default staleness window.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self::with_stale_time(source, DEFAULT_STALE_TIME)
    }

    /// Creates a cache with a custom staleness window.
    #[must_use]
    pub const fn with_stale_time(source: S, stale_time: Duration) -> Self {
        Self {
            source,
            stale_time,
            entry: None,
            status: FetchStatus::Idle,
        }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the staleness window.
    #[must_use]
    pub const fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Returns the status of the most recent load.
    #[must_use]
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Returns the last successfully fetched series, fresh or not.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<SeriesPayload>> {
        self.entry.as_ref().map(|e| Arc::clone(&e.payload))
    }

    /// Returns `true` if a cached series exists and is still fresh at `now`.
    #[must_use]
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| {
                !e.invalidated && now.saturating_duration_since(e.fetched_at) < self.stale_time
            })
    }

    /// Marks the cached series stale so the next read refetches.
    pub fn invalidate(&mut self) {
        if let Some(entry) = self.entry.as_mut() {
            entry.invalidated = true;
        }
        debug!(source = %self.source.describe(), "cache invalidated");
    }

    /// Returns the series, loading it if missing or stale.
    ///
    /// # Errors
    ///
    /// Returns the source's error if a load was needed and failed.
    pub async fn get(&mut self) -> Result<Arc<SeriesPayload>, FetchError> {
        self.get_at(Instant::now()).await
    }

    /// Like [`SeriesCache::get`], judging freshness at `now`.
    ///
    /// # Errors
    ///
    /// Returns the source's error if a load was needed and failed.
    pub async fn get_at(&mut self, now: Instant) -> Result<Arc<SeriesPayload>, FetchError> {
        if self.is_fresh_at(now) {
            if let Some(payload) = self.cached() {
                debug!(source = %self.source.describe(), "serving cached series");
                return Ok(payload);
            }
        }

        self.status = FetchStatus::Loading;
        info!(source = %self.source.describe(), "loading series");
        match self.source.load().await {
            Ok(payload) => {
                let payload = Arc::new(payload);
                self.entry = Some(Entry {
                    payload: Arc::clone(&payload),
                    fetched_at: now,
                    invalidated: false,
                });
                self.status = FetchStatus::Ready;
                Ok(payload)
            }
            Err(e) => {
                warn!(error = %e, source = %self.source.describe(), "series load failed");
                self.status = FetchStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
