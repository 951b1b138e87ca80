//! Ordered OHLC series.

use serde::{Deserialize, Serialize};

use crate::{OhlcPoint, SeriesError};

/// An ordered sequence of [`OhlcPoint`]s, strictly increasing by timestamp.
///
/// A series is replaced wholesale when new data arrives; it is never patched
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<OhlcPoint>,
}

impl Series {
    /// Creates a series, validating that timestamps strictly increase.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OutOfOrder`] for the first point whose timestamp
    /// is not after its predecessor's.
    pub fn new(points: Vec<OhlcPoint>) -> Result<Self, SeriesError> {
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(SeriesError::OutOfOrder {
                index: index + 1,
                previous: points[index].timestamp,
                timestamp: points[index + 1].timestamp,
            });
        }
        Ok(Self { points })
    }

    /// Creates a series from points in any order.
    ///
    /// Points are sorted by timestamp; a repeated timestamp keeps the point
    /// that came first in `points`.
    #[must_use]
    pub fn normalized(mut points: Vec<OhlcPoint>) -> Self {
        points.sort_by_key(|point| point.timestamp);
        points.dedup_by_key(|point| point.timestamp);
        Self { points }
    }

    /// Creates an empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a series from points already known to be ordered.
    ///
    /// Used for subsequences of an existing series, which inherit its ordering.
    pub(crate) const fn from_ordered(points: Vec<OhlcPoint>) -> Self {
        Self { points }
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[OhlcPoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&OhlcPoint> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&OhlcPoint> {
        self.points.last()
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, OhlcPoint> {
        self.points.iter()
    }

    /// Returns a new series keeping every `step`-th point, starting at index 0.
    ///
    /// A `step` of 0 is treated as 1.
    #[must_use]
    pub fn every_nth(&self, step: usize) -> Self {
        let step = step.max(1);
        if step == 1 {
            return self.clone();
        }
        Self::from_ordered(self.points.iter().step_by(step).copied().collect())
    }

    /// Consumes the series, returning the underlying points.
    #[must_use]
    pub fn into_points(self) -> Vec<OhlcPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a OhlcPoint;
    type IntoIter = std::slice::Iter<'a, OhlcPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<OhlcPoint>> for Series {
    type Error = SeriesError;

    fn try_from(points: Vec<OhlcPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<OhlcPoint>::deserialize(deserializer)?;
        Self::new(points).map_err(serde::de::Error::custom)
    }
}
