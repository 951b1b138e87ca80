//! Per-field point arrays for a rendering surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ohlczoom_types::{Field, Series};
use serde::{Deserialize, Serialize};

use crate::{LabelPolicy, VisibilityFlags};

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The field's value at this sample.
    pub value: f64,
    /// Calendar date of the sample, when this series carries labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<DateTime<Utc>>,
}

impl ChartPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(value: f64, label: Option<DateTime<Utc>>) -> Self {
        Self { value, label }
    }
}

/// Point arrays keyed by field, for visible fields only.
///
/// Hidden fields have no entry at all. Every array has one entry per
/// decimated sample, so all arrays share the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewModel {
    series: BTreeMap<Field, Vec<ChartPoint>>,
}

impl ViewModel {
    /// Returns the points for a field, or `None` if the field is hidden.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&[ChartPoint]> {
        self.series.get(&field).map(Vec::as_slice)
    }

    /// Returns true if the field has an entry.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.series.contains_key(&field)
    }

    /// Returns the fields present, in emission order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.series.keys().copied()
    }

    /// Returns the number of series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Returns the number of points per series (0 when no field is visible).
    #[must_use]
    pub fn points_per_series(&self) -> usize {
        self.series.values().next().map_or(0, Vec::len)
    }

    /// Returns true if no field is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns an iterator over `(field, points)` in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[ChartPoint])> + '_ {
        self.series
            .iter()
            .map(|(field, points)| (*field, points.as_slice()))
    }
}

/// Builds one labeled point array per visible field.
///
/// `label` is the sample's timestamp as a UTC date-time (seconds * 1000
/// milliseconds); which arrays carry labels is decided by `labels`.
#[must_use]
pub fn compose(series: &Series, visibility: &VisibilityFlags, labels: LabelPolicy) -> ViewModel {
    let dates: Vec<Option<DateTime<Utc>>> = if labels == LabelPolicy::None {
        Vec::new()
    } else {
        series.iter().map(|point| point.datetime()).collect()
    };

    let composed = visibility
        .visible_fields()
        .enumerate()
        .map(|(position, field)| {
            let labeled = match labels {
                LabelPolicy::FirstVisible => position == 0,
                LabelPolicy::All => true,
                LabelPolicy::None => false,
            };
            let points = series
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let label = if labeled { dates[i] } else { None };
                    ChartPoint::new(point.value(field), label)
                })
                .collect();
            (field, points)
        })
        .collect();

    ViewModel { series: composed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ohlczoom_types::OhlcPoint;

    fn make_series(len: usize) -> Series {
        Series::new(
            (0..len)
                .map(|i| {
                    let t = 1_704_067_200 + i as i64 * 86_400;
                    let v = i as f64;
                    OhlcPoint::new(t, v, v + 2.0, v - 2.0, v + 1.0, 100.0)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_all_visible_equal_lengths() {
        let model = compose(&make_series(7), &VisibilityFlags::all(), LabelPolicy::FirstVisible);
        assert_eq!(model.series_count(), 4);
        for (_, points) in model.iter() {
            assert_eq!(points.len(), 7);
        }
        assert_eq!(model.points_per_series(), 7);
    }

    #[test]
    fn test_hidden_field_omitted() {
        let mut flags = VisibilityFlags::all();
        flags.toggle(Field::Low);
        let model = compose(&make_series(3), &flags, LabelPolicy::FirstVisible);

        assert!(!model.contains(Field::Low));
        assert!(model.get(Field::Low).is_none());
        let fields: Vec<Field> = model.fields().collect();
        assert_eq!(fields, vec![Field::Open, Field::High, Field::Close]);
    }

    #[test]
    fn test_values_taken_from_field() {
        let model = compose(&make_series(3), &VisibilityFlags::all(), LabelPolicy::All);
        let highs: Vec<f64> = model.get(Field::High).unwrap().iter().map(|p| p.value).collect();
        assert_eq!(highs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_label_is_exact_date() {
        let model = compose(&make_series(2), &VisibilityFlags::all(), LabelPolicy::FirstVisible);
        let open = model.get(Field::Open).unwrap();
        assert_eq!(open[0].label, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(open[1].label, Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_first_visible_policy_labels_one_series() {
        let flags = VisibilityFlags {
            open: false,
            high: true,
            low: false,
            close: true,
        };
        let model = compose(&make_series(4), &flags, LabelPolicy::FirstVisible);
        assert!(model.get(Field::High).unwrap().iter().all(|p| p.label.is_some()));
        assert!(model.get(Field::Close).unwrap().iter().all(|p| p.label.is_none()));
    }

    #[test]
    fn test_no_labels_policy() {
        let model = compose(&make_series(4), &VisibilityFlags::all(), LabelPolicy::None);
        assert!(model.iter().all(|(_, points)| points.iter().all(|p| p.label.is_none())));
    }

    #[test]
    fn test_empty_series_gives_empty_arrays() {
        let model = compose(
            &Series::empty(),
            &VisibilityFlags::open_close(),
            LabelPolicy::FirstVisible,
        );
        assert_eq!(model.series_count(), 2);
        assert_eq!(model.get(Field::Open), Some(&[][..]));
        assert_eq!(model.get(Field::Close), Some(&[][..]));
    }

    #[test]
    fn test_nothing_visible() {
        let model = compose(&make_series(4), &VisibilityFlags::none(), LabelPolicy::All);
        assert!(model.is_empty());
        assert_eq!(model.points_per_series(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let model = compose(
            &make_series(1),
            &VisibilityFlags::open_close(),
            LabelPolicy::FirstVisible,
        );
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["open"][0]["value"], 0.0);
        assert_eq!(json["open"][0]["label"], "2024-01-01T00:00:00Z");
        assert!(json["close"][0].get("label").is_none());
        assert!(json.get("high").is_none());
    }
}
