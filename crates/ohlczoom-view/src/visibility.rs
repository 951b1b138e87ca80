//! Per-field visibility toggles.

use ohlczoom_types::Field;
use serde::{Deserialize, Serialize};

/// Visibility flag for each OHLC field.
///
/// Flags are independent of each other and of the zoom state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityFlags {
    /// Whether the open series is drawn.
    pub open: bool,
    /// Whether the high series is drawn.
    pub high: bool,
    /// Whether the low series is drawn.
    pub low: bool,
    /// Whether the close series is drawn.
    pub close: bool,
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl VisibilityFlags {
    /// All four fields visible.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            open: true,
            high: true,
            low: true,
            close: true,
        }
    }

    /// Only open and close visible.
    #[must_use]
    pub const fn open_close() -> Self {
        Self {
            open: true,
            high: false,
            low: false,
            close: true,
        }
    }

    /// No field visible.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            open: false,
            high: false,
            low: false,
            close: false,
        }
    }

    /// Returns whether the field is visible.
    #[must_use]
    pub const fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
        }
    }

    /// Sets the visibility of one field.
    pub const fn set(&mut self, field: Field, visible: bool) {
        *self.flag_mut(field) = visible;
    }

    /// Flips the visibility of one field and returns the new value.
    pub const fn toggle(&mut self, field: Field) -> bool {
        let flag = self.flag_mut(field);
        *flag = !*flag;
        *flag
    }

    /// Returns the visible fields in emission order.
    pub fn visible_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::all()
            .iter()
            .copied()
            .filter(|field| self.is_visible(*field))
    }

    /// Returns the number of visible fields.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_fields().count()
    }

    const fn flag_mut(&mut self, field: Field) -> &mut bool {
        match field {
            Field::Open => &mut self.open,
            Field::High => &mut self.high,
            Field::Low => &mut self.low,
            Field::Close => &mut self.close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_one_field() {
        let mut flags = VisibilityFlags::all();
        assert!(!flags.toggle(Field::High));
        assert_eq!(
            flags,
            VisibilityFlags {
                open: true,
                high: false,
                low: true,
                close: true
            }
        );
    }

    #[test]
    fn test_toggle_twice_restores() {
        for field in Field::all() {
            let original = VisibilityFlags::open_close();
            let mut flags = original;
            flags.toggle(*field);
            flags.toggle(*field);
            assert_eq!(flags, original);
        }
    }

    #[test]
    fn test_visible_fields_order() {
        let flags = VisibilityFlags::open_close();
        let visible: Vec<Field> = flags.visible_fields().collect();
        assert_eq!(visible, vec![Field::Open, Field::Close]);
        assert_eq!(VisibilityFlags::none().visible_count(), 0);
    }

    #[test]
    fn test_set() {
        let mut flags = VisibilityFlags::none();
        flags.set(Field::Low, true);
        assert!(flags.is_visible(Field::Low));
        assert_eq!(flags.visible_count(), 1);
    }

    #[test]
    fn test_partial_deserialize_defaults_visible() {
        let flags: VisibilityFlags = serde_json::from_str(r#"{"high": false}"#).unwrap();
        assert!(flags.open);
        assert!(!flags.high);
        assert!(flags.low);
        assert!(flags.close);
    }
}
