//! Plotted price fields.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four price fields of an OHLC sample.
///
/// The declaration order (open, high, low, close) is the order in which
/// composed series are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    Close,
}

impl Field {
    /// Returns the field as a lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        }
    }

    /// Returns the capitalized legend label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::High => "High",
            Self::Low => "Low",
            Self::Close => "Close",
        }
    }

    /// Returns all fields in emission order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Open, Self::High, Self::Low, Self::Close]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "o" => Ok(Self::Open),
            "high" | "h" => Ok(Self::High),
            "low" | "l" => Ok(Self::Low),
            "close" | "c" => Ok(Self::Close),
            _ => Err(FieldParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError(String);

impl std::fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid field '{}', expected one of: open, high, low, close",
            self.0
        )
    }
}

impl std::error::Error for FieldParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse() {
        assert_eq!("open".parse::<Field>().unwrap(), Field::Open);
        assert_eq!("H".parse::<Field>().unwrap(), Field::High);
        assert_eq!(" Close ".parse::<Field>().unwrap(), Field::Close);
        assert!("volume".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_order() {
        let mut fields = vec![Field::Close, Field::Open, Field::Low, Field::High];
        fields.sort();
        assert_eq!(fields, Field::all());
    }

    #[test]
    fn test_field_serde_lowercase() {
        let json = serde_json::to_string(&Field::High).unwrap();
        assert_eq!(json, "\"high\"");
        let field: Field = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(field, Field::Low);
    }
}
