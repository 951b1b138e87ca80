//! View configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::VisibilityFlags;

/// Errors that can occur while loading a [`ViewConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the config.
    #[error("Failed to parse view config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which fields the value axis spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TickScope {
    /// All four fields, visible or not.
    #[default]
    AllFields,
    /// Only the currently visible fields.
    VisibleFields,
}

/// Which composed series carry date labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPolicy {
    /// Only the first visible series.
    #[default]
    FirstVisible,
    /// Every visible series.
    All,
    /// No series.
    None,
}

/// Named initial visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityPreset {
    /// Open, high, low and close.
    #[default]
    All,
    /// Open and close only.
    OpenClose,
}

impl VisibilityPreset {
    /// Returns the flags for this preset.
    #[must_use]
    pub const fn flags(&self) -> VisibilityFlags {
        match self {
            Self::All => VisibilityFlags::all(),
            Self::OpenClose => VisibilityFlags::open_close(),
        }
    }
}

/// Configuration owned by a [`ChartView`](crate::ChartView).
///
/// Every field is optional in JSON. `visibility` accepts a preset name
/// (`"all"`, `"open-close"`) or an object of per-field flags.
///
/// ```
/// use ohlczoom_view::{TickScope, ViewConfig};
///
/// let json = r#"{"visibility": "open-close", "tick_scope": "visible-fields"}"#;
/// let config = ViewConfig::from_json(json).unwrap();
/// assert!(!config.visibility.high);
/// assert_eq!(config.tick_scope, TickScope::VisibleFields);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Visibility applied when the view is created.
    #[serde(deserialize_with = "deserialize_visibility")]
    pub visibility: VisibilityFlags,
    /// Fields the value axis spans.
    pub tick_scope: TickScope,
    /// Which series carry date labels.
    pub label_policy: LabelPolicy,
}

impl ViewConfig {
    /// Parses a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has unknown values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Sets the initial visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: VisibilityFlags) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the tick scope.
    #[must_use]
    pub const fn with_tick_scope(mut self, tick_scope: TickScope) -> Self {
        self.tick_scope = tick_scope;
        self
    }

    /// Sets the label policy.
    #[must_use]
    pub const fn with_label_policy(mut self, label_policy: LabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VisibilitySetting {
    Preset(VisibilityPreset),
    Flags(VisibilityFlags),
}

fn deserialize_visibility<'de, D>(deserializer: D) -> Result<VisibilityFlags, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match VisibilitySetting::deserialize(deserializer)? {
        VisibilitySetting::Preset(preset) => preset.flags(),
        VisibilitySetting::Flags(flags) => flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.visibility, VisibilityFlags::all());
        assert_eq!(config.tick_scope, TickScope::AllFields);
        assert_eq!(config.label_policy, LabelPolicy::FirstVisible);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ViewConfig::from_json("{}").unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_visibility_preset() {
        let config = ViewConfig::from_json(r#"{"visibility": "open-close"}"#).unwrap();
        assert_eq!(config.visibility, VisibilityFlags::open_close());
    }

    #[test]
    fn test_visibility_flags_object() {
        let config = ViewConfig::from_json(r#"{"visibility": {"open": false}}"#).unwrap();
        assert!(!config.visibility.open);
        assert!(config.visibility.close);
    }

    #[test]
    fn test_label_policy() {
        let config = ViewConfig::from_json(r#"{"label_policy": "none"}"#).unwrap();
        assert_eq!(config.label_policy, LabelPolicy::None);
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(matches!(
            ViewConfig::from_json(r#"{"tick_scope": "sideways"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tick_scope": "visible-fields"}}"#).unwrap();

        let config = ViewConfig::load(file.path()).unwrap();
        assert_eq!(config.tick_scope, TickScope::VisibleFields);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ViewConfig::load("/nonexistent/ohlczoom/view.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_builders() {
        let config = ViewConfig::default()
            .with_visibility(VisibilityPreset::OpenClose.flags())
            .with_tick_scope(TickScope::VisibleFields)
            .with_label_policy(LabelPolicy::All);
        assert_eq!(config.visibility, VisibilityFlags::open_close());
        assert_eq!(config.tick_scope, TickScope::VisibleFields);
        assert_eq!(config.label_policy, LabelPolicy::All);
    }
}
