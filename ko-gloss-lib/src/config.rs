use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{DisplayLanguage, Level, LevelFilter};

/// User-facing settings. Only `level` and `display_language` influence
/// lookup; the other two are read by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserConfig {
    pub enabled: bool,
    pub level: Level,
    #[serde(alias = "targetLanguage", alias = "target_language", alias = "display_language")]
    pub display_language: DisplayLanguage,
    #[serde(alias = "show_highlight")]
    pub show_highlight: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Two,
            display_language: DisplayLanguage::En,
            show_highlight: true,
        }
    }
}

impl UserConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.level.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = UserConfig::default();
        assert!(c.enabled);
        assert_eq!(c.level, Level::Two);
        assert_eq!(c.display_language, DisplayLanguage::En);
        assert_eq!(c.level_filter(), LevelFilter::Only(Level::Two));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c = UserConfig::from_json(r#"{"level": 3, "targetLanguage": "ja"}"#).unwrap();
        assert_eq!(c.level, Level::Three);
        assert_eq!(c.level_filter(), LevelFilter::All);
        assert_eq!(c.display_language, DisplayLanguage::Ja);
        assert!(c.show_highlight);
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(UserConfig::from_json(r#"{"level": 4}"#).is_err());
    }

    #[test]
    fn test_round_trip_keys() {
        let json = serde_json::to_string(&UserConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"enabled":true,"level":2,"displayLanguage":"en","showHighlight":true}"#
        );
    }
}
