use crate::shared::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserSettings {
    /// Maximum number of suggestions attached to a lookup failure
    pub suggestion_limit: usize,
    /// Characters an alias must share with the unresolved text to be suggested
    pub suggestion_prefix_len: usize,
    /// Split `100kg` into `100 kg` before parsing
    pub split_digit_letter_runs: bool,
    /// External catalog JSON; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: 5,
            suggestion_prefix_len: 2,
            split_digit_letter_runs: false,
            catalog_path: None,
        }
    }
}

impl ParserSettings {
    pub fn settings_path() -> ConfigResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-query")
            .map(|dirs| dirs.config_dir().join("parser.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the per-user config directory, falling back to defaults
    /// when no settings file exists yet
    pub fn load() -> ConfigResult<Self> {
        let path = Self::settings_path()?;
        if !path.exists() {
            warn!(path = %path.display(), "No parser settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        info!(path = %path.display(), "Loaded parser settings");
        Ok(settings)
    }

    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = ParserSettings::default();
        assert_eq!(settings.suggestion_limit, 5);
        assert_eq!(settings.suggestion_prefix_len, 2);
        assert!(!settings.split_digit_letter_runs);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("parser.json");

        let settings = ParserSettings {
            suggestion_limit: 3,
            split_digit_letter_runs: true,
            catalog_path: Some(dir.path().join("units.json")),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = ParserSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parser.json");
        fs::write(&path, r#"{ "suggestionLimit": 8 }"#).unwrap();

        let loaded = ParserSettings::load_from(&path).unwrap();
        assert_eq!(loaded.suggestion_limit, 8);
        assert_eq!(loaded.suggestion_prefix_len, 2);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ParserSettings::load_from(&dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ParserSettings::load_from(&path), Err(ConfigError::Json(_))));
    }
}
