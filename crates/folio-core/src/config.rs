//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! Serde is Rust's standard for serialization/deserialization.
//! The `#[derive(Serialize, Deserialize)]` macro generates code to convert
//! structs to/from TOML, JSON, etc.
//!
//! `#[serde(default)]` uses Default::default() for missing fields, making
//! configs backward-compatible.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::ThemePreference;

/// Main application configuration.
///
/// The portfolio persists exactly one piece of state across runs: the
/// theme preference. Unknown or malformed files fall back to defaults
/// rather than failing startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Color theme preference, `light` or `dark`
    pub theme: ThemePreference,
}

impl Config {
    /// Loads config from the default location, falling back to defaults
    /// on any read or parse failure.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|e| {
            tracing::debug!("Using default config: {}", e);
            Self::default()
        })
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("folio").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Saves the config to a specific file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemePreference::Light);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            theme: ThemePreference::Dark,
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio").join("config.toml");

        let config = Config {
            theme: ThemePreference::Dark,
        };
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_unknown_theme_value_is_a_parse_error() {
        let err = toml::from_str::<Config>("theme = \"sepia\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, ThemePreference::Light);
    }
}
