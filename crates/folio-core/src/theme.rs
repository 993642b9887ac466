//! Theme preference and its persistence.
//!
//! The store is created once at startup, handed down to whatever renders,
//! and torn down with the process. It is the single writer of the
//! preference; everything else only reads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Config;

/// The persisted light/dark display mode choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The other preference.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Holds the active theme preference and persists changes.
///
/// Persistence failures are logged and swallowed; the in-memory
/// preference stays authoritative for the session.
#[derive(Debug)]
pub struct ThemeStore {
    current: ThemePreference,
    /// Where toggles are persisted. `None` disables persistence
    /// (session overrides, tests).
    config_path: Option<PathBuf>,
}

impl ThemeStore {
    /// Reads the persisted preference, defaulting on absence or failure.
    pub fn load() -> Self {
        let config = Config::load();
        Self {
            current: config.theme,
            config_path: Config::default_path().ok(),
        }
    }

    /// A store with a fixed starting preference that never touches disk.
    pub fn ephemeral(preference: ThemePreference) -> Self {
        Self {
            current: preference,
            config_path: None,
        }
    }

    /// A store persisting to an explicit path.
    pub fn with_path(preference: ThemePreference, path: PathBuf) -> Self {
        Self {
            current: preference,
            config_path: Some(path),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.current
    }

    /// Flips the preference and persists the new value.
    pub fn toggle(&mut self) {
        self.current = self.current.toggled();
        tracing::info!("Theme switched to {}", self.current.as_str());
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        let config = Config {
            theme: self.current,
        };
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut store = ThemeStore::ephemeral(ThemePreference::Light);
        let original = store.preference();
        store.toggle();
        assert_ne!(store.preference(), original);
        store.toggle();
        assert_eq!(store.preference(), original);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ThemeStore::with_path(ThemePreference::Light, path.clone());
        store.toggle();
        assert_eq!(store.preference(), ThemePreference::Dark);

        let persisted = Config::load_from(&path).unwrap();
        assert_eq!(persisted.theme, store.preference());
    }

    #[test]
    fn test_persisted_value_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ThemeStore::with_path(ThemePreference::Light, path.clone());
        store.toggle();

        let reloaded = Config::load_from(&path).unwrap();
        let store2 = ThemeStore::with_path(reloaded.theme, path);
        assert_eq!(store2.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_ephemeral_store_never_writes() {
        let mut store = ThemeStore::ephemeral(ThemePreference::Dark);
        store.toggle();
        assert_eq!(store.preference(), ThemePreference::Light);
    }
}
