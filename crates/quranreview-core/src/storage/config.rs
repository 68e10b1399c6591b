//! TOML-based user settings.
//!
//! Stores user preferences including:
//! - Display name
//! - Daily review goal (used to scale the weekly activity chart)
//! - Light/dark theme
//! - Notification toggle
//!
//! Settings are stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Colour theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User settings.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`. The camelCase
/// aliases let settings embedded in browser-era backups load as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default, alias = "userName")]
    pub user_name: String,
    #[serde(default = "default_daily_goal", alias = "dailyGoal")]
    pub daily_goal: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub notifications: bool,
}

fn default_daily_goal() -> u32 {
    5
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            daily_goal: default_daily_goal(),
            theme: Theme::default(),
            notifications: true,
        }
    }
}

impl Settings {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub(crate) fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed,
    /// or if the default settings cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, writing defaults");
                let settings = Self::default();
                settings.save_to(path)?;
                Ok(settings)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Get a setting as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a setting by key without persisting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit
    /// the setting's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn default_values() {
        let settings = Settings::default();
        assert_eq!(settings.user_name, "");
        assert_eq!(settings.daily_goal, 5);
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Settings = toml::from_str("user_name = \"Aisha\"").unwrap();
        assert_eq!(parsed.user_name, "Aisha");
        assert_eq!(parsed.daily_goal, 5);
        assert!(parsed.notifications);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let parsed: Settings =
            serde_json::from_str(r#"{"userName":"Omar","dailyGoal":8,"theme":"dark"}"#).unwrap();
        assert_eq!(parsed.user_name, "Omar");
        assert_eq!(parsed.daily_goal, 8);
        assert_eq!(parsed.theme, Theme::Dark);
        assert!(parsed.notifications);
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let settings = Settings::default();
        assert_eq!(settings.get("daily_goal").as_deref(), Some("5"));
        assert_eq!(settings.get("notifications").as_deref(), Some("true"));
        assert_eq!(settings.get("theme").as_deref(), Some("light"));
        assert!(settings.get("missing").is_none());
        assert!(settings.get("").is_none());
    }

    #[test]
    fn set_updates_typed_values() {
        let mut settings = Settings::default();
        settings.set("daily_goal", "10").unwrap();
        settings.set("notifications", "false").unwrap();
        settings.set("theme", "dark").unwrap();
        settings.set("user_name", "Maryam").unwrap();
        assert_eq!(settings.daily_goal, 10);
        assert!(!settings.notifications);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.user_name, "Maryam");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut settings = Settings::default();
        let err = settings.set("font_size", "12").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn set_rejects_invalid_values() {
        let mut settings = Settings::default();
        assert!(settings.set("notifications", "maybe").is_err());
        assert!(settings.set("daily_goal", "-1").is_err());
        assert!(settings.set("theme", "purple").is_err());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut settings = Settings::default();
        settings.set("daily_goal", "3").unwrap();
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().daily_goal, 3);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "daily_goal = \"lots\"").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
