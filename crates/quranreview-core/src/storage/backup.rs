//! JSON backup documents for export and import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::path::Path;

use super::config::{Settings, Theme};
use super::items::ItemRepository;
use crate::error::{BackupError, Result};
use crate::item::MemorizationItem;

/// Format version written into exported backups.
pub const BACKUP_VERSION: &str = "1.0.0";

/// A full snapshot of settings and items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default, serialize_with = "serialize_browser_settings")]
    pub settings: Settings,
    pub memorization_data: Vec<MemorizationItem>,
}

/// Settings as the browser app names them. [`Settings`] reads these keys
/// through aliases but writes snake_case to its TOML file.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowserSettings<'a> {
    user_name: &'a str,
    daily_goal: u32,
    theme: Theme,
    notifications: bool,
}

fn serialize_browser_settings<S: Serializer>(
    settings: &Settings,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    BrowserSettings {
        user_name: &settings.user_name,
        daily_goal: settings.daily_goal,
        theme: settings.theme,
        notifications: settings.notifications,
    }
    .serialize(serializer)
}

impl Backup {
    pub fn new(settings: Settings, items: Vec<MemorizationItem>, exported_at: DateTime<Utc>) -> Self {
        Self {
            version: BACKUP_VERSION.to_string(),
            export_date: Some(exported_at),
            settings,
            memorization_data: items,
        }
    }

    /// Suggested file name for a backup exported at `exported_at`.
    pub fn file_name(exported_at: DateTime<Utc>) -> String {
        format!("quranreview-backup-{}.json", exported_at.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and check a backup document.
    ///
    /// The document must carry a `memorizationData` array and item ids must
    /// be unique. Missing settings fall back to their defaults.
    ///
    /// # Errors
    /// Returns a [`BackupError`] describing the first problem found.
    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| BackupError::Malformed(e.to_string()))?;

        if !value
            .get("memorizationData")
            .is_some_and(serde_json::Value::is_array)
        {
            return Err(BackupError::MissingItems);
        }

        let backup: Backup =
            serde_json::from_value(value).map_err(|e| BackupError::Malformed(e.to_string()))?;

        let mut seen = HashSet::new();
        for item in &backup.memorization_data {
            if !seen.insert(item.id) {
                return Err(BackupError::DuplicateId(item.id));
            }
        }
        Ok(backup)
    }

    /// Write the backup to `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), items = self.memorization_data.len(), "backup exported");
        Ok(())
    }

    /// Replace the stored settings and items with this backup.
    ///
    /// # Errors
    /// Same as [`Backup::restore_to`].
    pub fn restore(&self, repo: &ItemRepository) -> Result<()> {
        self.restore_to(repo, &Settings::path()?)
    }

    /// Replace the settings at `settings_path` and the items in `repo`.
    ///
    /// Settings are written first; if that fails the stored items are left
    /// untouched.
    ///
    /// # Errors
    /// Returns an error if either write fails.
    pub fn restore_to(&self, repo: &ItemRepository, settings_path: &Path) -> Result<()> {
        self.settings.save_to(settings_path)?;
        repo.save(&self.memorization_data)?;
        tracing::info!(items = self.memorization_data.len(), "backup restored");
        Ok(())
    }

    /// Read and check a backup from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails [`Backup::from_json`].
    pub fn read_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let backup = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), items = backup.memorization_data.len(), "backup read");
        Ok(backup)
    }
}
