mod backup;
mod config;
pub mod database;
mod items;

pub use backup::{Backup, BACKUP_VERSION};
pub use config::{Settings, Theme};
pub use database::Database;
pub use items::{default_items, next_id, ItemRepository};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `QURANREVIEW_DATA_DIR` overrides the location outright. Otherwise the
/// directory is `~/.config/quranreview[-dev]/`, with the `-dev` suffix
/// selected by `QURANREVIEW_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("QURANREVIEW_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("QURANREVIEW_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("quranreview-dev")
            } else {
                base_dir.join("quranreview")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
