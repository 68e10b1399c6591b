//! Core error types for quranreview-core.
//!
//! This module defines the error hierarchy using thiserror. Only
//! [`ValidationError::InvalidRange`] originates in the scheduling core; the
//! rest belong to the storage and backup layers.

use std::path::PathBuf;
use thiserror::Error;

use crate::item::ItemId;

/// Core error type for quranreview-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backup import/export errors
    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    /// No item with the given id exists in the collection
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The largest stored id leaves no room for another item
    #[error("No item id left after {0}")]
    IdSpaceExhausted(ItemId),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a setting
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors raised before an item is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unit range is malformed or falls outside the section
    #[error("Invalid range {from_unit}-{to_unit} for a section of {length} units")]
    InvalidRange {
        from_unit: u32,
        to_unit: u32,
        length: u32,
    },

    /// Section id is not in the reference table
    #[error("Unknown section: {0}")]
    UnknownSection(u32),
}

/// Backup import errors.
#[derive(Error, Debug)]
pub enum BackupError {
    /// Backup document has no item array
    #[error("Backup has no memorizationData array")]
    MissingItems,

    /// Two items in the backup share an id
    #[error("Backup contains duplicate item id {0}")]
    DuplicateId(ItemId),

    /// Backup could not be parsed
    #[error("Malformed backup: {0}")]
    Malformed(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
