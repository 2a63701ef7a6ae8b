//! Structured error types.
//!
//! These are designed to be displayable in both CLI and TUI contexts; the
//! selection errors carry the exact text shown to the user.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::PlayerId;

/// Roster could not be loaded. The caller logs it and keeps an empty roster.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster source unreachable: {0}")]
    Unreachable(String),

    #[error("malformed roster document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate player id '{0}' in roster")]
    DuplicateId(PlayerId),
}

/// Squad mutation or confirmation was rejected. Selection is unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("This player is already in your team!")]
    Duplicate { id: PlayerId },

    #[error("You can only select {capacity} players!")]
    Capacity { capacity: usize },

    #[error("no player at position {position} (squad has {len})")]
    Range { position: usize, len: usize },

    #[error("Please select at least one player.")]
    Empty,

    #[error("failed to save team: {0}")]
    Persist(String),
}

/// Key-value storage failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration file could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
