//! Error types for startup-time loading. Nothing in the per-frame path fails.

use thiserror::Error;

use crate::level::LevelId;

/// Errors raised while resolving the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The INI source could not be read or parsed.
    #[error("Failed to load config '{path}': {details}")]
    Load { path: String, details: String },

    /// A required key is absent.
    #[error("Missing config value [{section}] {key}")]
    Missing { section: String, key: String },

    /// A key is present but its value does not parse.
    #[error("Invalid config value [{section}] {key}: {details}")]
    Invalid {
        section: String,
        key: String,
        details: String,
    },
}

/// Errors raised while reading or validating level layouts.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout '{path}': {details}")]
    Read { path: String, details: String },

    #[error("Malformed layout record on line {line}: {details}")]
    Malformed { line: usize, details: String },

    #[error("Layout for {level} has no PLAYER record")]
    MissingPlayer { level: LevelId },

    #[error("Layout for {level} has no ENEMY_BOSS record")]
    MissingBoss { level: LevelId },
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
