// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Only pre-flight problems are errors. A job that exits nonzero or cannot be
//! launched is recorded as a failed [`crate::job::JobOutcome`] instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SysbakError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SysbakError {
    /// True for errors that mean the settings document is unusable.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SysbakError::ConfigError(_) | SysbakError::JsonError(_) | SysbakError::TomlError(_)
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SysbakError>;
