// src/config/mod.rs

//! Settings loading and validation for sysbak.
//!
//! Responsibilities:
//! - Define the settings data model (`model.rs`).
//! - Load a JSON or TOML settings document from disk (`loader.rs`).
//! - Validate it before any job is dispatched (`validate.rs`).
//! - Resolve the settings, log and last-run locations (`paths.rs`).

pub mod loader;
pub mod model;
pub mod paths;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_settings, SettingsFormat};
pub use model::{JobConfig, RawSettings, Settings};
pub use paths::SysbakPaths;
