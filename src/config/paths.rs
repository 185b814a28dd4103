// src/config/paths.rs

//! Locations of the settings file, run log and last-run marker.
//!
//! Resolution order for the base directory:
//! 1. `--settings-dir` CLI flag
//! 2. `SYSBAK_HOME` environment variable
//! 3. `~/.sysbak`

use std::path::{Path, PathBuf};

pub const SETTINGS_DIR_NAME: &str = ".sysbak";
pub const SETTINGS_FILE_NAME: &str = "_config.json";
pub const LOG_FILE_NAME: &str = "log";
pub const LAST_RUN_FILE_NAME: &str = "lastrun";
pub const HOME_ENV: &str = "SYSBAK_HOME";

/// Explicit file locations, passed to the loader and the run journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysbakPaths {
    pub settings_dir: PathBuf,
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
    pub last_run_file: PathBuf,
}

impl SysbakPaths {
    /// All files live directly in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let settings_dir = dir.into();
        Self {
            settings_file: settings_dir.join(SETTINGS_FILE_NAME),
            log_file: settings_dir.join(LOG_FILE_NAME),
            last_run_file: settings_dir.join(LAST_RUN_FILE_NAME),
            settings_dir,
        }
    }

    /// `$SYSBAK_HOME`, falling back to `~/.sysbak`.
    pub fn from_home() -> Self {
        if let Ok(dir) = std::env::var(HOME_ENV) {
            if !dir.trim().is_empty() {
                return Self::in_dir(dir);
            }
        }
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(home.join(SETTINGS_DIR_NAME))
    }

    /// Resolve from optional CLI overrides.
    pub fn resolve(settings_dir: Option<&Path>, config: Option<&Path>) -> Self {
        let mut paths = match settings_dir {
            Some(dir) => Self::in_dir(dir),
            None => Self::from_home(),
        };
        if let Some(config) = config {
            paths.settings_file = config.to_path_buf();
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_places_every_file_in_the_directory() {
        let paths = SysbakPaths::in_dir("/tmp/sb");
        assert_eq!(paths.settings_file, PathBuf::from("/tmp/sb/_config.json"));
        assert_eq!(paths.log_file, PathBuf::from("/tmp/sb/log"));
        assert_eq!(paths.last_run_file, PathBuf::from("/tmp/sb/lastrun"));
    }

    #[test]
    fn config_flag_only_moves_the_settings_file() {
        let paths = SysbakPaths::resolve(Some(Path::new("/d")), Some(Path::new("/etc/sb.toml")));
        assert_eq!(paths.settings_file, PathBuf::from("/etc/sb.toml"));
        assert_eq!(paths.log_file, PathBuf::from("/d/log"));
    }
}
