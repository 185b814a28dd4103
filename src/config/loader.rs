// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{RawSettings, Settings};
use crate::errors::Result;

/// Document syntax of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    /// `.toml` files are TOML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SettingsFormat::Toml,
            _ => SettingsFormat::Json,
        }
    }
}

/// Deserialize a settings document without validating it.
pub fn parse_settings(contents: &str, format: SettingsFormat) -> Result<RawSettings> {
    let raw = match format {
        SettingsFormat::Json => serde_json::from_str(contents)?,
        SettingsFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a settings file from a given path and return the raw `RawSettings`.
///
/// This only performs deserialization; it does **not** check that jobs have
/// names and locations. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSettings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_settings(&contents, SettingsFormat::from_path(path))
}

/// Load a settings file from path and validate it.
///
/// This is the entry point the binary uses. Any error here is fatal and is
/// reported before a single job is started.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Settings> {
    let raw = load_from_path(&path)?;
    let settings = Settings::try_from(raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(SettingsFormat::from_path(Path::new("a/_config.json")), SettingsFormat::Json);
        assert_eq!(SettingsFormat::from_path(Path::new("sysbak.TOML")), SettingsFormat::Toml);
        assert_eq!(SettingsFormat::from_path(Path::new("noext")), SettingsFormat::Json);
    }

    #[test]
    fn parses_json_with_camel_case_aliases() {
        let raw = parse_settings(
            r#"{
                "backupCommand": "backup $JOB_NAME",
                "cmdVars": [{ "variable": "$R", "value": "/r" }],
                "jobs": [{ "name": "a", "location": "/a", "vars": [{ "variable": "$X", "value": "1" }] }]
            }"#,
            SettingsFormat::Json,
        )
        .unwrap();
        assert_eq!(raw.backup_command.as_deref(), Some("backup $JOB_NAME"));
        assert_eq!(raw.cmd_vars.len(), 1);
        let jobs = raw.jobs.unwrap();
        assert_eq!(jobs[0].vars[0].variable, "$X");
    }

    #[test]
    fn parses_toml() {
        let raw = parse_settings(
            r#"
backup_command = "backup $JOB_NAME"

[[cmd_vars]]
variable = "$R"
value = "/r"

[[jobs]]
name = "a"
location = "/a"
command = "tar czf a.tgz /a"
"#,
            SettingsFormat::Toml,
        )
        .unwrap();
        let jobs = raw.jobs.unwrap();
        assert_eq!(jobs[0].command.as_deref(), Some("tar czf a.tgz /a"));
        assert_eq!(raw.cmd_vars[0].value, "/r");
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_settings("{ not json", SettingsFormat::Json).unwrap_err();
        assert!(matches!(err, crate::errors::SysbakError::JsonError(_)));
        assert!(err.is_config_error());
    }
}
