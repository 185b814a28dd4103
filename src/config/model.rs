// src/config/model.rs

use serde::Deserialize;

use crate::job::{JobDescriptor, VariableBinding};

/// Settings document as deserialized, before validation.
///
/// ```json
/// {
///   "backup_command": "restic -r $REPO backup $JOB_LOCATION --tag $JOB_NAME",
///   "cmd_vars": [ { "variable": "$REPO", "value": "/mnt/backup/restic" } ],
///   "jobs": [
///     { "name": "home", "location": "/home/me" },
///     { "name": "etc", "location": "/etc", "command": "tar czf /mnt/etc.tgz $JOB_LOCATION" }
///   ]
/// }
/// ```
///
/// The same shape is accepted as TOML (`[[jobs]]` tables).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSettings {
    /// Shared command template.
    #[serde(default, alias = "backupCommand")]
    pub backup_command: Option<String>,

    /// Global bindings, applied after each job's own `vars`.
    #[serde(default, alias = "cmdVars")]
    pub cmd_vars: Vec<VariableBinding>,

    /// `None` when the key is missing entirely, which is an error.
    #[serde(default)]
    pub jobs: Option<Vec<JobConfig>>,
}

/// One entry of `jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Full command override for this job.
    #[serde(default)]
    pub command: Option<String>,

    #[serde(default)]
    pub vars: Vec<VariableBinding>,
}

/// Validated settings. Only constructed through `TryFrom<RawSettings>`.
#[derive(Debug, Clone)]
pub struct Settings {
    backup_command: String,
    cmd_vars: Vec<VariableBinding>,
    jobs: Vec<JobDescriptor>,
}

impl Settings {
    pub(crate) fn new_unchecked(
        backup_command: String,
        cmd_vars: Vec<VariableBinding>,
        jobs: Vec<JobDescriptor>,
    ) -> Self {
        Self {
            backup_command,
            cmd_vars,
            jobs,
        }
    }

    /// Shared template; empty when every job carries its own command.
    pub fn backup_command(&self) -> &str {
        &self.backup_command
    }

    pub fn cmd_vars(&self) -> &[VariableBinding] {
        &self.cmd_vars
    }

    pub fn jobs(&self) -> &[JobDescriptor] {
        &self.jobs
    }
}
