// src/config/validate.rs

use crate::config::model::{JobConfig, RawSettings, Settings};
use crate::errors::{Result, SysbakError};
use crate::job::{JobDescriptor, VariableBinding};

impl TryFrom<RawSettings> for Settings {
    type Error = SysbakError;

    fn try_from(raw: RawSettings) -> std::result::Result<Self, Self::Error> {
        let Some(job_configs) = raw.jobs else {
            return Err(config_error("settings must contain a `jobs` list"));
        };

        let jobs = job_configs
            .into_iter()
            .enumerate()
            .map(|(idx, job)| validate_job(idx, job))
            .collect::<Result<Vec<_>>>()?;

        validate_bindings("cmd_vars", &raw.cmd_vars)?;

        let backup_command = raw.backup_command.unwrap_or_default();
        validate_template(&backup_command, &jobs)?;

        Ok(Settings::new_unchecked(backup_command, raw.cmd_vars, jobs))
    }
}

fn validate_job(idx: usize, job: JobConfig) -> Result<JobDescriptor> {
    let name = match job.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            return Err(config_error(format!(
                "job #{} is missing a `name`",
                idx + 1
            )));
        }
    };

    let location = match job.location {
        Some(location) if !location.trim().is_empty() => location,
        _ => {
            return Err(config_error(format!(
                "job '{name}' is missing a `location`"
            )));
        }
    };

    if matches!(job.command.as_deref(), Some(c) if c.trim().is_empty()) {
        return Err(config_error(format!("job '{name}' has an empty `command`")));
    }

    validate_bindings(&format!("job '{name}' vars"), &job.vars)?;

    Ok(JobDescriptor {
        name,
        location,
        command: job.command,
        vars: job.vars,
    })
}

fn validate_bindings(scope: &str, bindings: &[VariableBinding]) -> Result<()> {
    if let Some(pos) = bindings.iter().position(|b| b.variable.is_empty()) {
        return Err(config_error(format!(
            "{scope}: binding #{} has an empty `variable`",
            pos + 1
        )));
    }
    Ok(())
}

fn validate_template(template: &str, jobs: &[JobDescriptor]) -> Result<()> {
    if !template.trim().is_empty() {
        return Ok(());
    }
    if let Some(job) = jobs.iter().find(|j| j.command.is_none()) {
        return Err(config_error(format!(
            "settings are missing `backup_command` (needed by job '{}')",
            job.name
        )));
    }
    Ok(())
}

fn config_error(msg: impl Into<String>) -> SysbakError {
    SysbakError::ConfigError(msg.into())
}
