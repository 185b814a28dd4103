#![allow(dead_code)]

use sysbak::config::{JobConfig, RawSettings, Settings};
use sysbak::job::{JobDescriptor, VariableBinding};

/// Builder for `Settings` to simplify test setup.
pub struct SettingsBuilder {
    raw: RawSettings,
}

impl SettingsBuilder {
    pub fn new(backup_command: &str) -> Self {
        Self {
            raw: RawSettings {
                backup_command: Some(backup_command.to_string()),
                cmd_vars: Vec::new(),
                jobs: Some(Vec::new()),
            },
        }
    }

    pub fn with_job(mut self, job: JobDescriptor) -> Self {
        self.raw.jobs.get_or_insert_with(Vec::new).push(JobConfig {
            name: Some(job.name),
            location: Some(job.location),
            command: job.command,
            vars: job.vars,
        });
        self
    }

    pub fn with_global_var(mut self, variable: &str, value: &str) -> Self {
        self.raw.cmd_vars.push(VariableBinding::new(variable, value));
        self
    }

    pub fn build(self) -> Settings {
        Settings::try_from(self.raw).expect("Failed to build valid settings from builder")
    }
}

/// Builder for `JobDescriptor`.
pub struct JobBuilder {
    job: JobDescriptor,
}

impl JobBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            job: JobDescriptor::new(name, format!("/backup/{name}")),
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.job.location = location.to_string();
        self
    }

    pub fn command(mut self, command: &str) -> Self {
        self.job.command = Some(command.to_string());
        self
    }

    pub fn var(mut self, variable: &str, value: &str) -> Self {
        self.job.vars.push(VariableBinding::new(variable, value));
        self
    }

    pub fn build(self) -> JobDescriptor {
        self.job
    }
}
