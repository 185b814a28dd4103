// src/report/aggregate.rs

use serde::Serialize;

use crate::job::{JobName, JobOutcome, JobState};

/// Final state of one job, in job-list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobStatus {
    pub name: JobName,
    pub state: JobState,
}

/// Aggregated result of one full run.
///
/// `failures` keeps the relative order of the input job list, independent of
/// the order in which processes finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    total: usize,
    statuses: Vec<JobStatus>,
    failures: Vec<JobOutcome>,
    succeeded_count: usize,
}

impl RunReport {
    pub fn empty() -> Self {
        Self {
            total: 0,
            statuses: Vec::new(),
            failures: Vec::new(),
            succeeded_count: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// One entry per job, succeeded or not, in input order.
    pub fn statuses(&self) -> &[JobStatus] {
        &self.statuses
    }

    pub fn failures(&self) -> &[JobOutcome] {
        &self.failures
    }

    pub fn succeeded_count(&self) -> usize {
        self.succeeded_count
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code for this run: 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::empty()
    }
}

/// Partition outcomes by `failed`, keeping the failures in input order.
pub fn aggregate(outcomes: Vec<JobOutcome>) -> RunReport {
    let total = outcomes.len();
    let statuses: Vec<JobStatus> = outcomes
        .iter()
        .map(|o| {
            let state = o.state();
            debug_assert!(state.is_terminal());
            JobStatus {
                name: o.name.clone(),
                state,
            }
        })
        .collect();
    let failures: Vec<JobOutcome> = outcomes.into_iter().filter(|o| o.failed).collect();
    let succeeded_count = total - failures.len();

    RunReport {
        total,
        statuses,
        failures,
        succeeded_count,
    }
}
