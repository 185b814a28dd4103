// src/job/state.rs

//! Per-job lifecycle.

use std::fmt;

use serde::Serialize;

/// Lifecycle of a single job within one run.
///
/// `Pending -> Running -> {Succeeded | Failed}`. Terminal states never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// Known to the runner, command not yet dispatched.
    Pending,
    /// Process handed to the launcher and not yet settled.
    Running,
    /// Process exited with status zero.
    Succeeded,
    /// Process exited nonzero, died, or never launched.
    Failed,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Succeeded | JobState::Failed)
    }

    /// Checked transition. Returns `None` for moves the lifecycle forbids.
    pub fn advance(self, next: JobState) -> Option<JobState> {
        use JobState::*;
        match (self, next) {
            (Pending, Running) => Some(Running),
            (Running, Succeeded) | (Running, Failed) => Some(next),
            _ => None,
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Pending => "pending",
            JobState::Running => "running",
            JobState::Succeeded => "succeeded",
            JobState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Lifecycle of one whole run.
///
/// `Idle -> Dispatching -> AwaitingAll -> Aggregated`; `Aggregated` is reached
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Dispatching,
    AwaitingAll,
    Aggregated,
}

impl RunPhase {
    pub fn advance(self, next: RunPhase) -> Option<RunPhase> {
        use RunPhase::*;
        match (self, next) {
            (Idle, Dispatching)
            | (Dispatching, AwaitingAll)
            | (AwaitingAll, Aggregated)
            // An empty job list skips straight to the report.
            | (Idle, Aggregated) => Some(next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_state_follows_lifecycle() {
        let s = JobState::Pending;
        let s = s.advance(JobState::Running).unwrap();
        assert!(!s.is_terminal());
        let s = s.advance(JobState::Failed).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn terminal_states_do_not_move() {
        for terminal in [JobState::Succeeded, JobState::Failed] {
            for next in [
                JobState::Pending,
                JobState::Running,
                JobState::Succeeded,
                JobState::Failed,
            ] {
                assert_eq!(terminal.advance(next), None);
            }
        }
    }

    #[test]
    fn pending_cannot_skip_running() {
        assert_eq!(JobState::Pending.advance(JobState::Succeeded), None);
    }

    #[test]
    fn run_phase_order() {
        let p = RunPhase::Idle
            .advance(RunPhase::Dispatching)
            .and_then(|p| p.advance(RunPhase::AwaitingAll))
            .and_then(|p| p.advance(RunPhase::Aggregated));
        assert_eq!(p, Some(RunPhase::Aggregated));
        assert_eq!(RunPhase::Aggregated.advance(RunPhase::Idle), None);
        assert_eq!(RunPhase::Idle.advance(RunPhase::Aggregated), Some(RunPhase::Aggregated));
    }
}
