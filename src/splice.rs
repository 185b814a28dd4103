// src/splice.rs

//! Variable splicing for command templates.
//!
//! Substitution is literal find-and-replace-all, applied in this order:
//!
//! 1. built-in tokens [`JOB_NAME_TOKEN`] and [`JOB_LOCATION_TOKEN`]
//! 2. the job's own `vars`, in list order
//! 3. the global `cmd_vars`, in list order
//!
//! Each step works on the output of the previous one, but a value inserted by a
//! binding is never scanned again by that same binding. Within one scope, when
//! two bindings name the same token the later one wins. Tokens that match
//! nothing are left as they are.

use crate::job::{JobDescriptor, VariableBinding};

pub const JOB_NAME_TOKEN: &str = "$JOB_NAME";
pub const JOB_LOCATION_TOKEN: &str = "$JOB_LOCATION";

/// The string substitution starts from: the job's override if it has one,
/// otherwise the shared template.
pub fn base_command<'a>(job: &'a JobDescriptor, template: &'a str) -> &'a str {
    job.command.as_deref().unwrap_or(template)
}

/// Expand `template` for `job`.
pub fn splice(template: &str, job: &JobDescriptor, global_vars: &[VariableBinding]) -> String {
    let mut cmd = base_command(job, template)
        .replace(JOB_NAME_TOKEN, &job.name)
        .replace(JOB_LOCATION_TOKEN, &job.location);

    for binding in effective(&job.vars).chain(effective(global_vars)) {
        cmd = apply(&cmd, binding);
    }

    cmd
}

/// Bindings of one scope with shadowed duplicates removed, so only the last
/// binding for a given token is applied.
fn effective(scope: &[VariableBinding]) -> impl Iterator<Item = &VariableBinding> {
    scope.iter().enumerate().filter_map(move |(idx, binding)| {
        let shadowed = scope[idx + 1..]
            .iter()
            .any(|later| later.variable == binding.variable);
        (!shadowed).then_some(binding)
    })
}

fn apply(cmd: &str, binding: &VariableBinding) -> String {
    // `str::replace` with an empty pattern would insert between every char.
    if binding.variable.is_empty() {
        return cmd.to_string();
    }
    cmd.replace(&binding.variable, &binding.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tokens_are_replaced() {
        let job = JobDescriptor::new("db", "/bak/db");
        let out = splice("backup $JOB_NAME to $JOB_LOCATION", &job, &[]);
        assert_eq!(out, "backup db to /bak/db");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let job = JobDescriptor::new("web", "/srv");
        let out = splice("$JOB_NAME:$JOB_NAME", &job, &[]);
        assert_eq!(out, "web:web");
    }

    #[test]
    fn override_command_replaces_template() {
        let job = JobDescriptor::new("logs", "/var/log").with_command("tar czf $JOB_NAME.tgz $JOB_LOCATION");
        let out = splice("rsync $JOB_LOCATION", &job, &[]);
        assert_eq!(out, "tar czf logs.tgz /var/log");
    }

    #[test]
    fn job_vars_apply_before_global_vars() {
        let job = JobDescriptor::new("a", "/a").with_var("$DEST", "job-dest");
        let globals = vec![VariableBinding::new("$DEST", "global-dest")];
        let out = splice("copy to $DEST", &job, &globals);
        assert_eq!(out, "copy to job-dest");
    }

    #[test]
    fn later_steps_see_earlier_replacements() {
        // The job var introduces $REPO, which the global binding then fills.
        let job = JobDescriptor::new("a", "/a").with_var("$TARGET", "$REPO/$JOB_NAME");
        let globals = vec![VariableBinding::new("$REPO", "/mnt/repo")];
        let out = splice("push $TARGET", &job, &globals);
        // $JOB_NAME came in after the built-in step, so it stays verbatim.
        assert_eq!(out, "push /mnt/repo/$JOB_NAME");
    }

    #[test]
    fn replacement_value_is_not_rescanned_by_its_own_binding() {
        let job = JobDescriptor::new("a", "/a").with_var("$X", "$X$X");
        let out = splice("$X", &job, &[]);
        assert_eq!(out, "$X$X");
    }

    #[test]
    fn later_binding_in_same_scope_overrides_earlier() {
        let job = JobDescriptor::new("a", "/a")
            .with_var("$V", "first")
            .with_var("$V", "second");
        assert_eq!(splice("$V", &job, &[]), "second");

        let globals = vec![
            VariableBinding::new("$G", "one"),
            VariableBinding::new("$G", "two"),
        ];
        assert_eq!(splice("$G", &JobDescriptor::new("a", "/a"), &globals), "two");
    }

    #[test]
    fn unmatched_tokens_are_left_verbatim() {
        let job = JobDescriptor::new("a", "/a");
        let out = splice("run $UNKNOWN --flag", &job, &[]);
        assert_eq!(out, "run $UNKNOWN --flag");
    }

    #[test]
    fn splicing_twice_is_stable_once_tokens_are_gone() {
        let job = JobDescriptor::new("db", "/bak/db");
        let once = splice("backup $JOB_NAME $OTHER", &job, &[]);
        let twice = splice(&once, &job, &[]);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_token_is_ignored() {
        let job = JobDescriptor::new("a", "/a").with_var("", "x");
        assert_eq!(splice("abc", &job, &[]), "abc");
    }
}
