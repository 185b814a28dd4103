use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sysbak::exec::backend::{LaunchFuture, Launcher};
use sysbak::exec::ProcessOutput;

/// Scripted behaviour for one command.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub exit_code: i32,
    pub delay: Duration,
    pub stdout: String,
    pub stderr: String,
    pub panic: bool,
}

impl Script {
    pub fn exit(code: i32) -> Self {
        Self {
            exit_code: code,
            ..Self::default()
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stderr(mut self, text: &str) -> Self {
        self.stderr = text.to_string();
        self
    }

    pub fn stdout(mut self, text: &str) -> Self {
        self.stdout = text.to_string();
        self
    }

    /// The launched future panics instead of resolving.
    pub fn panicking() -> Self {
        Self {
            panic: true,
            ..Self::default()
        }
    }
}

/// A fake launcher that:
/// - records every command in launch order
/// - records the order in which commands finished
/// - resolves each command according to its [`Script`] (unknown commands
///   succeed immediately).
#[derive(Debug, Clone, Default)]
pub struct ScriptedLauncher {
    scripts: Arc<HashMap<String, Script>>,
    launched: Arc<Mutex<Vec<String>>>,
    finished: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, command: &str, script: Script) -> Self {
        Arc::make_mut(&mut self.scripts).insert(command.to_string(), script);
        self
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&self, command: String) -> LaunchFuture {
        self.launched.lock().unwrap().push(command.clone());

        let script = self.scripts.get(&command).cloned().unwrap_or_default();
        let finished = Arc::clone(&self.finished);

        Box::pin(async move {
            tokio::time::sleep(script.delay).await;
            if script.panic {
                panic!("scripted panic for `{command}`");
            }
            finished.lock().unwrap().push(command);
            ProcessOutput::new(script.exit_code, script.stdout, script.stderr)
        })
    }
}
