#![allow(dead_code, unused_imports)]

pub use sysbak_test_utils::builders::{JobBuilder, SettingsBuilder};
pub use sysbak_test_utils::scripted_launcher::{Script, ScriptedLauncher};
pub use sysbak_test_utils::{init_tracing, with_timeout};
