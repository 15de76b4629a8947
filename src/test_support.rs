use crate::config::ExecConfig;
use crate::error::{ExecError, Result};
use crate::events::{Event, EventSink};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Config rooted at `<temp>/work` (created) whose interpreter is the host
/// shell, so "source" can be a shell script and tests need no Python.
pub(crate) fn shell_config(temp_dir: &TempDir) -> ExecConfig {
    let config = unborn_shell_config(temp_dir);
    std::fs::create_dir_all(&config.working_directory).unwrap();
    config
}

/// Like [`shell_config`] but the working directory is not created.
pub(crate) fn unborn_shell_config(temp_dir: &TempDir) -> ExecConfig {
    let mut config = ExecConfig::with_working_directory(temp_dir.path().join("work"));
    #[cfg(not(windows))]
    {
        config.interpreter = "sh".to_string();
    }
    config
}

/// First Python interpreter found on PATH, if any.
pub(crate) fn find_python() -> Option<String> {
    ["python3", "python"].into_iter().find_map(|candidate| {
        Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .ok()
            .filter(|status| status.success())
            .map(|_| candidate.to_string())
    })
}

/// A sink that panics on every event.
pub(crate) struct PanickingSink;

impl EventSink for PanickingSink {
    fn record(&self, _event: &Event) -> Result<()> {
        panic!("event sink panicked");
    }
}

/// A sink that rejects every event.
pub(crate) struct FailingSink;

impl EventSink for FailingSink {
    fn record(&self, _event: &Event) -> Result<()> {
        Err(ExecError::Unknown("event sink unavailable".to_string()))
    }
}
