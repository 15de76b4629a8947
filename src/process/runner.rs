//! Spawn, wait, collect.

use crate::config::ExecConfig;
use crate::error::{ExecError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Everything observed from a child that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code of the process (None if it was terminated by a signal).
    pub exit_code: Option<i32>,
    /// Captured standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Captured standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

impl ProcessOutput {
    /// Check if the child exited with status 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run `config.interpreter <script>` in the working directory.
pub fn run_interpreter(config: &ExecConfig, script: &Path) -> Result<ProcessOutput> {
    let mut command = Command::new(&config.interpreter);
    command.arg(script);

    let display = display_command(&config.interpreter, &[script.to_string_lossy().as_ref()]);
    collect(command, &config.interpreter, &display, &config.working_directory)
}

/// Run `command_line` through the configured shell in the working directory.
///
/// The string is passed through untouched; quoting and sanitization are the
/// caller's responsibility.
pub fn run_shell(config: &ExecConfig, command_line: &str) -> Result<ProcessOutput> {
    let mut command = Command::new(&config.shell);
    command.arg(&config.shell_flag);
    push_raw_command_line(&mut command, command_line);

    collect(command, &config.shell, command_line, &config.working_directory)
}

#[cfg(windows)]
fn push_raw_command_line(command: &mut Command, command_line: &str) {
    // cmd.exe does its own parsing; quoting it as a normal argument would
    // change what the user wrote.
    use std::os::windows::process::CommandExt;
    command.raw_arg(command_line);
}

#[cfg(not(windows))]
fn push_raw_command_line(command: &mut Command, command_line: &str) {
    command.arg(command_line);
}

/// Render a program and its arguments as a shell-quoted string for logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(program);
    words.extend_from_slice(args);
    shell_words::join(words)
}

/// Spawn the command, wait for it, and collect both streams.
///
/// A spawn failure is a launch fault. A failure while waiting on an already
/// running child is reported as an unknown fault.
fn collect(
    mut command: Command,
    program: &str,
    display: &str,
    working_dir: &Path,
) -> Result<ProcessOutput> {
    command
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = command.spawn().map_err(|e| ExecError::Launch {
        program: program.to_string(),
        message: e.to_string(),
    })?;

    let output = child.wait_with_output().map_err(|e| {
        ExecError::Unknown(format!(
            "failed to collect output of '{}': {}",
            display, e
        ))
    })?;

    Ok(ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
