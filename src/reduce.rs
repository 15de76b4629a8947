//! Result shapes and the reduction from raw process output to them.
//!
//! Code requests and command requests deliberately have different result
//! types:
//!
//! - [`SourceRunResult`] keeps the file path and reports a non-zero exit as a
//!   normal `execution_failed` outcome
//! - [`CommandRunResult`] is either the raw stdout or the captured stderr;
//!   stdout of a failed command is dropped
//!
//! # Wire format
//!
//! A `SourceRunResult` serializes as:
//!
//! ```json
//! {"result": "Code executed successfully", "output": "2\n\n\nIf you ...", "file_path": "/work/code.py"}
//! {"result": "Failed to execute", "error": "Traceback ...", "file_path": "/work/code.py"}
//! {"result": "Error occurred", "error": "failed to launch ...", "file_path": "Unknown"}
//! ```

use crate::error::ExecError;
use crate::process::ProcessOutput;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Appended to the stdout of every successful code run.
///
/// The calling agent watches for this exact text.
pub const COMPLETION_HINT: &str = "\n\nIf you have completed all tasks, respond with FINAL ANSWER.";

/// Placeholder reported when the target path was never resolved.
pub const UNKNOWN_PATH: &str = "Unknown";

/// Terminal state of a code run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Code executed successfully")]
    Success,
    #[serde(rename = "Failed to execute")]
    ExecutionFailed,
    #[serde(rename = "Error occurred")]
    InternalError,
}

impl Outcome {
    /// Short machine tag (`success`, `execution_failed`, `internal_error`).
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::ExecutionFailed => "execution_failed",
            Outcome::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Where the code was (or would have been) written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResolvedPath {
    Known(PathBuf),
    Unknown,
}

impl ResolvedPath {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ResolvedPath::Known(path) => Some(path),
            ResolvedPath::Unknown => None,
        }
    }
}

impl From<Option<PathBuf>> for ResolvedPath {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(ResolvedPath::Unknown, ResolvedPath::Known)
    }
}

impl From<String> for ResolvedPath {
    fn from(s: String) -> Self {
        if s == UNKNOWN_PATH {
            ResolvedPath::Unknown
        } else {
            ResolvedPath::Known(PathBuf::from(s))
        }
    }
}

impl From<ResolvedPath> for String {
    fn from(path: ResolvedPath) -> Self {
        path.to_string()
    }
}

impl std::fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedPath::Known(path) => write!(f, "{}", path.display()),
            ResolvedPath::Unknown => write!(f, "{}", UNKNOWN_PATH),
        }
    }
}

/// Result of Run Source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRunResult {
    #[serde(rename = "result")]
    pub outcome: Outcome,

    /// Stdout plus [`COMPLETION_HINT`]; present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Stderr or fault text; present only on non-success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub file_path: ResolvedPath,
}

impl SourceRunResult {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Result of Run Command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRunResult {
    /// Exit 0: stdout exactly as captured.
    Completed { stdout: String },
    /// Non-zero exit or fault: stderr (or the fault message).
    Failed { stderr: String },
}

impl CommandRunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandRunResult::Completed { .. })
    }

    /// The string handed back to the caller: raw stdout, or `Error: <stderr>`.
    pub fn into_text(self) -> String {
        match self {
            CommandRunResult::Completed { stdout } => stdout,
            CommandRunResult::Failed { stderr } => format!("Error: {}", stderr),
        }
    }
}

impl std::fmt::Display for CommandRunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandRunResult::Completed { stdout } => write!(f, "{}", stdout),
            CommandRunResult::Failed { stderr } => write!(f, "Error: {}", stderr),
        }
    }
}

impl Serialize for CommandRunResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reduce a completed code run.
pub fn reduce_source(output: ProcessOutput, path: PathBuf) -> SourceRunResult {
    if output.is_success() {
        SourceRunResult {
            outcome: Outcome::Success,
            output: Some(output.stdout + COMPLETION_HINT),
            error: None,
            file_path: ResolvedPath::Known(path),
        }
    } else {
        SourceRunResult {
            outcome: Outcome::ExecutionFailed,
            output: None,
            error: Some(output.stderr),
            file_path: ResolvedPath::Known(path),
        }
    }
}

/// Reduce a fault that prevented a code run from completing.
pub fn reduce_source_fault(err: &ExecError, path: Option<PathBuf>) -> SourceRunResult {
    SourceRunResult {
        outcome: Outcome::InternalError,
        output: None,
        error: Some(err.to_string()),
        file_path: path.into(),
    }
}

/// Reduce a completed command run.
pub fn reduce_command(output: ProcessOutput) -> CommandRunResult {
    if output.is_success() {
        CommandRunResult::Completed {
            stdout: output.stdout,
        }
    } else {
        CommandRunResult::Failed {
            stderr: output.stderr,
        }
    }
}

/// Reduce a fault that prevented a command from completing.
pub fn reduce_command_fault(err: &ExecError) -> CommandRunResult {
    CommandRunResult::Failed {
        stderr: err.to_string(),
    }
}
