//! Error types for coderun.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every variant here is a fault; a child that runs and exits non-zero is a
//! normal outcome and is reported through `reduce`, not through this type.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coderun operations.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The target name could not be turned into a path at all.
    #[error("invalid target path: {0}")]
    InvalidTarget(String),

    /// A directory could not be created or a file could not be written.
    #[error("filesystem error at '{}': {message}", .path.display())]
    Filesystem { path: PathBuf, message: String },

    /// The child process could not be started.
    #[error(
        "failed to launch '{program}': {message}\n\
         Fix: ensure the command is installed and in PATH."
    )]
    Launch { program: String, message: String },

    /// Anything else that went wrong after the child was started.
    #[error("{0}")]
    Unknown(String),

    /// Configuration could not be loaded or is invalid.
    #[error("{0}")]
    Config(String),
}

/// Coarse classification of a fault, used in event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Filesystem,
    Launch,
    Unknown,
    Config,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Filesystem => "filesystem",
            FaultKind::Launch => "launch",
            FaultKind::Unknown => "unknown",
            FaultKind::Config => "config",
        }
    }
}

impl ExecError {
    /// Build a filesystem fault from an I/O error.
    pub fn filesystem(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        ExecError::Filesystem {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Which part of the fault taxonomy this error belongs to.
    pub fn kind(&self) -> FaultKind {
        match self {
            ExecError::InvalidTarget(_) | ExecError::Filesystem { .. } => FaultKind::Filesystem,
            ExecError::Launch { .. } => FaultKind::Launch,
            ExecError::Unknown(_) => FaultKind::Unknown,
            ExecError::Config(_) => FaultKind::Config,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecError::Config(_) => exit_codes::CONFIG_ERROR,
            _ => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for coderun operations.
pub type Result<T> = std::result::Result<T, ExecError>;
