//! Configuration constants and default value functions.
//!
//! Defaults are platform-aware: the interpreter and shell differ between
//! Windows and Unix hosts.

use std::path::PathBuf;

/// File name looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "coderun.yaml";

/// Target file name used when a code request does not name one.
pub const DEFAULT_TARGET_NAME: &str = "code.py";

pub(crate) fn default_working_directory() -> PathBuf {
    PathBuf::from("workspace")
}

#[cfg(windows)]
pub(crate) fn default_interpreter() -> String {
    "python".to_string()
}

#[cfg(not(windows))]
pub(crate) fn default_interpreter() -> String {
    "python3".to_string()
}

#[cfg(windows)]
pub(crate) fn default_shell() -> String {
    "cmd".to_string()
}

#[cfg(not(windows))]
pub(crate) fn default_shell() -> String {
    "sh".to_string()
}

#[cfg(windows)]
pub(crate) fn default_shell_flag() -> String {
    "/C".to_string()
}

#[cfg(not(windows))]
pub(crate) fn default_shell_flag() -> String {
    "-c".to_string()
}

pub(crate) fn default_target_name() -> String {
    DEFAULT_TARGET_NAME.to_string()
}
