//! ExecConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration shared by Run Source and Run Command.
///
/// This struct represents the contents of `coderun.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Directory code files are written to and children run in.
    ///
    /// Created on demand. A relative value is anchored at the process
    /// current directory when paths are resolved.
    #[serde(default = "default_working_directory")]
    pub working_directory: PathBuf,

    /// Interpreter invoked with the materialized file as its only argument.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Shell program that receives command lines verbatim.
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Flag telling `shell` to execute the next argument (`-c`, `/C`).
    #[serde(default = "default_shell_flag")]
    pub shell_flag: String,

    /// Target file name used when a code request omits one.
    #[serde(default = "default_target_name")]
    pub default_target_name: String,

    /// Optional NDJSON file receiving execution events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            working_directory: default_working_directory(),
            interpreter: default_interpreter(),
            shell: default_shell(),
            shell_flag: default_shell_flag(),
            default_target_name: default_target_name(),
            events_log: None,
            extra: BTreeMap::new(),
        }
    }
}

impl ExecConfig {
    /// Default config rooted at the given working directory.
    pub fn with_working_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: dir.into(),
            ..Self::default()
        }
    }
}
