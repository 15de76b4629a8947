//! Configuration model for coderun.
//!
//! This module defines the `ExecConfig` struct, usually read from
//! `coderun.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are preserved), sensible defaults for every field, and validation.
//!
//! The config is passed explicitly into every operation; nothing here reads
//! or writes process-wide state.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::ExecConfig;
pub use types::{DEFAULT_CONFIG_FILE, DEFAULT_TARGET_NAME};
