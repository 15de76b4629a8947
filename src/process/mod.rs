//! Child process execution.
//!
//! Both call sites share one runner:
//!
//! - **Interpreter**: the configured interpreter with the materialized file
//!   as its only argument
//! - **Shell**: a caller-supplied command line handed to the host shell
//!   verbatim, with no escaping or validation
//!
//! Children run in the working directory with stdin closed. Both output
//! streams are collected in full and returned once the child exits; there
//! is no timeout and no streaming.

mod runner;

pub use runner::{ProcessOutput, display_command, run_interpreter, run_shell};
