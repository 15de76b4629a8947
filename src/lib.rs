//! coderun: execution adapter that runs code snippets and shell commands for
//! agentic pipelines and reduces every run to structured result data.
//!
//! The crate exposes two operations through [`exec::Executor`]:
//!
//! - **Run Source**: write source text to a file under the working directory
//!   and run it with the configured interpreter
//! - **Run Command**: hand a command line to the host shell verbatim
//!
//! Children run with the privileges of the host process. There is no
//! sandboxing, no timeout, and no output streaming.

pub mod config;
pub mod error;
pub mod events;
pub mod exec;
pub mod exit_codes;
pub mod fs;
pub mod process;
pub mod reduce;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ExecConfig;
pub use error::{ExecError, Result};
pub use exec::{ExecutionRequest, ExecutionResponse, Executor};
pub use reduce::{CommandRunResult, Outcome, SourceRunResult};
