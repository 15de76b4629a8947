//! The two public operations: Run Source and Run Command.
//!
//! An [`Executor`] borrows a config and an event sink and holds no other
//! state, so every call is independent. Neither operation returns an error:
//! every fault is reduced to result data before it reaches the caller.
//!
//! ```no_run
//! use coderun::config::ExecConfig;
//! use coderun::events::NullSink;
//! use coderun::exec::Executor;
//!
//! let config = ExecConfig::with_working_directory("/tmp/agent-work");
//! let executor = Executor::new(&config, &NullSink);
//!
//! let result = executor.run_source("print(1+1)", None);
//! println!("{}", serde_json::to_string(&result).unwrap());
//!
//! let text = executor.run_command("echo hello").into_text();
//! print!("{}", text);
//! ```

mod request;


pub use request::{ExecutionRequest, ExecutionResponse};

use crate::config::ExecConfig;
use crate::error::{ExecError, Result};
use crate::events::{Event, EventAction, EventSink};
use crate::fs::{ensure_directory, resolve_target_path, write_source};
use crate::process::{self, ProcessOutput, display_command};
use crate::reduce::{
    CommandRunResult, Outcome, SourceRunResult, reduce_command, reduce_command_fault,
    reduce_source, reduce_source_fault,
};
use serde_json::json;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Runs code and commands against one configuration.
#[derive(Clone, Copy)]
pub struct Executor<'a> {
    config: &'a ExecConfig,
    sink: &'a dyn EventSink,
}

impl<'a> Executor<'a> {
    pub fn new(config: &'a ExecConfig, sink: &'a dyn EventSink) -> Self {
        Self { config, sink }
    }

    /// Dispatch a request to the matching operation.
    pub fn execute(&self, request: &ExecutionRequest) -> ExecutionResponse {
        match request {
            ExecutionRequest::Code {
                source_text,
                target_name,
            } => ExecutionResponse::Source(self.run_source(source_text, target_name.as_deref())),
            ExecutionRequest::Command { command_line } => {
                ExecutionResponse::Command(self.run_command(command_line))
            }
        }
    }

    /// Write `source_text` to `target_name` and run it with the interpreter.
    ///
    /// `target_name` defaults to the configured default target (`code.py`).
    /// The path is resolved before anything touches the disk, so faults in
    /// later steps still report it.
    pub fn run_source(&self, source_text: &str, target_name: Option<&str>) -> SourceRunResult {
        let target_name = target_name.unwrap_or(self.config.default_target_name.as_str());

        let path = match resolve_target_path(&self.config.working_directory, target_name) {
            Ok(path) => path,
            Err(err) => return self.source_fault(&err, None),
        };

        self.emit(
            Event::info(
                EventAction::PathResolved,
                format!("Code will be written to file: {}", path.display()),
            )
            .with_details(json!({
                "target_name": target_name,
                "file_path": path.display().to_string(),
            })),
        );

        let result = self
            .materialize(&path, source_text)
            .and_then(|()| self.launch_source(&path));

        match result {
            Ok(output) => {
                let result = reduce_source(output, path);
                self.emit_source_outcome(&result);
                result
            }
            Err(err) => self.source_fault(&err, Some(path)),
        }
    }

    /// Run `command_line` through the host shell.
    ///
    /// On exit 0 the result is stdout exactly as captured. Otherwise it is the
    /// captured stderr (stdout is dropped), or the fault message if the shell
    /// could not be started.
    pub fn run_command(&self, command_line: &str) -> CommandRunResult {
        self.emit(
            Event::info(
                EventAction::Launch,
                format!("Executing command: {}", command_line),
            )
            .with_details(json!({"command": command_line, "shell": self.config.shell})),
        );

        let output = self
            .ensure_working_directory()
            .and_then(|()| process::run_shell(self.config, command_line));

        match output {
            Ok(output) => {
                let exit_code = output.exit_code;
                let result = reduce_command(output);
                match &result {
                    CommandRunResult::Completed { .. } => self.emit(
                        Event::info(EventAction::Succeeded, "Command executed successfully")
                            .with_details(json!({"exit_code": exit_code})),
                    ),
                    CommandRunResult::Failed { stderr } => self.emit(
                        Event::error(
                            EventAction::CommandFailed,
                            format!("Error executing command: {}", stderr),
                        )
                        .with_details(json!({"exit_code": exit_code})),
                    ),
                }
                result
            }
            Err(err) => {
                self.emit(
                    Event::error(
                        EventAction::InternalError,
                        format!("Error executing command: {}", err),
                    )
                    .with_details(json!({"kind": err.kind().as_str()})),
                );
                reduce_command_fault(&err)
            }
        }
    }

    fn materialize(&self, path: &Path, source_text: &str) -> Result<()> {
        self.ensure_working_directory()?;

        write_source(path, source_text)?;
        self.emit(
            Event::info(
                EventAction::SourceWritten,
                format!("Code has been written to file: {}", path.display()),
            )
            .with_details(json!({"file_path": path.display().to_string(), "bytes": source_text.len()})),
        );
        Ok(())
    }

    fn launch_source(&self, path: &Path) -> Result<ProcessOutput> {
        let display = display_command(&self.config.interpreter, &[path.to_string_lossy().as_ref()]);
        self.emit(
            Event::info(EventAction::Launch, format!("Executing command: {}", display))
                .with_details(json!({"command": display})),
        );

        process::run_interpreter(self.config, path)
    }

    fn ensure_working_directory(&self) -> Result<()> {
        let dir = &self.config.working_directory;
        if ensure_directory(dir)? {
            self.emit(
                Event::info(
                    EventAction::WorkdirCreated,
                    format!("Created storage directory: {}", dir.display()),
                )
                .with_details(json!({"working_directory": dir.display().to_string()})),
            );
        }
        Ok(())
    }

    fn emit_source_outcome(&self, result: &SourceRunResult) {
        let event = match result.outcome {
            Outcome::Success => Event::info(EventAction::Succeeded, "Code executed successfully"),
            Outcome::ExecutionFailed => Event::error(
                EventAction::ExecutionFailed,
                format!(
                    "Code execution failed: {}",
                    result.error.as_deref().unwrap_or_default()
                ),
            ),
            // Faults go through source_fault.
            Outcome::InternalError => return,
        };
        self.emit(event.with_details(json!({"file_path": result.file_path.to_string()})));
    }

    fn source_fault(&self, err: &ExecError, path: Option<PathBuf>) -> SourceRunResult {
        let result = reduce_source_fault(err, path);
        self.emit(
            Event::error(
                EventAction::InternalError,
                format!("An error occurred while executing code: {}", err),
            )
            .with_details(json!({
                "kind": err.kind().as_str(),
                "file_path": result.file_path.to_string(),
            })),
        );
        result
    }

    /// Hand an event to the sink. Sink errors and panics never affect a run.
    fn emit(&self, event: Event) {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| self.sink.record(&event)));
    }
}
