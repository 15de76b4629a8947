//! Request and response unions for callers that route both operations
//! through one entry point.

use crate::reduce::{CommandRunResult, SourceRunResult};
use serde::{Deserialize, Serialize};

/// Something to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionRequest {
    /// Materialize `source_text` and run it with the interpreter.
    Code {
        source_text: String,
        /// Bare file name, relative path, or absolute path.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_name: Option<String>,
    },
    /// Run `command_line` in the host shell.
    Command { command_line: String },
}

impl ExecutionRequest {
    pub fn code(source_text: impl Into<String>) -> Self {
        ExecutionRequest::Code {
            source_text: source_text.into(),
            target_name: None,
        }
    }

    pub fn code_at(source_text: impl Into<String>, target_name: impl Into<String>) -> Self {
        ExecutionRequest::Code {
            source_text: source_text.into(),
            target_name: Some(target_name.into()),
        }
    }

    pub fn command(command_line: impl Into<String>) -> Self {
        ExecutionRequest::Command {
            command_line: command_line.into(),
        }
    }
}

/// What came back from an [`ExecutionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExecutionResponse {
    Source(SourceRunResult),
    Command(CommandRunResult),
}

impl ExecutionResponse {
    pub fn is_success(&self) -> bool {
        match self {
            ExecutionResponse::Source(result) => result.is_success(),
            ExecutionResponse::Command(result) => result.is_success(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_request_parses_without_target() {
        let request: ExecutionRequest =
            serde_json::from_str(r#"{"kind":"code","source_text":"print(1)"}"#).unwrap();
        assert_eq!(request, ExecutionRequest::code("print(1)"));
    }

    #[test]
    fn test_code_request_parses_with_target() {
        let request: ExecutionRequest = serde_json::from_str(
            r#"{"kind":"code","source_text":"print(1)","target_name":"a.py"}"#,
        )
        .unwrap();
        assert_eq!(request, ExecutionRequest::code_at("print(1)", "a.py"));
    }

    #[test]
    fn test_command_request_parses() {
        let request: ExecutionRequest =
            serde_json::from_str(r#"{"kind":"command","command_line":"ls -la"}"#).unwrap();
        assert_eq!(request, ExecutionRequest::command("ls -la"));
    }

    #[test]
    fn test_command_response_serializes_as_plain_string() {
        let response = ExecutionResponse::Command(CommandRunResult::Completed {
            stdout: "hello\n".to_string(),
        });
        assert_eq!(serde_json::to_value(&response).unwrap(), "hello\n");
        assert!(response.is_success());
    }
}
