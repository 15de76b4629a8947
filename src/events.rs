//! Execution event logging for coderun.
//!
//! Every materialization step and every terminal outcome of a run is
//! described by an [`Event`] and handed to an injected [`EventSink`]. Sinks
//! decide where events go: an append-only NDJSON file, stderr, memory, or
//! nowhere at all.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `level`: `info` or `error`
//! - `action`: what happened (`source_written`, `launch`, `succeeded`, ...)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `message`: a human-readable line
//! - `details`: freeform object with action-specific details
//!
//! # Usage
//!
//! Sink failures are reported to the caller of [`EventSink::record`] but the
//! executor discards them, so a broken log never changes a run's result.
//!
//! ```no_run
//! use coderun::events::{Event, EventAction, EventSink, NdjsonLog};
//! use serde_json::json;
//!
//! let log = NdjsonLog::new("logs/events.ndjson");
//! let event = Event::info(EventAction::Launch, "Executing command: python3 code.py")
//!     .with_details(json!({"program": "python3"}));
//! log.record(&event)?;
//! # Ok::<(), coderun::error::ExecError>(())
//! ```

use crate::error::{ExecError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Severity of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Info,
    Error,
}

impl std::fmt::Display for EventLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventLevel::Info => write!(f, "INFO"),
            EventLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Working directory did not exist and was created
    WorkdirCreated,
    /// Target path resolved for a code request
    PathResolved,
    /// Source text written to the resolved path
    SourceWritten,
    /// Child process about to be spawned
    Launch,
    /// Child exited 0
    Succeeded,
    /// Code request child exited non-zero
    ExecutionFailed,
    /// Command request child exited non-zero
    CommandFailed,
    /// A fault stopped the run before an exit was observed
    InternalError,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::WorkdirCreated => write!(f, "workdir_created"),
            EventAction::PathResolved => write!(f, "path_resolved"),
            EventAction::SourceWritten => write!(f, "source_written"),
            EventAction::Launch => write!(f, "launch"),
            EventAction::Succeeded => write!(f, "succeeded"),
            EventAction::ExecutionFailed => write!(f, "execution_failed"),
            EventAction::CommandFailed => write!(f, "command_failed"),
            EventAction::InternalError => write!(f, "internal_error"),
        }
    }
}

/// A single execution event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    pub level: EventLevel,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    pub message: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given level and action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(level: EventLevel, action: EventAction, message: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            level,
            action,
            actor: get_actor_string(),
            message: message.into(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn info(action: EventAction, message: impl Into<String>) -> Self {
        Self::new(EventLevel::Info, action, message)
    }

    pub fn error(action: EventAction, message: impl Into<String>) -> Self {
        Self::new(EventLevel::Error, action, message)
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ExecError::Unknown(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Destination for execution events.
pub trait EventSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: &Event) -> Result<()>;
}

/// Appends events as NDJSON lines to a file.
///
/// The file and its parent directory are created if missing. Each record
/// results in one line with a trailing newline.
#[derive(Debug, Clone)]
pub struct NdjsonLog {
    path: PathBuf,
}

impl NdjsonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSink for NdjsonLog {
    fn record(&self, event: &Event) -> Result<()> {
        let json_line = event.to_ndjson_line()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| ExecError::filesystem(parent, &e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ExecError::filesystem(&self.path, &e))?;

        writeln!(file, "{}", json_line).map_err(|e| ExecError::filesystem(&self.path, &e))?;

        Ok(())
    }
}

/// Writes one human-readable line per event to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLog;

impl StderrLog {
    fn format_line(event: &Event) -> String {
        format!(
            "{} {:<5} [{}] {}",
            event.ts.format("%Y-%m-%d %H:%M:%S"),
            event.level,
            event.action,
            event.message
        )
    }
}

impl EventSink for StderrLog {
    fn record(&self, event: &Event) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", Self::format_line(event))
            .map_err(|e| ExecError::Unknown(format!("failed to write event to stderr: {}", e)))
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// Actions of the recorded events, oldest first.
    pub fn actions(&self) -> Vec<EventAction> {
        self.events().iter().map(|e| e.action).collect()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &Event) -> Result<()> {
        self.events
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(event.clone());
        Ok(())
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &Event) -> Result<()> {
        Ok(())
    }
}

/// Forwards every event to each inner sink.
///
/// All sinks are attempted; the first failure is returned.
#[derive(Default)]
pub struct FanOut {
    sinks: Vec<Box<dyn EventSink>>,
}

impl FanOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanOut {
    fn record(&self, event: &Event) -> Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.record(event)
                && first_err.is_none()
            {
                first_err = Some(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
