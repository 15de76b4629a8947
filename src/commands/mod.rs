//! Command implementations for the coderun CLI.
//!
//! Each handler returns the process exit code on success. Errors returned
//! here are setup failures (config, reading input); run faults are already
//! folded into the printed result.

use crate::cli::{Cli, CodeArgs, Command, CommandArgs, GlobalArgs};
use anyhow::{Context, Result};
use coderun::config::{DEFAULT_CONFIG_FILE, ExecConfig};
use coderun::events::{FanOut, NdjsonLog, StderrLog};
use coderun::exec::Executor;
use coderun::exit_codes;
use coderun::reduce::Outcome;
use std::io::{Read, Write};

/// Dispatch a parsed command line to its handler.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = load_config(&cli.global)?;

    match cli.command {
        Command::Code(args) => cmd_code(&config, &cli.global, args),
        Command::Command(args) => cmd_command(&config, &cli.global, args),
        Command::Config => cmd_config(&config),
    }
}

/// Load the config file and apply command-line overrides.
///
/// An explicit `--config` must exist; the default file is optional.
fn load_config(global: &GlobalArgs) -> Result<ExecConfig> {
    let mut config = match &global.config {
        Some(path) => ExecConfig::load(path)?,
        None => ExecConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };

    if let Some(dir) = &global.working_dir {
        config.working_directory = dir.clone();
    }
    if let Some(events) = &global.events {
        config.events_log = Some(events.clone());
    }

    config.validate()?;
    Ok(config)
}

fn build_sink(config: &ExecConfig, global: &GlobalArgs) -> FanOut {
    let mut sink = FanOut::new();
    if !global.quiet {
        sink = sink.with(StderrLog);
    }
    if let Some(path) = &config.events_log {
        sink = sink.with(NdjsonLog::new(path));
    }
    sink
}

fn cmd_code(config: &ExecConfig, global: &GlobalArgs, args: CodeArgs) -> Result<i32> {
    let source = read_source(&args)?;
    let sink = build_sink(config, global);
    let executor = Executor::new(config, &sink);

    let result = executor.run_source(&source, args.target.as_deref());

    let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
    println!("{}", json);

    Ok(match result.outcome {
        Outcome::Success => exit_codes::SUCCESS,
        Outcome::ExecutionFailed => exit_codes::EXECUTION_FAILED,
        Outcome::InternalError => exit_codes::INTERNAL_ERROR,
    })
}

fn cmd_command(config: &ExecConfig, global: &GlobalArgs, args: CommandArgs) -> Result<i32> {
    let sink = build_sink(config, global);
    let executor = Executor::new(config, &sink);

    let result = executor.run_command(&args.command_line);
    let code = if result.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::EXECUTION_FAILED
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(result.into_text().as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write command output")?;

    Ok(code)
}

fn cmd_config(config: &ExecConfig) -> Result<i32> {
    print!("{}", config.to_yaml()?);
    Ok(exit_codes::SUCCESS)
}

/// Source text from the positional argument, `--file`, or stdin.
fn read_source(args: &CodeArgs) -> Result<String> {
    if let Some(source) = &args.source {
        return Ok(source.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read source file '{}'", path.display()));
    }

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read source from stdin")?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn global(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            config,
            working_dir: None,
            events: None,
            quiet: true,
        }
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("coderun.yaml");
        std::fs::write(&path, "working_directory: from-file\ninterpreter: python3\n").unwrap();

        let mut args = global(Some(path));
        args.working_dir = Some(PathBuf::from("/override"));
        args.events = Some(PathBuf::from("events.ndjson"));

        let config = load_config(&args).unwrap();
        assert_eq!(config.working_directory, PathBuf::from("/override"));
        assert_eq!(config.events_log, Some(PathBuf::from("events.ndjson")));
        assert_eq!(config.interpreter, "python3");
    }

    #[test]
    fn test_explicit_missing_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(&global(Some(temp_dir.path().join("missing.yaml")))).unwrap_err();

        let exec_err = err.downcast_ref::<coderun::ExecError>().unwrap();
        assert_eq!(exec_err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_read_source_prefers_inline_text() {
        let args = CodeArgs {
            source: Some("print(1)".to_string()),
            file: None,
            target: None,
        };
        assert_eq!(read_source(&args).unwrap(), "print(1)");
    }

    #[test]
    fn test_read_source_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snippet.py");
        std::fs::write(&path, "print('file')").unwrap();

        let args = CodeArgs {
            source: None,
            file: Some(path),
            target: None,
        };
        assert_eq!(read_source(&args).unwrap(), "print('file')");
    }

    #[test]
    fn test_build_sink_respects_quiet_and_events() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ExecConfig::with_working_directory(temp_dir.path());

        assert!(build_sink(&config, &global(None)).is_empty());

        config.events_log = Some(temp_dir.path().join("events.ndjson"));
        assert!(!build_sink(&config, &global(None)).is_empty());
    }
}
