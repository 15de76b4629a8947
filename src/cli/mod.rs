//! CLI argument parsing for coderun.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// coderun: run code snippets and shell commands, report structured results.
///
/// Children run with the same privileges as coderun itself. Command lines are
/// passed to the shell without any escaping.
#[derive(Parser, Debug)]
#[command(name = "coderun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file (defaults apply if the default file is missing).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the working directory from the config.
    #[arg(long, global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Append execution events as NDJSON to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Do not print execution events to stderr.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands for coderun.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write source code to a file and run it with the interpreter.
    ///
    /// Prints the result mapping as JSON.
    Code(CodeArgs),

    /// Run a command line in the host shell.
    ///
    /// Prints stdout on success, or "Error: <stderr>" on failure.
    Command(CommandArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `code` command.
#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Source text to run. Read from stdin when omitted and --file is not given.
    #[arg(conflicts_with = "file")]
    pub source: Option<String>,

    /// Read the source text from this file.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// File name or path to write the code to.
    #[arg(short, long, value_name = "NAME")]
    pub target: Option<String>,
}

/// Arguments for the `command` command.
#[derive(Args, Debug)]
pub struct CommandArgs {
    /// The command line as one argument, passed to the shell verbatim.
    /// Quote it so the shell, not this program, sees its quoting.
    #[arg(allow_hyphen_values = true, value_name = "COMMAND_LINE")]
    pub command_line: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
