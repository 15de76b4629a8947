//! coderun CLI.
//!
//! A thin host around the library: it loads configuration, wires an event
//! sink, runs one request, prints the result, and exits with a code that
//! reflects the outcome.

mod cli;
mod commands;

use cli::Cli;
use coderun::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {:#}", err);

            let code = err
                .downcast_ref::<coderun::ExecError>()
                .map(|e| e.exit_code())
                .unwrap_or(exit_codes::INTERNAL_ERROR);
            ExitCode::from(code as u8)
        }
    }
}
