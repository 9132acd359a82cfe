mod commands;
mod context;
mod help;

use context::Context;
use scriptpl_core::{Error, Result};
use std::process::ExitCode;

/// Procedural script template: getopt-style flags, then one built-in command.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Fatal messages have already been printed.
            if !matches!(err, Error::Fatal { .. }) {
                eprintln!("{}: {err}", env!("CARGO_BIN_NAME"));
            }
            err.exit_code()
        }
    }
}

fn run() -> Result<()> {
    let mut ctx = Context::from_env()?;
    ctx.print_diagnostics()?;
    commands::dispatch(&mut ctx)
}
