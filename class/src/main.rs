mod cli;
mod script;

use script::{Script, META};
use scriptpl_core::{ColorChoice, Constants, Error, Result, ScriptMeta, ShellRunner};
use std::env;
use std::io;
use std::process::ExitCode;

/// Object-oriented script template built on clap.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Fatal messages and failed shell commands speak for themselves.
            if !matches!(err, Error::Fatal { .. } | Error::Shell { .. }) {
                eprintln!("{}: {err}", env!("CARGO_BIN_NAME"));
            }
            err.exit_code()
        }
    }
}

fn run() -> Result<()> {
    let meta: ScriptMeta = META.parse()?;
    let invocation = cli::parse(&meta, env::args_os()).unwrap_or_else(|err| err.exit());
    let mut script = Script::new(
        meta,
        Constants::capture()?,
        invocation,
        io::stdout(),
        ShellRunner::new(),
        ColorChoice::Auto.enabled(),
    );
    script.run()
}
