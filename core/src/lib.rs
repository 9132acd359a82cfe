//! Core crate shared by the script templates: metadata, derived constants,
//! leveled printing, option scanning and shell delegation.

pub mod constants;
pub mod getopt;
pub mod meta;
pub mod printer;
pub mod runner;
pub mod style;
pub mod trace;

pub use constants::Constants;
pub use getopt::{GetoptError, OptValue, Options};
pub use meta::{Author, ScriptMeta};
pub use printer::{Printer, PrinterSettings};
pub use runner::{CommandRunner, ShellRunner};
pub use style::{ColorChoice, Level};
pub use trace::{traced, Trace};

use std::process::ExitCode;
use thiserror::Error;

/// Common error type for the script templates.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line did not match the declared options.
    #[error(transparent)]
    Getopt(#[from] GetoptError),
    /// Embedded script metadata could not be deserialized.
    #[error("invalid script metadata: {0}")]
    Metadata(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Raised by [`Printer::fatal`] with a nonzero code.
    #[error("fatal error (exit code {code})")]
    Fatal { code: i32 },
    /// A delegated shell command exited unsuccessfully.
    #[error("command `{command}` exited with status {code}")]
    Shell { command: String, code: i32 },
}

impl Error {
    /// Process exit status for this error, never zero.
    ///
    /// Codes outside `1..=255` (negative, zero, or too large) become 1 rather
    /// than wrapping the way the OS would truncate them.
    pub fn exit_status(&self) -> u8 {
        match self {
            Error::Getopt(_) => 2,
            Error::Metadata(_) | Error::Io(_) => 1,
            Error::Fatal { code } | Error::Shell { code, .. } => match u8::try_from(*code) {
                Ok(0) | Err(_) => 1,
                Ok(code) => code,
            },
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
