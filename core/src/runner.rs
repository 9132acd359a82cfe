//! Command runner abstractions.

use crate::Result;
use std::path::Path;
use std::process::Command;

/// Trait describing how to delegate a command line to the OS.
pub trait CommandRunner {
    /// Run `command` to completion and return its exit code.
    fn run(&self, command: &str) -> Result<i32>;
}

/// Runs commands through the platform shell with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<i32> {
        let status = shell(command).status()?;
        // Killed by a signal.
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Shell command line that opens `dir` in the desktop file manager.
pub fn open_command(dir: &Path) -> String {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };
    format!("{opener} {}", shell_quote(&dir.display().to_string()))
}

#[cfg(windows)]
fn shell_quote(arg: &str) -> String {
    format!("\"{arg}\"")
}

#[cfg(not(windows))]
fn shell_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}
