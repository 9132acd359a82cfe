//! Leveled, optionally colored line printer.

use crate::constants::DATE_TIME_FORMAT;
use crate::style::Level;
use crate::{Error, Result};
use chrono::Local;
use std::io::{self, Write};

/// Width of the `=` rule drawn by [`banner`].
pub const BANNER_WIDTH: usize = 120;

/// Which levels are shown and how lines are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrinterSettings {
    /// Show debug lines, prefixed with a timestamp.
    pub debug: bool,
    /// In debug, timestamp every line instead of debug lines only.
    pub stamp_all: bool,
    pub verbose: bool,
    /// Hide plain, info, success and verbose lines.
    pub quiet: bool,
    pub color: bool,
}

impl PrinterSettings {
    fn shows(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug,
            Level::Verbose => self.verbose && !self.quiet,
            Level::Plain | Level::Info | Level::Success => !self.quiet,
            Level::Warning | Level::Error | Level::Fatal => true,
        }
    }
}

/// `title` centered in a rule of `=`.
pub fn banner(title: &str) -> String {
    format!("{title:=^width$}", width = BANNER_WIDTH)
}

pub struct Printer<W = io::Stdout> {
    out: W,
    settings: PrinterSettings,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, settings: PrinterSettings) -> Self {
        Self { out, settings }
    }

    pub fn settings(&self) -> PrinterSettings {
        self.settings
    }

    /// Write one line at `level` if the settings let it through.
    pub fn line(&mut self, level: Level, text: &str) -> io::Result<()> {
        if !self.settings.shows(level) {
            return Ok(());
        }
        let text = format!("{}{text}", self.timestamp_prefix(level));
        writeln!(self.out, "{}", level.paint(&text, self.settings.color))
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Plain, text)
    }

    pub fn debug(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Debug, text)
    }

    pub fn verbose(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Verbose, text)
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Info, text)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Warning, text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Success, text)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.line(Level::Error, text)
    }

    /// Print at fatal level. A nonzero `code` ends the run: the output is
    /// flushed and [`Error::Fatal`] is returned for the caller to propagate.
    pub fn fatal(&mut self, text: &str, code: i32) -> Result<()> {
        self.line(Level::Fatal, text)?;
        if code == 0 {
            return Ok(());
        }
        self.out.flush()?;
        Err(Error::Fatal { code })
    }

    /// Write `text` as-is, whatever the settings.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        if text.ends_with('\n') {
            write!(self.out, "{text}")
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// Debug-level section header.
    pub fn debug_banner(&mut self, title: &str) -> io::Result<()> {
        self.debug(&banner(&format!(" {title} ")))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn timestamp_prefix(&self, level: Level) -> String {
        if self.settings.debug && (self.settings.stamp_all || level == Level::Debug) {
            format!("[{}] ", Local::now().format(DATE_TIME_FORMAT))
        } else {
            String::new()
        }
    }
}
