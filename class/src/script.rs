//! The `Script` type: parsed arguments, printer and shell runner in one value.

use crate::cli::{Args, Invocation};
use scriptpl_core::{
    printer::banner, traced, CommandRunner, Constants, Error, Printer, PrinterSettings, Result,
    ScriptMeta, Trace,
};
use std::io::{self, Write};

pub const META: &str = include_str!("../meta.toml");

pub struct Script<W, R> {
    meta: ScriptMeta,
    constants: Constants,
    args: Args,
    command: clap::Command,
    argv: Vec<String>,
    printer: Printer<W>,
    runner: R,
}

impl<W: Write, R: CommandRunner> Script<W, R> {
    pub fn new(
        meta: ScriptMeta,
        constants: Constants,
        invocation: Invocation,
        out: W,
        runner: R,
        color: bool,
    ) -> Self {
        let Invocation { args, command, argv } = invocation;
        let settings = PrinterSettings {
            debug: args.debug,
            stamp_all: true,
            verbose: args.verbose,
            quiet: args.quiet,
            color,
        };

        Self {
            meta,
            constants,
            args,
            command,
            argv,
            printer: Printer::new(out, settings),
            runner,
        }
    }

    /// Run the requested action, or show help when none was given.
    pub fn run(&mut self) -> Result<()> {
        if self.args.version {
            self.printer.raw(&self.meta.version_line())?;
            return Ok(());
        }

        self.print_diagnostics()?;
        if self.args.print_tests {
            traced(self, "Script::print_tests", "", Self::print_tests)
        } else if self.args.hi {
            traced(self, "Script::hi", "", Self::hi)
        } else {
            self.print_help()?;
            Ok(())
        }
    }

    /// One line at every level, then a shell command.
    pub fn print_tests(&mut self) -> Result<()> {
        let intro = format!("This is {} ({})", self.meta.name, self.meta.version);
        let p = &mut self.printer;
        p.plain(&banner(" Log demo "))?;
        p.debug(&format!("[debug] {intro}"))?;
        p.verbose(&format!("[verbose] {intro}"))?;
        p.info(&format!("[info] {intro}"))?;
        p.warning(&format!("[warning] {intro}"))?;
        p.success(&format!("[success] {intro}"))?;
        p.error(&format!("[error] {intro}"))?;
        p.fatal(&format!("[fatal] {intro}"), 0)?;
        let command = "pwd";
        traced(self, "Script::os_system", &format!("command={command:?}, auto_exit=true"), |s| {
            s.os_system(command, true)
        })?;
        self.printer.debug("")?;
        Ok(())
    }

    /// Custom method example.
    pub fn hi(&mut self) -> Result<()> {
        self.printer.info("Hi~ this is a custom method example")?;
        Ok(())
    }

    /// Run `command` through the shell, echoing it at debug level.
    ///
    /// With `auto_exit`, a nonzero status becomes [`Error::Shell`].
    pub fn os_system(&mut self, command: &str, auto_exit: bool) -> Result<i32> {
        self.printer.debug(&format!("$ {command}"))?;
        self.printer.flush()?;
        let code = self.runner.run(command)?;
        if code != 0 && auto_exit {
            return Err(Error::Shell { command: command.to_owned(), code });
        }
        Ok(code)
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        let help = self.command.render_help();
        let text = if self.printer.settings().color {
            help.ansi().to_string()
        } else {
            help.to_string()
        };
        self.printer.raw(&text)
    }

    fn print_diagnostics(&mut self) -> io::Result<()> {
        let p = &mut self.printer;
        if !p.settings().debug {
            return Ok(());
        }

        p.debug_banner("GLOBAL CONST")?;
        for (name, value) in self.constants.entries() {
            p.debug(&format!("{name} = {value}"))?;
        }
        p.debug("")?;

        p.debug_banner("COMMAND")?;
        p.debug(&self.argv.join(" "))?;
        p.debug("")?;

        p.debug_banner("ARGS")?;
        for (field, value) in self.args.fields() {
            p.debug(&format!("args.{field} = {value}"))?;
        }
        p.debug("")
    }

    #[cfg(test)]
    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }
}

impl<W: Write, R> Trace for Script<W, R> {
    fn trace(&mut self, line: &str) -> io::Result<()> {
        self.printer.debug(line)
    }
}
