//! Invocation context: everything a command needs, built once per run.

use scriptpl_core::{
    getopt, printer::banner, ColorChoice, CommandRunner, Constants, Options, Printer,
    PrinterSettings, Result, ScriptMeta, ShellRunner,
};
use std::env;
use std::io::{self, Stdout, Write};

const META: &str = include_str!("../meta.toml");

pub const SHORT_OPTS: &str = "dvh";
pub const LONG_OPTS: &[&str] = &["debug", "help", "verbose", "version"];

pub struct Context<W = Stdout, R = ShellRunner> {
    pub meta: ScriptMeta,
    pub constants: Constants,
    pub options: Options,
    /// Operands left after option scanning; the first one names the command.
    pub args: Vec<String>,
    /// The full command line, program name included.
    pub argv: Vec<String>,
    pub printer: Printer<W>,
    pub runner: R,
}

impl Context {
    /// Build from the process arguments, stdout and the platform shell.
    pub fn from_env() -> Result<Self> {
        let meta: ScriptMeta = META.parse()?;
        Self::build(
            env::args().collect(),
            meta,
            Constants::capture()?,
            io::stdout(),
            ShellRunner::new(),
            ColorChoice::Auto.enabled(),
        )
    }
}

impl<W: Write, R: CommandRunner> Context<W, R> {
    pub fn build(
        argv: Vec<String>,
        meta: ScriptMeta,
        constants: Constants,
        out: W,
        runner: R,
        color: bool,
    ) -> Result<Self> {
        let (pairs, args) = getopt::getopt(argv.get(1..).unwrap_or_default(), SHORT_OPTS, LONG_OPTS)?;
        let options = Options::from_pairs(pairs);

        let debug = options.any(&["d", "debug"]);
        let settings = PrinterSettings {
            debug,
            stamp_all: false,
            verbose: debug || options.any(&["v", "verbose"]),
            quiet: false,
            color,
        };

        Ok(Self {
            meta,
            constants,
            options,
            args,
            argv,
            printer: Printer::new(out, settings),
            runner,
        })
    }

    pub fn command(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn wants_help(&self) -> bool {
        self.options.any(&["h", "help"]) || self.args.is_empty()
    }

    /// Dump date, constants, command line, operands and options at debug level.
    pub fn print_diagnostics(&mut self) -> io::Result<()> {
        let p = &mut self.printer;
        if !p.settings().debug {
            return Ok(());
        }

        p.debug("")?;
        p.debug_banner("DATE")?;
        p.debug(&self.constants.date_time)?;
        p.debug("")?;

        p.debug_banner("GLOBAL CONST")?;
        for (name, value) in self.constants.entries() {
            p.debug(&format!("{name} = {value}"))?;
        }
        p.debug("")?;

        p.debug_banner("COMMAND")?;
        p.debug(&self.argv.join(" "))?;
        p.debug("")?;

        p.debug_banner(&format!("ARGS ({})", self.args.len()))?;
        for (idx, arg) in self.args.iter().enumerate() {
            p.debug(&format!("args[{idx}] = {arg}"))?;
        }
        p.debug("")?;

        p.debug_banner(&format!("OPTS ({})", self.options.len()))?;
        for (name, value) in self.options.iter() {
            p.debug(&format!("opts[{name}] = {value}"))?;
        }
        p.debug("")?;
        p.debug(&banner(""))
    }
}
