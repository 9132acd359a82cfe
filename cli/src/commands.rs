//! Built-in commands and dispatch on the first operand.

use crate::context::Context;
use crate::help;
use scriptpl_core::{runner::open_command, CommandRunner, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Author,
    Dir,
    Open,
    Path,
    Summary,
    Version,
    Wiki,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Author,
        Builtin::Dir,
        Builtin::Open,
        Builtin::Path,
        Builtin::Summary,
        Builtin::Version,
        Builtin::Wiki,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Author => "author",
            Builtin::Dir => "dir",
            Builtin::Open => "open",
            Builtin::Path => "path",
            Builtin::Summary => "summary",
            Builtin::Version => "version",
            Builtin::Wiki => "wiki",
        }
    }

    /// One-line description for the help text.
    pub fn about(self) -> &'static str {
        match self {
            Builtin::Author => "show the author",
            Builtin::Dir => "show the directory this command is installed in",
            Builtin::Open => "open the installation directory",
            Builtin::Path => "show the path of this command's file",
            Builtin::Summary => "show the summary",
            Builtin::Version => "show the current version",
            Builtin::Wiki => "show the documentation link",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }
}

/// Run exactly one action for this invocation.
///
/// Built-ins are tried in table order, with `--version` checked alongside the
/// `version` command; then help; anything else goes to [`process`].
pub fn dispatch<W: Write, R: CommandRunner>(ctx: &mut Context<W, R>) -> Result<()> {
    let builtin = ctx.command().and_then(Builtin::from_name);
    let version_requested = builtin == Some(Builtin::Version) || ctx.options.contains("version");

    match builtin {
        Some(Builtin::Author) => ctx.printer.success(&ctx.meta.author_line())?,
        Some(Builtin::Dir) => ctx.printer.success(&ctx.constants.script_dir.display().to_string())?,
        Some(Builtin::Open) => open_script_dir(ctx)?,
        Some(Builtin::Path) => ctx.printer.success(&ctx.constants.script_file.display().to_string())?,
        Some(Builtin::Summary) => ctx.printer.success(&ctx.meta.description)?,
        _ if version_requested => ctx.printer.success(&ctx.meta.version)?,
        Some(Builtin::Wiki) => ctx.printer.success(&ctx.meta.readme_url)?,
        _ if ctx.wants_help() => help::print_help(ctx)?,
        _ => process(ctx)?,
    }
    Ok(())
}

/// The delegated command's status is reported at debug level only.
fn open_script_dir<W: Write, R: CommandRunner>(ctx: &mut Context<W, R>) -> Result<()> {
    let command = open_command(&ctx.constants.script_dir);
    ctx.printer.debug(&format!("$ {command}"))?;
    ctx.printer.flush()?;
    let code = ctx.runner.run(&command)?;
    ctx.printer.debug(&format!("exit status {code}"))?;
    Ok(())
}

/// Script logic goes here.
pub fn process<W: Write, R: CommandRunner>(ctx: &mut Context<W, R>) -> Result<()> {
    ctx.printer.success("Done!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{context, meta, output};

    fn run(args: &[&str]) -> String {
        let mut ctx = context(args).expect("parse");
        dispatch(&mut ctx).expect("dispatch");
        output(ctx)
    }

    #[test]
    fn builtin_table_round_trips_names() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("Author"), None);
    }

    #[test]
    fn informational_commands() {
        let meta = meta();
        assert_eq!(run(&["author"]), format!("{} <{}>\n", meta.author.name, meta.author.email));
        assert_eq!(run(&["dir"]), "/opt/bin\n");
        assert_eq!(run(&["path"]), "/opt/bin/script_tpl\n");
        assert_eq!(run(&["summary"]), format!("{}\n", meta.description));
        assert_eq!(run(&["version"]), "0.1.0\n");
        assert_eq!(run(&["wiki"]), format!("{}\n", meta.readme_url));
    }

    #[test]
    fn version_flag_with_other_flags() {
        assert_eq!(run(&["--version"]), "0.1.0\n");
        assert_eq!(run(&["-v", "--version"]), "0.1.0\n");
        assert_eq!(run(&["--version", "wiki"]), "0.1.0\n");
    }

    #[test]
    fn debug_leaves_command_output_unstamped() {
        let out = run(&["-d", "version"]);
        assert_eq!(out.lines().last(), Some("0.1.0"));
        assert!(out.lines().next().is_some_and(|line| line.starts_with('[')), "{out}");

        let out = run(&["-d", "dir"]);
        assert_eq!(out.lines().last(), Some("/opt/bin"));
    }

    #[test]
    fn earlier_builtins_win_over_version_flag() {
        assert_eq!(run(&["--version", "dir"]), "/opt/bin\n");
    }

    #[cfg(unix)]
    #[test]
    fn open_delegates_to_shell() {
        let mut ctx = context(&["open"]).expect("parse");
        dispatch(&mut ctx).expect("dispatch");
        let commands = ctx.runner.commands.borrow().clone();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].ends_with("'/opt/bin'"), "{commands:?}");
        assert!(output(ctx).is_empty());
    }

    #[test]
    fn failed_open_is_ignored() {
        let mut ctx = context(&["open"]).expect("parse");
        ctx.runner.code = 4;
        assert!(dispatch(&mut ctx).is_ok());
    }

    #[test]
    fn help_without_operands() {
        let out = run(&[]);
        assert_eq!(out, help::help_lines(&meta()).join("\n") + "\n");
    }

    #[test]
    fn help_flag_beats_unknown_command() {
        assert!(run(&["-h", "deploy"]).contains("# Usage"));
        assert!(run(&["--help", "deploy"]).contains("# Usage"));
    }

    #[test]
    fn unknown_command_falls_through_to_process() {
        assert_eq!(run(&["deploy", "now"]), "Done!\n");
    }
}
