//! Argument definitions for the object-oriented template.

use clap::{ArgGroup, CommandFactory, FromArgMatches, Parser};
use scriptpl_core::ScriptMeta;
use std::ffi::OsString;

/// `english（中文）`, or just `english` without a translation.
pub fn arg_help(en: &str, zh: &str) -> String {
    if zh.is_empty() {
        en.to_owned()
    } else {
        format!("{en}（{zh}）")
    }
}

#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("log").args(["quiet", "verbose"])))]
#[command(group(ArgGroup::new("action").args(["version", "print_tests", "hi"])))]
pub struct Args {
    #[arg(short, long, help = arg_help("show debug log", "显示调试信息"))]
    pub debug: bool,

    #[arg(
        short,
        long,
        help = arg_help("do not print any output except for warnings and errors", "仅显示异常和警告信息")
    )]
    pub quiet: bool,

    #[arg(short, long, help = arg_help("provide additional status output", "显示详细信息"))]
    pub verbose: bool,

    #[arg(short = 'V', long, help = arg_help("show program's version number and exit", "查看脚本版本"))]
    pub version: bool,

    #[arg(long = "print_tests", help = arg_help("print tests", "测试日志打印"))]
    pub print_tests: bool,

    #[arg(long, help = arg_help("custom func example", "自定义方法的示例"))]
    pub hi: bool,
}

impl Args {
    /// `(field, value)` pairs for debug dumps.
    pub fn fields(&self) -> [(&'static str, bool); 6] {
        [
            ("debug", self.debug),
            ("quiet", self.quiet),
            ("verbose", self.verbose),
            ("version", self.version),
            ("print_tests", self.print_tests),
            ("hi", self.hi),
        ]
    }
}

/// A parsed command line, with the clap command kept around for `--help` output.
pub struct Invocation {
    pub args: Args,
    pub command: clap::Command,
    pub argv: Vec<String>,
}

/// The clap command, described with the script's metadata.
pub fn command(meta: &ScriptMeta) -> clap::Command {
    Args::command()
        .name(meta.name.clone())
        .about(about(meta))
        .after_help(after_help(meta))
}

pub fn parse<I, T>(meta: &ScriptMeta, argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut command = command(meta);
    let matches = command.try_get_matches_from_mut(argv.iter().cloned())?;
    let args = Args::from_arg_matches(&matches)?;

    Ok(Invocation {
        args,
        command,
        argv: argv.iter().map(|arg| arg.to_string_lossy().into_owned()).collect(),
    })
}

fn about(meta: &ScriptMeta) -> String {
    let author = match &meta.author.url {
        Some(url) => format!("{} ({url})", meta.author_line()),
        None => meta.author_line(),
    };
    [
        format!("Script:   {}", meta.name),
        format!("Summary:  {}", meta.description),
        format!("Version:  {}", meta.version),
        format!("Updated:  {}", meta.update_time),
        format!("Author:   {author}"),
        format!("Docs:     {}", meta.readme_url),
    ]
    .join("\n")
}

fn after_help(meta: &ScriptMeta) -> String {
    let mut text = format!(
        "Examples:\n  \
         # show this help\n  \
         $ {name} -h\n\n  \
         # show the version\n  \
         $ {name} -V\n\n  \
         # run the custom method example\n  \
         $ {name} --hi",
        name = meta.name
    );
    if let Some(log) = &meta.update_log {
        text.push_str("\n\nUpdate log:\n");
        text.push_str(log.trim());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::META;
    use clap::error::ErrorKind;

    fn meta() -> ScriptMeta {
        META.parse().expect("embedded metadata parses")
    }

    fn parse_args(args: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("script_class_tpl").chain(args.iter().copied());
        parse(&meta(), argv).map(|invocation| invocation.args)
    }

    #[test]
    fn command_is_well_formed() {
        command(&meta()).debug_assert();
    }

    #[test]
    fn flags_parse() {
        let args = parse_args(&["-d", "-v", "--hi"]).expect("valid flags");
        assert!(args.debug && args.verbose && args.hi);
        assert!(!args.quiet && !args.print_tests && !args.version);

        let args = parse_args(&["--print_tests"]).expect("valid flags");
        assert!(args.print_tests);
    }

    #[test]
    fn log_flags_are_exclusive() {
        let err = parse_args(&["-q", "-v"]).expect_err("conflict");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn action_flags_are_exclusive() {
        for pair in [["-V", "--hi"], ["--hi", "--print_tests"], ["--print_tests", "--version"]] {
            let err = parse_args(&pair).expect_err("conflict");
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "{pair:?}");
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse_args(&["--print-tests"]).expect_err("unknown flag");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_describes_the_script() {
        let help = command(&meta()).render_help().to_string();
        assert!(help.contains("Version:  1.0.0"));
        assert!(help.contains("Andy Meng <andy_m129@163.com> (https://"));
        assert!(help.contains("显示调试信息"));
        assert!(help.contains("$ script_class_tpl --hi"));
        assert!(help.contains("### 2025/04/15: v1.0.0"));
    }

    #[test]
    fn bilingual_help_text() {
        assert_eq!(arg_help("print tests", "测试日志打印"), "print tests（测试日志打印）");
        assert_eq!(arg_help("only english", ""), "only english");
    }
}
