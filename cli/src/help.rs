//! Static help text for the procedural template.

use crate::commands::Builtin;
use crate::context::Context;
use scriptpl_core::{CommandRunner, ScriptMeta};
use std::io::{self, Write};

const OPTIONS: [(&str, &str); 4] = [
    ("-h, --help", "show this help"),
    ("    --version", "show the current version"),
    ("-v, --verbose", "verbose mode, print details while running"),
    ("-d, --debug", "debug mode, print debugging information while running"),
];

/// The help text, one entry per line.
pub fn help_lines(meta: &ScriptMeta) -> Vec<String> {
    let mut lines = vec![
        meta.description.clone(),
        String::new(),
        "# Usage".to_owned(),
        format!(
            "\t$ {} [-dvh] [command] [params...] [--Option [value] [-sub_option [value]]...]...",
            meta.name
        ),
        String::new(),
        "# Global commands".to_owned(),
    ];
    lines.extend(Builtin::ALL.iter().map(|b| format!("\t{:<16}{}", b.name(), b.about())));
    lines.push(String::new());
    lines.push("# Global options".to_owned());
    lines.extend(OPTIONS.iter().map(|(flags, about)| format!("\t{flags:<16}{about}")));
    lines.push(String::new());
    lines.push("# Available commands".to_owned());
    lines.push(String::new());
    lines
}

pub fn print_help<W: Write, R: CommandRunner>(ctx: &mut Context<W, R>) -> io::Result<()> {
    for line in help_lines(&ctx.meta) {
        ctx.printer.info(&line)?;
    }
    Ok(())
}
