//! Call tracing for debug output.

use crate::printer::Printer;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;

/// Something that can emit a trace line.
pub trait Trace {
    fn trace(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write> Trace for Printer<W> {
    fn trace(&mut self, line: &str) -> io::Result<()> {
        self.debug(line)
    }
}

/// Run `f` on `subject` after tracing `label` with the caller's location.
///
/// `args` summarizes the call arguments and may be empty.
///
/// ```text
/// [FUNC] script.rs:42 - Script::os_system(command="pwd", auto_exit=true)
/// ```
#[track_caller]
pub fn traced<S, T, E>(
    subject: &mut S,
    label: &str,
    args: &str,
    f: impl FnOnce(&mut S) -> Result<T, E>,
) -> Result<T, E>
where
    S: Trace,
    E: From<io::Error>,
{
    let line = trace_line(Location::caller(), label, args);
    subject.trace(&line)?;
    f(subject)
}

fn trace_line(location: &Location<'_>, label: &str, args: &str) -> String {
    let file = Path::new(location.file())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.file().to_owned());
    format!("[FUNC] {file}:{} - {label}({args})", location.line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrinterSettings;

    #[test]
    fn traces_call_site_before_running() {
        let mut printer = Printer::new(Vec::new(), PrinterSettings { debug: true, ..Default::default() });
        let line = line!() + 1;
        let answer = traced(&mut printer, "Demo::answer", "", |p| -> io::Result<u8> {
            p.plain("inside")?;
            Ok(42)
        });
        assert_eq!(answer.expect("traced call"), 42);

        let out = String::from_utf8(printer.into_inner()).expect("utf8");
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].ends_with(&format!("[FUNC] trace.rs:{line} - Demo::answer()")), "{out}");
        assert!(lines[1].ends_with("inside"));
    }

    #[test]
    fn includes_argument_summary() {
        let mut printer = Printer::new(Vec::new(), PrinterSettings { debug: true, ..Default::default() });
        traced(&mut printer, "Demo::add", "a=1, b=2", |_| -> io::Result<()> { Ok(()) }).expect("traced call");
        let out = String::from_utf8(printer.into_inner()).expect("utf8");
        assert!(out.trim_end().ends_with(" - Demo::add(a=1, b=2)"), "{out}");
    }

    #[test]
    fn silent_without_debug() {
        let mut printer = Printer::new(Vec::new(), PrinterSettings::default());
        traced(&mut printer, "Demo::quiet", "", |_| -> io::Result<()> { Ok(()) }).expect("traced call");
        assert!(printer.into_inner().is_empty());
    }
}
