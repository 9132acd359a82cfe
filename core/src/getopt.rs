//! POSIX-style option scanning for the procedural template.
//!
//! Scanning stops at the first operand, at a lone `-`, or right after `--`.
//! Short options may be clustered (`-dv`); a trailing `:` in the short option
//! string marks an option that takes an argument. Long options accept unique
//! prefixes and `--name=value`; a trailing `=` in a long option name marks one
//! that takes an argument.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetoptError {
    #[error("option {0} not recognized")]
    Unrecognized(String),
    #[error("option --{0} not a unique prefix")]
    Ambiguous(String),
    #[error("option {0} requires argument")]
    MissingArgument(String),
    #[error("option --{0} must not have an argument")]
    UnexpectedArgument(String),
}

/// Raw scan result: `(option, value)` pairs in command line order, and the operands.
pub type Scanned = (Vec<(String, String)>, Vec<String>);

/// Scan `argv` (without the program name) against the declared options.
///
/// Returned option names keep their dashes (`-d`, `--verbose`); options
/// without an argument carry an empty value.
pub fn getopt<S: AsRef<str>>(
    argv: &[S],
    shortopts: &str,
    longopts: &[&str],
) -> Result<Scanned, GetoptError> {
    let mut opts = Vec::new();
    let mut rest = argv.iter().map(|arg| arg.as_ref().to_owned());
    let mut operands = Vec::new();

    while let Some(arg) = rest.next() {
        if arg == "--" {
            break;
        }
        if let Some(long) = arg.strip_prefix("--") {
            let (name, value) = scan_long(long, longopts, &mut rest)?;
            opts.push((format!("--{name}"), value));
        } else if arg.len() > 1 && arg.starts_with('-') {
            scan_shorts(&arg[1..], shortopts, &mut rest, &mut opts)?;
        } else {
            operands.push(arg);
            break;
        }
    }

    operands.extend(rest);
    Ok((opts, operands))
}

fn scan_long(
    arg: &str,
    longopts: &[&str],
    rest: &mut impl Iterator<Item = String>,
) -> Result<(String, String), GetoptError> {
    let (name, inline) = match arg.split_once('=') {
        Some((name, value)) => (name, Some(value.to_owned())),
        None => (arg, None),
    };
    let (takes_arg, name) = resolve_long(name, longopts)?;

    let value = match (takes_arg, inline) {
        (true, Some(value)) => value,
        (true, None) => rest
            .next()
            .ok_or_else(|| GetoptError::MissingArgument(format!("--{name}")))?,
        (false, Some(_)) => return Err(GetoptError::UnexpectedArgument(name)),
        (false, None) => String::new(),
    };
    Ok((name, value))
}

fn resolve_long(name: &str, longopts: &[&str]) -> Result<(bool, String), GetoptError> {
    let candidates: Vec<&str> = longopts.iter().copied().filter(|o| o.starts_with(name)).collect();
    if candidates.is_empty() {
        return Err(GetoptError::Unrecognized(format!("--{name}")));
    }
    if candidates.contains(&name) {
        return Ok((false, name.to_owned()));
    }
    if candidates.iter().any(|o| o.strip_suffix('=') == Some(name)) {
        return Ok((true, name.to_owned()));
    }
    match candidates.as_slice() {
        [only] => match only.strip_suffix('=') {
            Some(full) => Ok((true, full.to_owned())),
            None => Ok((false, (*only).to_owned())),
        },
        _ => Err(GetoptError::Ambiguous(name.to_owned())),
    }
}

fn scan_shorts(
    cluster: &str,
    shortopts: &str,
    rest: &mut impl Iterator<Item = String>,
    opts: &mut Vec<(String, String)>,
) -> Result<(), GetoptError> {
    for (idx, opt) in cluster.char_indices() {
        let takes_arg = short_takes_arg(opt, shortopts)?;
        if !takes_arg {
            opts.push((format!("-{opt}"), String::new()));
            continue;
        }

        let tail = &cluster[idx + opt.len_utf8()..];
        let value = if tail.is_empty() {
            rest.next().ok_or_else(|| GetoptError::MissingArgument(format!("-{opt}")))?
        } else {
            tail.to_owned()
        };
        opts.push((format!("-{opt}"), value));
        return Ok(());
    }
    Ok(())
}

fn short_takes_arg(opt: char, shortopts: &str) -> Result<bool, GetoptError> {
    if opt == ':' {
        return Err(GetoptError::Unrecognized(format!("-{opt}")));
    }
    match shortopts.find(opt) {
        Some(pos) => Ok(shortopts[pos + opt.len_utf8()..].starts_with(':')),
        None => Err(GetoptError::Unrecognized(format!("-{opt}"))),
    }
}

/// Value recorded for a parsed option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    /// Present without an argument.
    Flag,
    Value(String),
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptValue::Flag => f.write_str("true"),
            OptValue::Value(value) => f.write_str(value),
        }
    }
}

/// Parsed options keyed by name without leading dashes. Last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(BTreeMap<String, OptValue>);

impl Options {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in pairs {
            let value: String = value.into();
            let value = if value.is_empty() { OptValue::Flag } else { OptValue::Value(value) };
            map.insert(name.as_ref().trim_start_matches('-').to_owned(), value);
        }
        Self(map)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether any of the given spellings (e.g. `["d", "debug"]`) was passed.
    pub fn any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.contains(name))
    }

    pub fn get(&self, name: &str) -> Option<&OptValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
