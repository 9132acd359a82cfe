//! Severity levels and their terminal styles.

use crossterm::style::{Attribute, Color, ContentStyle};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Unstyled output.
    Plain,
    Debug,
    Verbose,
    Info,
    Warning,
    Success,
    Error,
    Fatal,
}

impl Level {
    pub fn style(self) -> ContentStyle {
        let (color, bold) = match self {
            Level::Plain => return ContentStyle::new(),
            Level::Debug => (Color::DarkGrey, true),
            Level::Verbose => (Color::White, false),
            Level::Info => (Color::Cyan, false),
            Level::Warning => (Color::Yellow, false),
            Level::Success => (Color::Green, false),
            Level::Error => (Color::Red, false),
            Level::Fatal => (Color::Red, true),
        };

        let mut style = ContentStyle::new();
        style.foreground_color = Some(color);
        if bold {
            style.attributes.set(Attribute::Bold);
        }
        style
    }

    /// Render `text` in this level's style, or as-is when `color` is off.
    pub fn paint(self, text: &str, color: bool) -> String {
        if color && self != Level::Plain {
            self.style().apply(text).to_string()
        } else {
            text.to_owned()
        }
    }
}

/// When to emit escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Only for a terminal stdout with `NO_COLOR` unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !colors_disabled() && std::io::stdout().is_terminal(),
        }
    }
}

/// Follows https://no-color.org/
fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}
