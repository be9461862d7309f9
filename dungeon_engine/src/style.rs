//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.
//!
//! Only the REPL chrome is styled. Game text stays plain so it wraps and
//! compares the same everywhere.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn farewell_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).bold()
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn farewell_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn farewell_style(&self) -> ColoredString {
        self.as_str().farewell_style()
    }
}

/// Turn styling on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
