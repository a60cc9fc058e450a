//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write section header (cyan bold when `color` is set)
pub fn header<W: Write>(out: &mut W, msg: &(impl Display + ?Sized), color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", msg.to_string().cyan().bold())
    } else {
        writeln!(out, "{}", msg)
    }
}

/// Write list item ("- " prefix)
pub fn item<W: Write>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "- {}", msg)
}

/// Write plain line (no color)
pub fn line<W: Write>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// Write result (green label)
pub fn result<W: Write>(
    out: &mut W,
    label: &str,
    msg: &(impl Display + ?Sized),
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(out, "{}: {}", label.green(), msg)
    } else {
        writeln!(out, "{}: {}", label, msg)
    }
}
