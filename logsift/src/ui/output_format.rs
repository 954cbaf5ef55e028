// logsift/src/ui/output_format.rs
//! Styled message helpers for stderr/stdout lines.
//!
//! Styling is applied only when the caller reports a color-capable
//! destination; otherwise the text passes through unchanged.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Writes an informational line, cyan when colored.
pub fn print_info_message(
    writer: &mut dyn Write,
    msg: &str,
    use_color: bool,
) -> io::Result<()> {
    if use_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

/// Writes a warning line, yellow when colored.
pub fn print_warn_message(writer: &mut dyn Write, msg: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(writer, "warning: {}", msg.yellow())
    } else {
        writeln!(writer, "warning: {}", msg)
    }
}

/// Writes an error line, red when colored.
pub fn print_error_message(writer: &mut dyn Write, msg: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(writer, "error: {}", msg.red())
    } else {
        writeln!(writer, "error: {}", msg)
    }
}

/// Writes a section header, bold when colored.
pub fn print_header(writer: &mut dyn Write, title: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(writer, "=== {} ===", title.bold())
    } else {
        writeln!(writer, "=== {} ===", title)
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
