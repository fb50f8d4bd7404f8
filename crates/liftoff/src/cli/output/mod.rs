//! Output formatting utilities
//!
//! The `*_line` builders return styled strings so report rendering can be
//! tested; `error` prints straight to stderr.

use console::{style, Style};

/// Styled success line
pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green().bold(), message)
}

/// Styled warning line
pub fn warning_line(message: &str) -> String {
    format!("{} {}", style("!").yellow().bold(), message)
}

/// Styled info line
pub fn info_line(message: &str) -> String {
    format!("{} {}", style("→").blue(), message)
}

/// Styled bullet, indented under a header
pub fn bullet(message: &str) -> String {
    format!("  {} {}", style("•").dim(), message)
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for version numbers
pub fn version_style() -> Style {
    Style::new().green().bold()
}

/// Style for URLs
pub fn url_style() -> Style {
    Style::new().cyan().underlined()
}
