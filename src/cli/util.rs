use std::fmt;

use colored::Colorize;

pub fn warn(message: impl fmt::Display) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// A title followed by a separator line.
pub fn header(title: &str) -> String {
    format!("{}\n{}", title.bold(), "-".repeat(40).bright_black())
}

/// An indented `key: value` line.
pub fn field(key: &str, value: impl fmt::Display) -> String {
    format!("  {} {}", format!("{key}:").bright_black(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output() {
        colored::control::set_override(false);
        assert_eq!(header("Title"), format!("Title\n{}", "-".repeat(40)));
        assert_eq!(field("quarter", 1), "  quarter: 1");
    }
}
