//! Console output helpers

use console::style;

/// Print a success line.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a failure line.
pub fn failure(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}

/// Print an indented key/value detail row.
pub fn detail(key: &str, value: &str) {
    println!("  {} {}", style(format!("{key}:")).dim(), value);
}
