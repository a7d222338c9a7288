// UI module for consistent operator-facing terminal output
//
// Every console line the installer prints goes through here.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::style;
use serde::Serialize;

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an info/action message with arrow
pub fn action(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Print an indented step belonging to the last action
pub fn step(message: &str) {
    println!("    {}", message);
}

/// Print a status message (for dry-run, etc.)
pub fn status(prefix: &str, message: &str) {
    println!("{} {}", style(prefix).cyan().bold(), message);
}

/// Print a value as pretty JSON on stdout
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
