//! One-line status messages printed by the command handlers.

use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt::Display;

const BOLD: &str = "\x1b[1m";

fn line<T: Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: Display>(msg: T) {
    println!("{}", line(BLUE, "ℹ️", msg));
}

pub fn success<T: Display>(msg: T) {
    println!("{}", line(GREEN, "✅", msg));
}

pub fn warning<T: Display>(msg: T) {
    println!("{}", line(YELLOW, "⚠️", msg));
}

pub fn error<T: Display>(msg: T) {
    eprintln!("{}", line(RED, "❌", msg));
}

/// Section title, e.g. "Floor 1".
pub fn header<T: Display>(title: T) {
    println!("\n{BLUE}{BOLD}== {title} =={RESET}");
}

/// Explicit "nothing matched" state of a list view.
pub fn empty_state(kind: &str) {
    println!("{GREY}No {kind} found matching your filters.{RESET}");
}
