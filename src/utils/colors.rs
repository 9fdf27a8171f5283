/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Colour of a status, alert type or marker kind, by its wire value.
pub fn color_for_status(value: &str) -> &'static str {
    match value {
        "active" | "stable" | "resolved" | "check-in" | "break-end" => GREEN,
        "maintenance" | "critical" | "acknowledged" | "geofence" | "break-start" => YELLOW,
        "alert" | "emergency" | "new" => RED,
        "inactive" | "discharged" | "check-out" => GREY,
        "asset" | "movement" => BLUE,
        "patient" | "statusChange" => CYAN,
        "system" | "shift-change" => MAGENTA,
        _ => RESET,
    }
}

pub fn colorize_status(value: &str) -> String {
    paint(value, color_for_status(value))
}

/// Returns GREY for an empty optional field ("—") and the text otherwise.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => paint("—", GREY),
    }
}
