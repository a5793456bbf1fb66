/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Grey out the placeholder so empty cells recede in the table.
pub fn colorize_cell(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() || value.trim() == placeholder {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Amounts: positive green, zero plain.
pub fn colorize_amount(value: f64, text: &str) -> String {
    if value > 0.0 {
        format!("{GREEN}{text}{RESET}")
    } else {
        text.to_string()
    }
}
