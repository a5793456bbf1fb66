//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Round to cents. Display only: rounded values never go back into the ledger.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Money amount with two decimals, e.g. `1950.00`.
pub fn fmt_amount(value: f64) -> String {
    format!("{:.2}", value)
}
