//! User-facing status lines: coloured icon + message.
//! Diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, GREEN, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => (BLUE, "ℹ️"),
            Tone::Success => (GREEN, "✅"),
            Tone::Warning => (YELLOW, "⚠️"),
        }
    }
}

fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let (color, icon) = tone.style();
    println!("{color}{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

/// Section header above a table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}
