//! Table rendering utilities for CLI outputs.

use crate::core::table::TableView;
use crate::utils::colors::colorize_cell;
use crate::utils::formatting::bold;
use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns; `format!` pads by chars, which is wrong
/// for accented or wide text.
fn pad_display(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Render `table` as aligned text, empty cells shown as `placeholder`.
pub fn render(table: &TableView, placeholder: &str) -> String {
    let cells = table.display_rows(placeholder);

    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| UnicodeWidthStr::width(c.as_str()))
        .collect();
    for row in &cells {
        for (i, value) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    let mut out = String::new();

    // Header
    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad_display(c, *w))
        .collect();
    out.push_str(&bold(header.join(" | ").trim_end()));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    // Rows
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, w)| colorize_cell(&pad_display(value, *w), placeholder))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }

    out
}
