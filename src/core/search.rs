use crate::core::table::TableView;
use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Keep the rows where any cell contains `term`, case-insensitively.
/// A blank term keeps everything.
pub fn filter_table(table: &TableView, term: &str) -> TableView {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return table.clone();
    }

    let rows = table
        .rows
        .iter()
        .filter(|row| {
            row.iter()
                .any(|c| !c.is_empty() && c.text().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    TableView {
        rows,
        ..table.clone()
    }
}

/// Stable sort of the rows by the column labelled `column`.
pub fn sort_table(table: &TableView, column: &str, direction: SortDirection) -> AppResult<TableView> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| AppError::UnknownColumn(column.to_string()))?;

    let mut sorted = table.clone();
    sorted.rows.sort_by(|a, b| {
        let ord = compare_cells(&a[idx], &b[idx]);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    Ok(sorted)
}

/// Numbers compare numerically, anything else as lowercase text.
fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
    match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => a.text().to_lowercase().cmp(&b.text().to_lowercase()),
    }
}
