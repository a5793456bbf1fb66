// src/export/model.rs

use crate::core::table::TableView;
use crate::models::cell::Cell;
use serde_json::{Map, Value};

/// Header per CSV / XLSX
pub(crate) fn get_headers(table: &TableView) -> Vec<&str> {
    table.columns.iter().map(String::as_str).collect()
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Text(s) if s.trim().is_empty() => Value::Null,
        Cell::Text(s) => Value::String(s.clone()),
    }
}

/// One JSON object per table row, keys in column order.
pub(crate) fn table_to_records(table: &TableView) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| (col.clone(), cell_value(cell)))
                .collect()
        })
        .collect()
}
