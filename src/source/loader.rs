//! Reading and writing the parsed sheet.
//!
//! Two layouts are understood, both one object/line per sheet row:
//! - JSON: an array of objects keyed by column header (sheet-to-JSON output);
//! - CSV: a header line followed by the rows.
//!
//! Field checks are best-effort: unknown columns are ignored, missing worker
//! columns are empty and an unrecognised detail label leaves the row untagged.

use crate::errors::{AppError, AppResult};
use crate::models::{cell::Cell, row::Row, worker::Worker};
use crate::source::labels::{DETAIL_KEYS, is_detail_key, kind_from_label, label_for_kind};
use crate::utils::path::extension_of;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(AppError::UnsupportedSource(format!(
                "'{}' (extension '{}'); use .json or .csv",
                path.display(),
                other
            ))),
        }
    }
}

/// Load the rows of a sheet file. Read and parse failures are reported as
/// `SourceUnavailable` so the caller can retry.
pub fn load_rows(path: &Path) -> AppResult<Vec<Row>> {
    let format = SourceFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::SourceUnavailable(format!("cannot read '{}': {e}", path.display()))
    })?;

    let rows = match format {
        SourceFormat::Json => parse_json(&content),
        SourceFormat::Csv => parse_csv(content.as_bytes()),
    }
    .map_err(|e| AppError::SourceUnavailable(format!("cannot parse '{}': {e}", path.display())))?;

    debug!(path = %path.display(), rows = rows.len(), "loaded ledger source");
    Ok(rows)
}

fn row_from_fields<'a>(fields: impl Iterator<Item = (&'a str, Cell)>) -> Row {
    let mut row = Row::untagged();

    for (key, cell) in fields {
        if is_detail_key(key) {
            let label = cell.text();
            row.kind = kind_from_label(&label);
            if row.kind.is_none() && !label.trim().is_empty() {
                warn!(label = %label, "unrecognised detail label, row left untagged");
            }
        } else if let Some(worker) = Worker::from_key(key) {
            row.set(worker, cell);
        }
    }

    row
}

fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Empty,
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or_default(),
        Value::String(s) if s.is_empty() => Cell::Empty,
        Value::String(s) => Cell::Text(s.clone()),
        Value::Bool(b) => Cell::Text(b.to_string()),
        other => Cell::Text(other.to_string()),
    }
}

pub fn parse_json(content: &str) -> AppResult<Vec<Row>> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(content)?;

    Ok(records
        .iter()
        .map(|record| row_from_fields(record.iter().map(|(k, v)| (k.as_str(), cell_from_json(v)))))
        .collect())
}

pub fn parse_csv<R: io::Read>(reader: R) -> AppResult<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(row_from_fields(
            headers.iter().zip(record.iter()).map(|(k, v)| (k, Cell::parse(v))),
        ));
    }

    Ok(rows)
}

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::String(String::new()),
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Text(s) => Value::String(s.clone()),
    }
}

/// Rows as sheet-to-JSON objects.
pub fn to_json(rows: &[Row]) -> AppResult<String> {
    let records: Vec<Map<String, Value>> = rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            if let Some(kind) = row.kind {
                record.insert(
                    DETAIL_KEYS[0].to_string(),
                    Value::String(label_for_kind(kind).to_string()),
                );
            }
            for (worker, cell) in row.cells() {
                record.insert(worker.key().to_string(), cell_to_json(cell));
            }
            record
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn write_csv<W: io::Write>(writer: W, rows: &[Row]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![DETAIL_KEYS[0]];
    header.extend(Worker::ALL.iter().map(|w| w.key()));
    wtr.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.kind.map(label_for_kind).unwrap_or("").to_string()];
        record.extend(row.cells().map(|(_, c)| c.text()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `rows` to `path` in the format its extension names.
pub fn save_rows(path: &Path, rows: &[Row]) -> AppResult<()> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Json => fs::write(path, to_json(rows)?)?,
        SourceFormat::Csv => write_csv(fs::File::create(path)?, rows)?,
    }

    debug!(path = %path.display(), rows = rows.len(), "saved ledger rows");
    Ok(())
}
