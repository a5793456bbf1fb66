// src/export/logic.rs

use crate::core::table::TableView;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ask_overwrite, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// Entry point of every export format.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `file` in `format`.
    ///
    /// An existing file is only replaced with `force` or after the user
    /// confirms. Returns `false` when there was nothing to export.
    pub fn export(table: &TableView, format: ExportFormat, file: &str, force: bool) -> AppResult<bool> {
        let path = Path::new(file);

        if table.rows.is_empty() {
            warning("No rows to export for this view.");
            return Ok(false);
        }

        ensure_writable(path, force, ask_overwrite)?;

        match format {
            ExportFormat::Csv => export_csv(table, path)?,
            ExportFormat::Json => export_json(table, path)?,
            ExportFormat::Xlsx => export_xlsx(table, path)?,
        }

        debug!(format = format.as_str(), rows = table.rows.len(), file, "export written");
        Ok(true)
    }
}
