//! Table views handed to the terminal renderer and the exporters.

use crate::core::access::{AccessView, WorkerLine, WorkerView};
use crate::models::{
    cell::Cell, entry::WorkerLedgerEntry, row::Row, totals::TotalsByWorker, totals::WorkerTotals,
    worker::Worker,
};
use crate::utils::formatting::round2;
use serde::Serialize;

pub const COL_SERVICE: &str = "Service";
pub const COL_CLIENT: &str = "Client";
pub const COL_TIME: &str = "Time";
pub const COL_EARNINGS: &str = "Earnings";

/// Ordered rows of cells under labelled columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Case-insensitive column lookup.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(label.trim()))
    }

    /// Every cell rendered to text, empty cells as `placeholder`.
    pub fn display_rows(&self, placeholder: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.display(placeholder)).collect())
            .collect()
    }
}

/// The raw sheet as the admin sees it: one column per worker, no detail tag.
pub fn ledger_table(rows: &[Row]) -> TableView {
    let columns: Vec<&str> = Worker::ALL.iter().map(|w| w.key()).collect();
    let mut table = TableView::new("Ledger", &columns);

    for row in rows {
        table.push(row.cells().map(|(_, c)| c.clone()).collect());
    }

    table
}

fn entry_cells(entry: &WorkerLedgerEntry) -> Vec<Cell> {
    vec![
        Cell::from(entry.service.as_str()),
        Cell::from(entry.client.as_str()),
        Cell::from(entry.time.as_str()),
        Cell::Number(entry.earnings),
    ]
}

/// A worker's own lines: services, then TOTAL/SHARE as `{DETAIL, value}`.
pub fn worker_view_table(view: &WorkerView) -> TableView {
    let mut table = TableView::new(
        view.worker.key(),
        &[COL_SERVICE, COL_CLIENT, COL_TIME, COL_EARNINGS],
    );

    for line in &view.lines {
        match line {
            WorkerLine::Entry(entry) => table.push(entry_cells(entry)),
            WorkerLine::Summary { kind, value } => table.push(vec![
                Cell::from(kind.name()),
                Cell::Empty,
                Cell::Empty,
                value.clone(),
            ]),
        }
    }

    table
}

/// Per-worker summary: service lines, then total and both 50% shares.
pub fn worker_summary_table(
    worker: Worker,
    entries: &[WorkerLedgerEntry],
    totals: &WorkerTotals,
) -> TableView {
    let mut table = TableView::new(
        format!("Summary of {}", worker),
        &[COL_SERVICE, COL_CLIENT, COL_TIME, COL_EARNINGS],
    );

    for entry in entries {
        table.push(entry_cells(entry));
    }

    let shown = totals.rounded();
    for (label, amount) in [
        ("TOTAL".to_string(), shown.total),
        ("Admin (50%)".to_string(), shown.admin_share),
        (format!("{} (50%)", worker), shown.worker_share),
    ] {
        table.push(vec![
            Cell::from(label),
            Cell::Empty,
            Cell::Empty,
            Cell::Number(amount),
        ]);
    }

    table
}

/// Totals per worker followed by the admin's overall share.
pub fn totals_table(totals: &TotalsByWorker, admin_total: f64) -> TableView {
    let mut table = TableView::new("Totals", &["Worker", "Total", "Admin (50%)", "Worker (50%)"]);

    for (worker, t) in totals {
        let t = t.rounded();
        table.push(vec![
            Cell::from(worker.key()),
            Cell::Number(t.total),
            Cell::Number(t.admin_share),
            Cell::Number(t.worker_share),
        ]);
    }

    table.push(vec![
        Cell::from("ADMIN TOTAL"),
        Cell::Empty,
        Cell::Number(round2(admin_total)),
        Cell::Empty,
    ]);

    table
}

/// The table a caller sees for its view.
///
/// An admin may narrow the view to one worker's summary with `focus`; the
/// argument is ignored for worker sessions, which only ever see their own lines.
pub fn table_for(view: &AccessView, focus: Option<Worker>) -> TableView {
    match (view, focus) {
        (AccessView::Admin(admin), Some(worker)) => {
            let entries = admin
                .summary
                .entries
                .get(&worker)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let totals = admin
                .summary
                .totals
                .get(&worker)
                .copied()
                .unwrap_or_default();
            worker_summary_table(worker, entries, &totals)
        }
        (AccessView::Admin(admin), None) => ledger_table(&admin.rows),
        (AccessView::Worker(worker), _) => worker_view_table(worker),
    }
}
