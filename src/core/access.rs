//! Role-based projection of the ledger.
//!
//! The admin sees everything; a worker sees only its own column, reshaped into
//! service lines plus the TOTAL/SHARE values. The source rows are never touched.

use crate::core::grouping::entry_at;
use crate::core::logic::{Core, LedgerSummary};
use crate::core::totals::calculate_worker_totals;
use crate::errors::{AppError, AppResult};
use crate::models::{
    cell::Cell,
    entry::WorkerLedgerEntry,
    row::Row,
    row_kind::RowKind,
    session::{Role, Session},
    totals::WorkerTotals,
    worker::Worker,
};

#[derive(Debug, Clone)]
pub struct AdminView {
    pub rows: Vec<Row>,
    pub summary: LedgerSummary,
}

/// One line of a worker's own view.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerLine {
    Entry(WorkerLedgerEntry),
    /// A TOTAL or SHARE row reduced to the worker's own value.
    Summary { kind: RowKind, value: Cell },
}

#[derive(Debug, Clone)]
pub struct WorkerView {
    pub worker: Worker,
    pub lines: Vec<WorkerLine>,
    pub totals: WorkerTotals,
}

impl WorkerView {
    pub fn entries(&self) -> impl Iterator<Item = &WorkerLedgerEntry> {
        self.lines.iter().filter_map(|line| match line {
            WorkerLine::Entry(e) => Some(e),
            WorkerLine::Summary { .. } => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum AccessView {
    Admin(AdminView),
    Worker(WorkerView),
}

/// Project `rows` to what `session` is allowed to see.
pub fn filter_by_access(rows: &[Row], session: &Session) -> AppResult<AccessView> {
    match session.role {
        Role::Admin => Ok(AccessView::Admin(AdminView {
            rows: rows.to_vec(),
            summary: Core::summarize(rows),
        })),
        Role::Worker => {
            let worker = session.worker.ok_or_else(|| {
                AppError::AccessDenied(format!(
                    "user '{}' is not bound to a worker column",
                    session.username
                ))
            })?;
            Ok(AccessView::Worker(worker_view(rows, worker)))
        }
    }
}

/// The reshaped view of a single worker's column.
pub fn worker_view(rows: &[Row], worker: Worker) -> WorkerView {
    let mut lines = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if !row.has_value(worker) {
            continue;
        }
        match row.kind {
            Some(RowKind::Service) => {
                if let Some(entry) = entry_at(rows, i, worker) {
                    lines.push(WorkerLine::Entry(entry));
                }
            }
            Some(kind) if kind.is_tail() => lines.push(WorkerLine::Summary {
                kind,
                value: row.get(worker).clone(),
            }),
            _ => {}
        }
    }

    let totals = calculate_worker_totals(rows)
        .get(&worker)
        .copied()
        .unwrap_or_default();

    WorkerView {
        worker,
        lines,
        totals,
    }
}
