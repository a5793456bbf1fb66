use crate::core::pairing::{resolve_earnings, resolve_text};
use crate::models::{entry::WorkerLedgerEntry, row::Row, row_kind::RowKind, worker::Worker};
use std::collections::BTreeMap;

pub type EntriesByWorker = BTreeMap<Worker, Vec<WorkerLedgerEntry>>;

/// Entry for `worker` built from the SERVICE row at `index`.
///
/// `None` when the row is not a SERVICE row or the worker has nothing in it.
pub fn entry_at(rows: &[Row], index: usize, worker: Worker) -> Option<WorkerLedgerEntry> {
    let row = rows.get(index)?;
    if !row.is(RowKind::Service) || !row.has_value(worker) {
        return None;
    }

    Some(WorkerLedgerEntry {
        service: row.get(worker).text(),
        earnings: resolve_earnings(rows, index, worker),
        client: resolve_text(rows, index, worker, RowKind::ClientInfo),
        time: resolve_text(rows, index, worker, RowKind::TimeInfo),
    })
}

/// Entries of a single worker, in sheet order.
pub fn entries_for(rows: &[Row], worker: Worker) -> Vec<WorkerLedgerEntry> {
    (0..rows.len())
        .filter_map(|i| entry_at(rows, i, worker))
        .collect()
}

/// Every worker mapped to its entries. Workers without services map to an
/// empty list, so the result always has one key per worker.
pub fn group_by_worker(rows: &[Row]) -> EntriesByWorker {
    let mut grouped: EntriesByWorker = Worker::ALL.iter().map(|w| (*w, Vec::new())).collect();

    for (i, row) in rows.iter().enumerate() {
        if !row.is(RowKind::Service) {
            continue;
        }
        for worker in Worker::ALL {
            if let Some(entry) = entry_at(rows, i, worker) {
                grouped.entry(worker).or_default().push(entry);
            }
        }
    }

    grouped
}
