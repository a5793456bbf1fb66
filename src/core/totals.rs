use crate::models::{
    row::Row,
    row_kind::RowKind,
    totals::{TotalsByWorker, WorkerTotals},
    worker::Worker,
};

/// Value the SHARE row holds for every worker.
pub const SHARE_LABEL: &str = "50.%";

pub fn total_row(rows: &[Row]) -> Option<&Row> {
    rows.iter().find(|r| r.is(RowKind::Total))
}

/// Totals summed over every EARNINGS row, one numeric cell per worker.
///
/// Each entry owns exactly one EARNINGS row, so this is the per-entry sum
/// without going through the positional pairing.
pub fn totals_from_earnings(rows: &[Row]) -> TotalsByWorker {
    Worker::ALL
        .iter()
        .map(|w| {
            let total = rows
                .iter()
                .filter(|r| r.is(RowKind::Earnings))
                .filter_map(|r| r.get(*w).as_number())
                .sum::<f64>();
            (*w, WorkerTotals::from_total(total))
        })
        .collect()
}

/// Totals for every worker.
///
/// A TOTAL row is authoritative when present (non-numeric cells count as 0);
/// otherwise they are summed from the EARNINGS rows.
pub fn calculate_worker_totals(rows: &[Row]) -> TotalsByWorker {
    match total_row(rows) {
        Some(total) => Worker::ALL
            .iter()
            .map(|w| {
                let value = total.get(*w).as_number().unwrap_or(0.0);
                (*w, WorkerTotals::from_total(value))
            })
            .collect(),
        None => totals_from_earnings(rows),
    }
}

/// What the administrator earns across all workers.
pub fn calculate_admin_total(totals: &TotalsByWorker) -> f64 {
    totals.values().map(|t| t.admin_share).sum()
}
