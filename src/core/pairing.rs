//! Positional pairing between a SERVICE row and its detail rows.
//!
//! The sheet has no explicit link between a SERVICE row and the EARNINGS,
//! CLIENT and TIME rows that belong to it: they sit close to each other, with
//! other workers' rows possibly interleaved. The lookup below scans a fixed
//! window around the SERVICE row in a fixed priority order.

use crate::models::{cell::Cell, row::Row, row_kind::RowKind, worker::Worker};

/// Offsets searched around a SERVICE row, in priority order.
pub const PAIRING_OFFSETS: [isize; 6] = [-3, -2, -1, 1, 2, 3];

/// Find the `kind` cell for `worker` that pairs with the row at `index`.
///
/// The first in-window row tagged `kind` wins, even when its cell for
/// `worker` is empty; callers treat an empty cell like a miss. Returns `None`
/// when no row in the window carries the tag.
pub fn resolve_detail(rows: &[Row], index: usize, worker: Worker, kind: RowKind) -> Option<&Cell> {
    PAIRING_OFFSETS.iter().find_map(|offset| {
        let row = rows.get(index.checked_add_signed(*offset)?)?;
        row.is(kind).then(|| row.get(worker))
    })
}

/// Paired earnings amount, `0.0` on a miss or a non-numeric cell.
pub fn resolve_earnings(rows: &[Row], index: usize, worker: Worker) -> f64 {
    resolve_detail(rows, index, worker, RowKind::Earnings)
        .and_then(Cell::as_number)
        .unwrap_or(0.0)
}

/// Paired text detail (client, time), `""` on a miss.
pub fn resolve_text(rows: &[Row], index: usize, worker: Worker, kind: RowKind) -> String {
    resolve_detail(rows, index, worker, kind)
        .map(Cell::text)
        .unwrap_or_default()
}
