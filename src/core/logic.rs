use crate::core::grouping::{EntriesByWorker, group_by_worker};
use crate::core::totals::{calculate_admin_total, calculate_worker_totals};
use crate::models::{row::Row, totals::TotalsByWorker};

/// Everything the admin dashboard derives from one row set.
#[derive(Debug, Clone, Default)]
pub struct LedgerSummary {
    pub entries: EntriesByWorker,
    pub totals: TotalsByWorker,
    pub admin_total: f64,
}

pub struct Core;

impl Core {
    pub fn summarize(rows: &[Row]) -> LedgerSummary {
        let entries = group_by_worker(rows);
        let totals = calculate_worker_totals(rows);
        let admin_total = calculate_admin_total(&totals);

        LedgerSummary {
            entries,
            totals,
            admin_total,
        }
    }
}
