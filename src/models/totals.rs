use super::worker::Worker;
use crate::utils::formatting::round2;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fraction of every worker's total that goes to the administrator.
pub const ADMIN_SPLIT: f64 = 0.5;

/// Earnings of one worker and its 50/50 split.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WorkerTotals {
    pub total: f64,
    pub admin_share: f64,
    pub worker_share: f64,
}

impl WorkerTotals {
    /// Both shares are always derived from `total`.
    pub fn from_total(total: f64) -> Self {
        Self {
            total,
            admin_share: total * ADMIN_SPLIT,
            worker_share: total * (1.0 - ADMIN_SPLIT),
        }
    }

    /// Copy rounded to cents, for display only.
    pub fn rounded(&self) -> Self {
        Self {
            total: round2(self.total),
            admin_share: round2(self.admin_share),
            worker_share: round2(self.worker_share),
        }
    }
}

pub type TotalsByWorker = BTreeMap<Worker, WorkerTotals>;
