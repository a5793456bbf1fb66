use serde::Serialize;

/// One service a worker performed, reconstructed from the paired rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerLedgerEntry {
    pub service: String,
    pub earnings: f64,
    pub client: String,
    pub time: String,
}
