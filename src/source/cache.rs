use crate::errors::AppResult;
use crate::models::row::Row;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

/// Default freshness window of a loaded sheet.
pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// Last loaded rows plus when they were loaded.
#[derive(Debug)]
pub struct SheetCache {
    rows: Option<Vec<Row>>,
    loaded_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl Default for SheetCache {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TTL_MINUTES))
    }
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            rows: None,
            loaded_at: None,
            ttl,
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match (&self.rows, self.loaded_at) {
            (Some(_), Some(at)) => now - at < self.ttl,
            _ => false,
        }
    }

    /// Cached rows while fresh, otherwise the result of `load`.
    ///
    /// A failed reload leaves the previous rows and timestamp in place.
    pub fn get_or_load<F>(&mut self, now: DateTime<Utc>, load: F) -> AppResult<&[Row]>
    where
        F: FnOnce() -> AppResult<Vec<Row>>,
    {
        if !self.is_fresh(now) {
            match load() {
                Ok(rows) => {
                    debug!(rows = rows.len(), "ledger cache refreshed");
                    self.rows = Some(rows);
                    self.loaded_at = Some(now);
                }
                Err(e) => {
                    warn!(error = %e, "ledger reload failed");
                    return Err(e);
                }
            }
        }

        Ok(self.cached())
    }

    /// Whatever is held right now, fresh or not.
    pub fn cached(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or_default()
    }

    /// Replace the cached rows after an in-memory change. The load time is
    /// kept: freshness tracks the source, not local edits.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = Some(rows);
    }
}
