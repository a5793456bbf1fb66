//! Where the ledger rows come from: a sheet file or the built-in sample.

pub mod cache;
pub mod labels;
pub mod loader;
pub mod sample;

use crate::core::append::AppendLogic;
use crate::errors::AppResult;
use crate::models::{row::Row, worker::Worker};
use cache::SheetCache;
use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerSource {
    Sample,
    File(PathBuf),
}

impl LedgerSource {
    pub fn load(&self) -> AppResult<Vec<Row>> {
        match self {
            LedgerSource::Sample => Ok(sample::sample_rows()),
            LedgerSource::File(path) => loader::load_rows(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LedgerSource::Sample => "built-in sample data".to_string(),
            LedgerSource::File(path) => path.display().to_string(),
        }
    }
}

/// Single owner of the in-memory ledger for one session.
///
/// Appends take `&mut self`, so concurrent writers have to go through
/// whoever owns the session.
#[derive(Debug)]
pub struct LedgerSession {
    source: LedgerSource,
    cache: SheetCache,
}

impl LedgerSession {
    pub fn new(source: LedgerSource, ttl: Duration) -> Self {
        Self {
            source,
            cache: SheetCache::new(ttl),
        }
    }

    pub fn rows(&mut self, now: DateTime<Utc>) -> AppResult<&[Row]> {
        let source = &self.source;
        self.cache.get_or_load(now, || source.load())
    }

    /// Append a service to the session's rows and return the updated rows.
    pub fn append(
        &mut self,
        now: DateTime<Utc>,
        worker: Worker,
        service: &str,
        earnings: f64,
    ) -> AppResult<&[Row]> {
        let updated = AppendLogic::apply(self.rows(now)?, worker, service, earnings)?;
        self.cache.replace(updated);
        Ok(self.cache.cached())
    }
}
