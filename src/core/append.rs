use crate::core::totals::SHARE_LABEL;
use crate::errors::{ValidationFailure, ValidationField};
use crate::models::{cell::Cell, row::Row, row_kind::RowKind, worker::Worker};
use tracing::debug;

/// Business logic for adding a service and its earnings to the ledger.
pub struct AppendLogic;

impl AppendLogic {
    /// Check the user input before touching the ledger.
    pub fn validate(service: &str, earnings: f64) -> Result<(), ValidationFailure> {
        if service.trim().is_empty() {
            return Err(ValidationFailure::new(
                ValidationField::Service,
                "Please enter the service name",
            ));
        }
        if !earnings.is_finite() || earnings <= 0.0 {
            return Err(ValidationFailure::new(
                ValidationField::Earnings,
                "Please enter a valid earnings amount",
            ));
        }
        Ok(())
    }

    /// Parse an earnings amount typed by the user.
    pub fn parse_earnings(raw: &str) -> Result<f64, ValidationFailure> {
        let value = raw.trim().parse::<f64>().map_err(|_| {
            ValidationFailure::new(
                ValidationField::Earnings,
                "Please enter a valid earnings amount",
            )
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationFailure::new(
                ValidationField::Earnings,
                "Please enter a valid earnings amount",
            ));
        }
        Ok(value)
    }

    /// Where a new EARNINGS/SERVICE pair goes: right after the last paired
    /// row, else in front of the TOTAL/SHARE tail, else at the end.
    pub fn insertion_index(rows: &[Row]) -> usize {
        if let Some(last) = rows
            .iter()
            .rposition(|r| r.kind.is_some_and(|k| k.is_pair_member()))
        {
            return last + 1;
        }

        rows.iter()
            .position(|r| r.kind.is_some_and(|k| k.is_tail()))
            .unwrap_or(rows.len())
    }

    /// Return a copy of `rows` with the new service appended for `worker`.
    ///
    /// The TOTAL row (if any) grows by `earnings` for that worker and the SHARE
    /// row is reset to the fixed split label. Other workers' cells are left as
    /// they were. On invalid input nothing is copied and the failure is returned.
    pub fn apply(
        rows: &[Row],
        worker: Worker,
        service: &str,
        earnings: f64,
    ) -> Result<Vec<Row>, ValidationFailure> {
        Self::validate(service, earnings)?;

        let mut updated = rows.to_vec();
        let at = Self::insertion_index(&updated);

        let earnings_row = Row::new(RowKind::Earnings).with(worker, earnings);
        let service_row = Row::new(RowKind::Service).with(worker, service.trim());
        updated.splice(at..at, [earnings_row, service_row]);

        if let Some(total) = updated.iter_mut().find(|r| r.is(RowKind::Total)) {
            let current = total.get(worker).as_number().unwrap_or(0.0);
            total.set(worker, Cell::Number(current + earnings));
        }
        if let Some(share) = updated.iter_mut().find(|r| r.is(RowKind::Share)) {
            share.set(worker, SHARE_LABEL);
        }

        debug!(
            worker = %worker,
            service = service.trim(),
            earnings,
            index = at,
            "appended service to ledger"
        );

        Ok(updated)
    }
}
