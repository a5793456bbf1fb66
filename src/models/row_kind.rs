use serde::Serialize;

/// Discriminator of a ledger row.
///
/// The sheet carries these as localized labels in its detail column; the
/// translation happens in `source::labels`, the engine only sees the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RowKind {
    Service,
    Earnings,
    ClientInfo,
    TimeInfo,
    Total,
    Share,
}

impl RowKind {
    /// Display name used by table views.
    pub fn name(&self) -> &'static str {
        match self {
            RowKind::Service => "SERVICE",
            RowKind::Earnings => "EARNINGS",
            RowKind::ClientInfo => "CLIENT",
            RowKind::TimeInfo => "TIME",
            RowKind::Total => "TOTAL",
            RowKind::Share => "SHARE",
        }
    }

    /// SERVICE and EARNINGS rows form the paired body of the ledger.
    pub fn is_pair_member(&self) -> bool {
        matches!(self, RowKind::Service | RowKind::Earnings)
    }

    /// TOTAL and SHARE rows form the tail of the ledger.
    pub fn is_tail(&self) -> bool {
        matches!(self, RowKind::Total | RowKind::Share)
    }
}
