//! Sheet labels of the detail column.
//!
//! The sheet is kept in Spanish (`SERVICIO`, `GANANCIA`, ...); English labels
//! are accepted too. Everything past this module works on `RowKind`.

use crate::models::row_kind::RowKind;

/// Header names of the detail column, canonical one first.
pub const DETAIL_KEYS: [&str; 2] = ["DETALLE", "DETAIL"];

pub fn is_detail_key(key: &str) -> bool {
    DETAIL_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key.trim()))
}

pub fn kind_from_label(label: &str) -> Option<RowKind> {
    match label.trim().to_uppercase().as_str() {
        "SERVICIO" | "SERVICE" => Some(RowKind::Service),
        "GANANCIA" | "EARNINGS" => Some(RowKind::Earnings),
        "CLIENTE" | "CLIENT" => Some(RowKind::ClientInfo),
        "HORA" | "TIME" => Some(RowKind::TimeInfo),
        "TOTAL" => Some(RowKind::Total),
        "%" | "SHARE" => Some(RowKind::Share),
        _ => None,
    }
}

/// Label written back to the sheet.
pub fn label_for_kind(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Service => "SERVICIO",
        RowKind::Earnings => "GANANCIA",
        RowKind::ClientInfo => "CLIENTE",
        RowKind::TimeInfo => "HORA",
        RowKind::Total => "TOTAL",
        RowKind::Share => "%",
    }
}
