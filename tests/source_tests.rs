mod common;
use chrono::{Duration, TimeZone, Utc};
use common::{SMALL_LEDGER_CSV, SMALL_LEDGER_JSON, temp_out, write_source};
use guruledger::core::grouping::entries_for;
use guruledger::core::totals::calculate_worker_totals;
use guruledger::errors::{AppError, AppResult};
use guruledger::models::{cell::Cell, row::Row, row_kind::RowKind, worker::Worker};
use guruledger::source::cache::SheetCache;
use guruledger::source::labels::kind_from_label;
use guruledger::source::loader::{load_rows, parse_csv, parse_json, save_rows};
use guruledger::source::sample::sample_rows;
use guruledger::source::{LedgerSession, LedgerSource};
use std::cell::Cell as Counter;
use std::path::Path;

#[test]
fn test_labels_accept_both_languages() {
    assert_eq!(kind_from_label("SERVICIO"), Some(RowKind::Service));
    assert_eq!(kind_from_label("service"), Some(RowKind::Service));
    assert_eq!(kind_from_label(" GANANCIA "), Some(RowKind::Earnings));
    assert_eq!(kind_from_label("CLIENTE"), Some(RowKind::ClientInfo));
    assert_eq!(kind_from_label("HORA"), Some(RowKind::TimeInfo));
    assert_eq!(kind_from_label("%"), Some(RowKind::Share));
    assert_eq!(kind_from_label("NOTA"), None);
}

#[test]
fn test_parse_json_sheet() {
    let rows = parse_json(SMALL_LEDGER_JSON).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].is(RowKind::Earnings));
    assert_eq!(rows[0].get(Worker::Hengi), &Cell::Number(80.0));
    assert!(rows[0].get(Worker::Marleni).is_empty());
    assert!(rows[3].is(RowKind::Share));

    let entries = entries_for(&rows, Worker::Hengi);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].earnings, 80.0);
}

#[test]
fn test_parse_json_ignores_unknown_columns_and_labels() {
    let rows = parse_json(
        r#"[{"DETALLE": "NOTA", "HENGI": "x", "EXTRA": 1}, {"HENGI": 5}]"#,
    )
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, None);
    assert_eq!(rows[1], Row::untagged().with(Worker::Hengi, 5.0));
}

#[test]
fn test_parse_csv_sheet() {
    let rows = parse_csv(SMALL_LEDGER_CSV.as_bytes()).unwrap();
    assert_eq!(rows.len(), 5);

    let entries = entries_for(&rows, Worker::Hengi);
    assert_eq!(entries[0].service, "IMPRESION");
    assert_eq!(entries[0].client, "ANA");
    assert_eq!(entries[0].earnings, 80.0);
    assert_eq!(calculate_worker_totals(&rows)[&Worker::Hengi].total, 80.0);
}

#[test]
fn test_load_rows_errors() {
    let err = load_rows(Path::new("ledger.xls")).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedSource(_)));

    let missing = temp_out("missing_source", "json");
    let err = load_rows(Path::new(&missing)).unwrap_err();
    assert!(err.is_retryable());

    let broken = write_source("broken_source", "json", "{ not json");
    let err = load_rows(Path::new(&broken)).unwrap_err();
    assert!(matches!(err, AppError::SourceUnavailable(_)));
}

#[test]
fn test_save_and_reload_sample() {
    for ext in ["json", "csv"] {
        let out = temp_out("save_sample", ext);
        save_rows(Path::new(&out), &sample_rows()).unwrap();

        let reloaded = load_rows(Path::new(&out)).unwrap();
        assert_eq!(reloaded.len(), sample_rows().len());
        assert_eq!(
            calculate_worker_totals(&reloaded),
            calculate_worker_totals(&sample_rows())
        );
        assert_eq!(
            entries_for(&reloaded, Worker::Israel),
            entries_for(&sample_rows(), Worker::Israel)
        );
    }
}

#[test]
fn test_cache_serves_fresh_rows() {
    let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let loads = Counter::new(0);
    let load = || -> AppResult<Vec<Row>> {
        loads.set(loads.get() + 1);
        Ok(sample_rows())
    };

    let mut cache = SheetCache::default();
    assert!(!cache.is_fresh(t0));
    cache.get_or_load(t0, load).unwrap();
    cache.get_or_load(t0 + Duration::minutes(4), load).unwrap();
    assert_eq!(loads.get(), 1);

    cache.get_or_load(t0 + Duration::minutes(5), load).unwrap();
    assert_eq!(loads.get(), 2);
    assert_eq!(cache.cached().len(), sample_rows().len());
}

#[test]
fn test_cache_keeps_rows_when_reload_fails() {
    let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let mut cache = SheetCache::new(Duration::minutes(5));
    cache.get_or_load(t0, || Ok(sample_rows())).unwrap();

    let err = cache
        .get_or_load(t0 + Duration::minutes(10), || {
            Err(AppError::SourceUnavailable("offline".to_string()))
        })
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(cache.cached().len(), sample_rows().len());
}

#[test]
fn test_session_append_survives_zero_ttl() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let mut session = LedgerSession::new(LedgerSource::Sample, Duration::zero());

    let rows = session.append(now, Worker::Hengi, "LOGO", 45.0).unwrap();
    assert_eq!(rows.len(), sample_rows().len() + 2);
    assert_eq!(calculate_worker_totals(rows)[&Worker::Hengi].total, 645.0);
}

#[test]
fn test_session_append_validation_keeps_rows() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let mut session = LedgerSession::new(LedgerSource::Sample, Duration::minutes(5));

    let err = session.append(now, Worker::Hengi, "", 45.0).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(session.rows(now).unwrap(), sample_rows().as_slice());
}

#[test]
fn test_leading_zero_fields_stay_text() {
    assert_eq!(Cell::parse("0800"), Cell::from("0800"));
    assert_eq!(Cell::parse(" 007 "), Cell::from(" 007 "));
    assert_eq!(Cell::parse("0"), Cell::Number(0.0));
    assert_eq!(Cell::parse("0.5"), Cell::Number(0.5));
    assert_eq!(Cell::parse("150"), Cell::Number(150.0));

    let csv = "DETALLE,HENGI,MARLENI,ISRAEL,THAICAR
GANANCIA,80,,,
SERVICIO,IMPRESION,,,
HORA,0800,,,
";
    let rows = parse_csv(csv.as_bytes()).unwrap();
    assert_eq!(entries_for(&rows, Worker::Hengi)[0].time, "0800");

    let out = temp_out("leading_zero_time", "csv");
    save_rows(Path::new(&out), &rows).unwrap();
    let reloaded = load_rows(Path::new(&out)).unwrap();
    assert_eq!(reloaded, rows);
}
