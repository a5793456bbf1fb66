mod common;
use common::small_rows;
use guruledger::core::grouping::{entries_for, group_by_worker};
use guruledger::core::logic::Core;
use guruledger::core::pairing::{resolve_detail, resolve_earnings, resolve_text};
use guruledger::core::totals::{calculate_admin_total, calculate_worker_totals};
use guruledger::models::{cell::Cell, row::Row, row_kind::RowKind, worker::Worker};
use guruledger::source::sample::sample_rows;

#[test]
fn test_small_ledger_groups_and_totals() {
    let rows = small_rows();

    let grouped = group_by_worker(&rows);
    let hengi = &grouped[&Worker::Hengi];
    assert_eq!(hengi.len(), 1);
    assert_eq!(hengi[0].service, "IMPRESION");
    assert_eq!(hengi[0].earnings, 80.0);
    assert_eq!(hengi[0].client, "");
    assert_eq!(hengi[0].time, "");

    let totals = calculate_worker_totals(&rows);
    let t = totals[&Worker::Hengi];
    assert_eq!(t.total, 80.0);
    assert_eq!(t.admin_share, 40.0);
    assert_eq!(t.worker_share, 40.0);
}

#[test]
fn test_grouping_has_every_worker_key() {
    let grouped = group_by_worker(&small_rows());
    assert_eq!(grouped.len(), Worker::ALL.len());
    assert!(grouped[&Worker::Marleni].is_empty());
    assert!(grouped[&Worker::Israel].is_empty());
    assert!(grouped[&Worker::Thaicar].is_empty());
}

#[test]
fn test_empty_ledger_yields_zero_everywhere() {
    let summary = Core::summarize(&[]);
    assert_eq!(summary.entries.len(), 4);
    assert!(summary.entries.values().all(Vec::is_empty));
    assert!(summary.totals.values().all(|t| t.total == 0.0));
    assert_eq!(summary.admin_total, 0.0);
}

#[test]
fn test_pairing_prefers_farthest_preceding_offset() {
    // Both services of HENGI in the sample pair with the first EARNINGS row.
    let rows = sample_rows();
    let hengi = entries_for(&rows, Worker::Hengi);
    assert_eq!(hengi.len(), 2);
    assert_eq!(hengi[0].service, "IMPRESION SEÑOR");
    assert_eq!(hengi[0].earnings, 80.0);
    assert_eq!(hengi[1].service, "TRADUCCION SEÑOR");
    assert_eq!(hengi[1].earnings, 80.0);
}

#[test]
fn test_first_tagged_row_wins_even_when_empty() {
    let rows = vec![
        Row::new(RowKind::Earnings).with(Worker::Hengi, 80.0),
        Row::new(RowKind::Service).with(Worker::Hengi, "A"),
        Row::new(RowKind::Earnings).with(Worker::Marleni, 50.0),
        Row::new(RowKind::Service).with(Worker::Marleni, "B"),
    ];

    // offset -3 from index 3 hits the first EARNINGS row, empty for MARLENI
    let found = resolve_detail(&rows, 3, Worker::Marleni, RowKind::Earnings);
    assert_eq!(found, Some(&Cell::Empty));
    assert_eq!(resolve_earnings(&rows, 3, Worker::Marleni), 0.0);
}

#[test]
fn test_pairing_reaches_details_after_the_service() {
    let rows = vec![
        Row::new(RowKind::Service).with(Worker::Israel, "X"),
        Row::new(RowKind::ClientInfo).with(Worker::Israel, "Ana"),
        Row::new(RowKind::TimeInfo).with(Worker::Israel, "10:00"),
        Row::new(RowKind::Earnings).with(Worker::Israel, 40.0),
    ];

    let entries = entries_for(&rows, Worker::Israel);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].client, "Ana");
    assert_eq!(entries[0].time, "10:00");
    assert_eq!(entries[0].earnings, 40.0);
}

#[test]
fn test_pairing_window_is_three_rows() {
    let rows = vec![
        Row::new(RowKind::Earnings).with(Worker::Hengi, 10.0),
        Row::new(RowKind::Service),
        Row::new(RowKind::Service),
        Row::new(RowKind::Service),
        Row::new(RowKind::Service).with(Worker::Hengi, "FAR"),
    ];

    assert_eq!(resolve_detail(&rows, 4, Worker::Hengi, RowKind::Earnings), None);
    assert_eq!(resolve_text(&rows, 4, Worker::Hengi, RowKind::ClientInfo), "");

    let entries = entries_for(&rows, Worker::Hengi);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].earnings, 0.0);
}

#[test]
fn test_non_numeric_earnings_count_as_zero() {
    let rows = vec![
        Row::new(RowKind::Earnings).with(Worker::Thaicar, "abc"),
        Row::new(RowKind::Service).with(Worker::Thaicar, "CV"),
    ];
    assert_eq!(entries_for(&rows, Worker::Thaicar)[0].earnings, 0.0);
    assert_eq!(calculate_worker_totals(&rows)[&Worker::Thaicar].total, 0.0);
}

#[test]
fn test_total_row_is_authoritative() {
    let rows = sample_rows();
    let totals = calculate_worker_totals(&rows);

    assert_eq!(totals[&Worker::Hengi].total, 600.0);
    assert_eq!(totals[&Worker::Marleni].total, 700.0);
    assert_eq!(totals[&Worker::Israel].total, 1950.0);
    assert_eq!(totals[&Worker::Thaicar].total, 700.0);
    assert_eq!(calculate_admin_total(&totals), 1975.0);

    // the re-summed entries disagree with the sheet, the sheet wins
    let summed: f64 = entries_for(&rows, Worker::Hengi)
        .iter()
        .map(|e| e.earnings)
        .sum();
    assert_eq!(summed, 160.0);
}

#[test]
fn test_totals_summed_without_total_row() {
    let rows = vec![
        Row::new(RowKind::Earnings)
            .with(Worker::Hengi, 80.0)
            .with(Worker::Marleni, 50.0),
        Row::new(RowKind::Service)
            .with(Worker::Hengi, "A")
            .with(Worker::Marleni, "B"),
    ];

    let totals = calculate_worker_totals(&rows);
    assert_eq!(totals[&Worker::Hengi].total, 80.0);
    assert_eq!(totals[&Worker::Marleni].total, 50.0);
    assert_eq!(totals[&Worker::Marleni].worker_share, 25.0);
    assert_eq!(calculate_admin_total(&totals), 65.0);
}

#[test]
fn test_split_is_half_and_half() {
    for t in calculate_worker_totals(&sample_rows()).values() {
        assert_eq!(t.admin_share + t.worker_share, t.total);
        assert_eq!(t.admin_share, t.worker_share);
    }
}

#[test]
fn test_sample_israel_entries() {
    let israel = entries_for(&sample_rows(), Worker::Israel);
    let services: Vec<&str> = israel.iter().map(|e| e.service.as_str()).collect();
    assert_eq!(
        services,
        [
            "IMPRESION DANILO",
            "MATRICULA EDITABLE",
            "INSTANCIA ING. JOHNNY",
            "SEÑOR BERNARDO",
            "SEÑOR JACINTO",
            "INSTALACION MICROSOFT WORD",
        ]
    );
    let earnings: Vec<f64> = israel.iter().map(|e| e.earnings).collect();
    assert_eq!(earnings, [100.0, 100.0, 500.0, 150.0, 1000.0, 200.0]);
}
