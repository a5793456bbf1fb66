mod common;
use common::small_rows;
use guruledger::core::append::AppendLogic;
use guruledger::core::grouping::entries_for;
use guruledger::core::totals::{SHARE_LABEL, calculate_worker_totals};
use guruledger::errors::ValidationField;
use guruledger::models::{cell::Cell, row::Row, row_kind::RowKind, worker::Worker};
use guruledger::source::sample::sample_rows;

#[test]
fn test_append_grows_total_and_entries() {
    let rows = small_rows();
    let updated = AppendLogic::apply(&rows, Worker::Hengi, "NUEVO SERVICIO", 100.0).unwrap();

    assert_eq!(calculate_worker_totals(&updated)[&Worker::Hengi].total, 180.0);
    let entries = entries_for(&updated, Worker::Hengi);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].service, "NUEVO SERVICIO");

    // the input is left untouched
    assert_eq!(rows, small_rows());
}

#[test]
fn test_append_inserts_after_last_paired_row() {
    let updated = AppendLogic::apply(&small_rows(), Worker::Hengi, "NUEVO", 100.0).unwrap();

    assert_eq!(updated.len(), 5);
    assert!(updated[2].is(RowKind::Earnings));
    assert_eq!(updated[2].get(Worker::Hengi), &Cell::Number(100.0));
    assert!(updated[3].is(RowKind::Service));
    assert_eq!(updated[3].get(Worker::Hengi), &Cell::from("NUEVO"));
    assert!(updated[4].is(RowKind::Total));
}

#[test]
fn test_append_into_tail_only_ledger() {
    let rows = vec![
        Row::new(RowKind::Total).with(Worker::Israel, 0.0),
        Row::new(RowKind::Share),
    ];
    let updated = AppendLogic::apply(&rows, Worker::Israel, "  MATRICULA  ", 75.5).unwrap();

    assert!(updated[0].is(RowKind::Earnings));
    assert!(updated[1].is(RowKind::Service));
    assert_eq!(updated[1].get(Worker::Israel), &Cell::from("MATRICULA"));
    assert_eq!(updated[2].get(Worker::Israel), &Cell::Number(75.5));
    assert_eq!(updated[3].get(Worker::Israel), &Cell::from(SHARE_LABEL));

    let entries = entries_for(&updated, Worker::Israel);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].earnings, 75.5);
}

#[test]
fn test_append_to_empty_ledger() {
    let updated = AppendLogic::apply(&[], Worker::Thaicar, "CV", 20.0).unwrap();
    assert_eq!(updated.len(), 2);
    assert_eq!(entries_for(&updated, Worker::Thaicar)[0].earnings, 20.0);
}

#[test]
fn test_append_leaves_other_workers_alone() {
    let rows = sample_rows();
    let before = calculate_worker_totals(&rows);
    let marleni_before = entries_for(&rows, Worker::Marleni);

    let updated = AppendLogic::apply(&rows, Worker::Thaicar, "COMPLETIVO 2", 250.0).unwrap();
    let after = calculate_worker_totals(&updated);

    assert_eq!(after[&Worker::Thaicar].total, before[&Worker::Thaicar].total + 250.0);
    for w in [Worker::Hengi, Worker::Marleni, Worker::Israel] {
        assert_eq!(after[&w], before[&w]);
    }
    assert_eq!(entries_for(&updated, Worker::Marleni), marleni_before);

    let thaicar = entries_for(&updated, Worker::Thaicar);
    assert_eq!(thaicar.len(), entries_for(&rows, Worker::Thaicar).len() + 1);

    // The new pair lands after the 50% EARNINGS row below TOTAL, and offset -2
    // reaches that row before the new one, so the line reads 350, not 250.
    let added = thaicar.last().unwrap();
    assert_eq!(added.service, "COMPLETIVO 2");
    assert_eq!(added.earnings, 350.0);
}

#[test]
fn test_append_without_total_row_adds_exact_amount() {
    let rows = vec![
        Row::new(RowKind::Earnings).with(Worker::Hengi, 10.0),
        Row::new(RowKind::Service).with(Worker::Hengi, "A"),
    ];
    let before = calculate_worker_totals(&rows)[&Worker::Hengi].total;

    let updated = AppendLogic::apply(&rows, Worker::Hengi, "B", 5.0).unwrap();

    assert_eq!(updated.len(), rows.len() + 2);
    assert_eq!(before, 10.0);
    assert_eq!(calculate_worker_totals(&updated)[&Worker::Hengi].total, 15.0);
    assert_eq!(entries_for(&updated, Worker::Hengi).len(), 2);
}

#[test]
fn test_repeated_appends_without_total_row() {
    let mut rows = vec![
        Row::new(RowKind::Earnings)
            .with(Worker::Hengi, 80.0)
            .with(Worker::Marleni, 200.0),
        Row::new(RowKind::Service)
            .with(Worker::Hengi, "IMPRESION")
            .with(Worker::Marleni, "DIGITACION"),
    ];

    for (worker, amount) in [
        (Worker::Marleni, 30.0),
        (Worker::Hengi, 12.5),
        (Worker::Marleni, 7.0),
    ] {
        let before = calculate_worker_totals(&rows);
        let count = entries_for(&rows, worker).len();

        rows = AppendLogic::apply(&rows, worker, "EXTRA", amount).unwrap();

        let after = calculate_worker_totals(&rows);
        assert_eq!(after[&worker].total, before[&worker].total + amount);
        assert_eq!(entries_for(&rows, worker).len(), count + 1);
        for other in Worker::ALL.into_iter().filter(|w| *w != worker) {
            assert_eq!(after[&other], before[&other]);
        }
    }

    let totals = calculate_worker_totals(&rows);
    assert_eq!(totals[&Worker::Hengi].total, 92.5);
    assert_eq!(totals[&Worker::Marleni].total, 237.0);
}

#[test]
fn test_append_rejects_empty_service() {
    let rows = small_rows();
    let err = AppendLogic::apply(&rows, Worker::Hengi, "", 50.0).unwrap_err();
    assert_eq!(err.field, ValidationField::Service);
    assert_eq!(err.message, "Please enter the service name");

    let err = AppendLogic::apply(&rows, Worker::Hengi, "   ", 50.0).unwrap_err();
    assert_eq!(err.field, ValidationField::Service);
    assert_eq!(rows, small_rows());
}

#[test]
fn test_append_rejects_bad_amounts() {
    for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = AppendLogic::apply(&small_rows(), Worker::Hengi, "X", amount).unwrap_err();
        assert_eq!(err.field, ValidationField::Earnings);
        assert_eq!(err.message, "Please enter a valid earnings amount");
    }
}

#[test]
fn test_parse_earnings() {
    assert_eq!(AppendLogic::parse_earnings(" 12.5 ").unwrap(), 12.5);
    assert!(AppendLogic::parse_earnings("abc").is_err());
    assert!(AppendLogic::parse_earnings("-1").is_err());
    assert!(AppendLogic::parse_earnings("").is_err());
}
