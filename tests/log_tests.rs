mod common;
use common::temp_out;
use guruledger::core::log::{read_log, ttlog};
use std::path::Path;

#[test]
fn test_audit_log_appends_and_strips_colours() {
    let out = temp_out("audit_log", "log");
    let path = Path::new(&out);

    assert!(read_log(path).unwrap().is_empty());

    ttlog(path, "add", "HENGI", "LOGO = 45.00").unwrap();
    ttlog(path, "export", "csv", "\x1b[32m8 rows\x1b[0m to out.csv").unwrap();

    let entries = read_log(path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "add");
    assert_eq!(entries[0].target, "HENGI");
    assert_eq!(entries[1].message, "8 rows to out.csv");
}
