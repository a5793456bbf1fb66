#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use guruledger::models::{row::Row, row_kind::RowKind, worker::Worker};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gl() -> Command {
    cargo_bin_cmd!("guruledger")
}

/// `guruledger --test --source <source> -u <user> -p <password>`
pub fn gl_as(source: &str, user: &str, password: &str) -> Command {
    let mut cmd = gl();
    cmd.args(["--test", "--source", source, "-u", user, "-p", password]);
    cmd
}

pub fn gl_admin(source: &str) -> Command {
    gl_as(source, "admin", "password123")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guruledger_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh ledger source file and return its path
pub fn write_source(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guruledger_src.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write ledger source");
    p
}

/// A one-service ledger: HENGI earned 80 for "IMPRESION".
pub const SMALL_LEDGER_JSON: &str = r#"[
  {"DETALLE": "GANANCIA", "HENGI": 80, "MARLENI": "", "ISRAEL": "", "THAICAR": ""},
  {"DETALLE": "SERVICIO", "HENGI": "IMPRESION", "MARLENI": "", "ISRAEL": "", "THAICAR": ""},
  {"DETALLE": "TOTAL", "HENGI": 80, "MARLENI": 0, "ISRAEL": 0, "THAICAR": 0},
  {"DETALLE": "%", "HENGI": "50.%", "MARLENI": "50.%", "ISRAEL": "50.%", "THAICAR": "50.%"}
]"#;

pub const SMALL_LEDGER_CSV: &str = "DETALLE,HENGI,MARLENI,ISRAEL,THAICAR
GANANCIA,80,,,
SERVICIO,IMPRESION,,,
CLIENTE,ANA,,,
TOTAL,80,0,0,0
%,50.%,50.%,50.%,50.%
";

/// `[EARNINGS{HENGI:80}, SERVICE{HENGI:"IMPRESION"}, TOTAL{HENGI:80}]`
pub fn small_rows() -> Vec<Row> {
    vec![
        Row::new(RowKind::Earnings).with(Worker::Hengi, 80.0),
        Row::new(RowKind::Service).with(Worker::Hengi, "IMPRESION"),
        Row::new(RowKind::Total).with(Worker::Hengi, 80.0),
    ]
}
