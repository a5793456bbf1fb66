//! One handler per subcommand, plus the login/ledger plumbing they share.

pub mod add;
pub mod charts;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod show;
pub mod totals;

use crate::auth::authenticate;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::{session::Session, worker::Worker};
use crate::source::LedgerSession;
use crate::ui::messages::warning;
use std::path::Path;

/// Authenticate the `--user`/`--password` pair against the configured users.
pub(crate) fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    match (&cli.user, &cli.password) {
        (Some(user), Some(password)) => authenticate(&cfg.users, user, password),
        _ => Err(AppError::AuthRequired),
    }
}

pub(crate) fn open_ledger(cfg: &Config) -> AppResult<LedgerSession> {
    Ok(LedgerSession::new(cfg.ledger_source(), cfg.cache_ttl()?))
}

/// `--worker` narrows an admin view to one worker; workers cannot use it.
pub(crate) fn resolve_focus(session: &Session, worker: &Option<String>) -> AppResult<Option<Worker>> {
    match worker {
        None => Ok(None),
        Some(_) if !session.is_admin() => Err(AppError::AccessDenied(
            "--worker is only available to the admin".to_string(),
        )),
        Some(key) => key.parse::<Worker>().map(Some),
    }
}

/// Record an audit line. Never fails the command; skipped in test mode.
pub(crate) fn audit(cli: &Cli, cfg: &Config, operation: &str, target: &str, message: &str) {
    if cli.test {
        return;
    }
    if let Err(e) = ttlog(Path::new(&cfg.audit_log), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
