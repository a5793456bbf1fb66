use crate::cli::commands::{audit, login, open_ledger, resolve_focus};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::access::filter_by_access;
use crate::core::table::table_for;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Utc;

/// Handle the `export` command
///
/// Exports exactly the table `show` would print for the same login.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        worker,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let session = login(cli, cfg)?;
    let focus = resolve_focus(&session, worker)?;

    let mut ledger = open_ledger(cfg)?;
    let rows = ledger.rows(Utc::now())?;
    let table = table_for(&filter_by_access(rows, &session)?, focus);

    if ExportLogic::export(&table, *format, file, *force)? {
        audit(
            cli,
            cfg,
            "export",
            format.as_str(),
            &format!("{} rows to {}", table.rows.len(), file),
        );
    }

    Ok(())
}
