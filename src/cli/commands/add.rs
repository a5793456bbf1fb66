use crate::cli::commands::{audit, login, open_ledger};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::append::AppendLogic;
use crate::core::grouping::entries_for;
use crate::core::table::worker_summary_table;
use crate::core::totals::calculate_worker_totals;
use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;
use crate::source::loader::save_rows;
use crate::ui::messages::{header, success};
use crate::utils::formatting::fmt_amount;
use crate::utils::table::render;
use chrono::Utc;
use std::path::Path;

/// Handle the `add` command
///
/// Only the admin may append. The change lives in this session's rows; it is
/// written out only when `--save` names a file.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Add {
        worker,
        service,
        earnings,
        save,
    } = &cli.command
    else {
        return Ok(());
    };

    let session = login(cli, cfg)?;
    if !session.is_admin() {
        return Err(AppError::AccessDenied(
            "only the admin can add services".to_string(),
        ));
    }

    let worker: Worker = worker.parse()?;
    let amount = AppendLogic::parse_earnings(earnings)?;

    let mut ledger = open_ledger(cfg)?;
    let rows = ledger.append(Utc::now(), worker, service, amount)?;

    success(format!(
        "Added '{}' for {} ({})",
        service.trim(),
        worker,
        fmt_amount(amount)
    ));

    let entries = entries_for(rows, worker);
    let totals = calculate_worker_totals(rows)
        .get(&worker)
        .copied()
        .unwrap_or_default();
    let table = worker_summary_table(worker, &entries, &totals);
    header(&table.title);
    print!("{}", render(&table, &cfg.placeholder));

    if let Some(file) = save {
        save_rows(Path::new(file), rows)?;
        success(format!("Ledger saved to {}", file));
        audit(cli, cfg, "save", file, &format!("{} rows", rows.len()));
    }

    audit(
        cli,
        cfg,
        "add",
        worker.key(),
        &format!("{} = {}", service.trim(), fmt_amount(amount)),
    );

    Ok(())
}
