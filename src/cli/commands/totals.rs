use crate::cli::commands::{login, open_ledger};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::access::{AccessView, filter_by_access};
use crate::core::table::{totals_table, worker_summary_table};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_amount;
use crate::utils::formatting::{bold, fmt_amount, round2};
use crate::utils::table::render;
use chrono::Utc;

/// Handle the `totals` command
///
/// The admin gets one line per worker plus the admin total; a worker gets its
/// own services with the 50/50 split.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = login(cli, cfg)?;
    let mut ledger = open_ledger(cfg)?;
    let rows = ledger.rows(Utc::now())?;

    match filter_by_access(rows, &session)? {
        AccessView::Admin(admin) => {
            let table = totals_table(&admin.summary.totals, admin.summary.admin_total);
            header(&table.title);
            print!("{}", render(&table, &cfg.placeholder));

            let total = round2(admin.summary.admin_total);
            println!(
                "\n{} {}",
                bold("Admin total:"),
                colorize_amount(total, &fmt_amount(total))
            );
        }
        AccessView::Worker(view) => {
            let entries: Vec<_> = view.entries().cloned().collect();
            let table = worker_summary_table(view.worker, &entries, &view.totals);
            header(&table.title);
            print!("{}", render(&table, &cfg.placeholder));

            let own = view.totals.rounded().worker_share;
            println!(
                "\n{} {}",
                bold("Your 50%:"),
                colorize_amount(own, &fmt_amount(own))
            );
        }
    }

    Ok(())
}
