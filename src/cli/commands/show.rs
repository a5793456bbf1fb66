use crate::cli::commands::{login, open_ledger, resolve_focus};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::access::{AccessView, filter_by_access};
use crate::core::search::{SortDirection, filter_table, sort_table};
use crate::core::table::{table_for, totals_table};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::render;
use chrono::Utc;

/// Handle the `show` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Show {
        worker,
        search,
        sort,
        desc,
    } = &cli.command
    else {
        return Ok(());
    };

    let session = login(cli, cfg)?;
    let focus = resolve_focus(&session, worker)?;

    let mut ledger = open_ledger(cfg)?;
    let rows = ledger.rows(Utc::now())?;
    let view = filter_by_access(rows, &session)?;

    let mut table = table_for(&view, focus);
    if let Some(term) = search {
        table = filter_table(&table, term);
    }
    if let Some(column) = sort {
        let direction = if *desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        table = sort_table(&table, column, direction)?;
    }

    header(&table.title);
    if table.rows.is_empty() {
        info("No rows to show.");
        return Ok(());
    }

    print!("{}", render(&table, &cfg.placeholder));

    // the plain admin grid is followed by the totals it adds up to
    if let (AccessView::Admin(admin), None) = (&view, focus) {
        let totals = totals_table(&admin.summary.totals, admin.summary.admin_total);
        println!();
        header(&totals.title);
        print!("{}", render(&totals, &cfg.placeholder));
    }
    Ok(())
}
