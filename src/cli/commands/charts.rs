use crate::cli::commands::{login, open_ledger};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::access::filter_by_access;
use crate::core::charts::{ChartSet, charts_for};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::fmt_amount;
use chrono::Utc;

/// Handle the `charts` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let json = matches!(cli.command, Commands::Charts { json: true });

    let session = login(cli, cfg)?;
    let mut ledger = open_ledger(cfg)?;
    let rows = ledger.rows(Utc::now())?;
    let charts = charts_for(&filter_by_access(rows, &session)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&charts)?);
    } else {
        print_charts(&charts);
    }

    Ok(())
}

fn print_charts(charts: &ChartSet) {
    header("Services");
    if charts.bar.is_empty() {
        info("No services recorded.");
    }
    for point in &charts.bar {
        println!("{:<24} {:>4} {}", point.name, point.count, "█".repeat(point.count as usize));
    }

    header("Week");
    for point in &charts.series {
        let values: Vec<String> = charts
            .series_keys
            .iter()
            .map(|key| {
                let v = point.values.get(key).copied().unwrap_or_default();
                format!("{key}={}", fmt_amount(v))
            })
            .collect();
        println!("{:<10} {}", point.name, values.join("  "));
    }

    header("Share");
    for point in &charts.pie {
        println!("{:<24} {:>10}", point.name, fmt_amount(point.value));
    }
}
