use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates `~/.guruledger/guruledger.conf` with the defaults (not in test
/// mode) and reports which ledger source will be read.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing guruledger…");

    let cfg = Config::init_all(cli.test)?;
    let source = cfg.ledger_source().describe();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("📒 Ledger      : {}", source);
    println!("👥 Users       : {}", cfg.users.len());

    audit(cli, &cfg, "init", "config", &format!("Configuration initialized, ledger {source}"));

    println!("🎉 guruledger initialization completed!");
    Ok(())
}
