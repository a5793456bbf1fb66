use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for guruledger
#[derive(Parser)]
#[command(
    name = "guruledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Earnings ledger: services, totals and 50/50 splits per worker",
    long_about = None
)]
pub struct Cli {
    /// Override the ledger source file (.json or .csv)
    #[arg(global = true, long = "source", value_name = "FILE")]
    pub source: Option<String>,

    /// Login name
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Login password
    #[arg(global = true, long = "password", short = 'p')]
    pub password: Option<String>,

    /// Run in test mode (no config file or audit log writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the ledger as the logged-in user is allowed to see it
    Show {
        #[arg(long, short = 'w', help = "Admin only: show one worker's summary")]
        worker: Option<String>,

        #[arg(long, short = 's', help = "Keep only rows containing this text")]
        search: Option<String>,

        #[arg(long, help = "Sort rows by this column label")]
        sort: Option<String>,

        #[arg(long, requires = "sort", help = "Sort descending (with --sort)")]
        desc: bool,
    },

    /// Show totals and the 50/50 split
    Totals,

    /// Print chart series for the dashboard
    Charts {
        #[arg(long, help = "Print the series as JSON")]
        json: bool,
    },

    /// Add a service and its earnings for a worker (admin only)
    Add {
        #[arg(long, short = 'w')]
        worker: String,

        #[arg(long, short = 's')]
        service: String,

        /// Earnings amount, must be a positive number
        #[arg(long, short = 'e', allow_hyphen_values = true)]
        earnings: String,

        #[arg(long, value_name = "FILE", help = "Write the updated rows to FILE (.json or .csv)")]
        save: Option<String>,
    },

    /// Export the visible table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'w', help = "Admin only: export one worker's summary")]
        worker: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the internal audit log")]
        print: bool,
    },
}
