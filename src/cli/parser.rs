use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bstt-sync
#[derive(Parser)]
#[command(
    name = "bstt-sync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sync approved time-clock records from production into the local analytical store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the analytical store
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Pull time entries from production and load them into the store
    Sync {
        /// Sync all data for a specific year
        #[arg(long)]
        year: Option<i32>,

        /// Number of payroll weeks to sync, ending last Sunday
        #[arg(long, default_value_t = 1)]
        weeks: i64,

        /// Preview what would be synced without saving
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Replace existing data for the period
        #[arg(long)]
        replace: bool,

        /// CSV export of the approved-time procedure (overrides `export_file`)
        #[arg(long, value_name = "FILE")]
        input: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, statistics)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export stored time entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter on work-week end: YYYY, YYYY-MM, YYYY-MM-DD or start:end"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file")]
        force: bool,
    },
}
