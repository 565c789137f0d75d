use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for driverlog
/// CLI application to compute driver working-day summaries with SQLite
#[derive(Parser)]
#[command(
    name = "driverlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute per-driver working-day time summaries from delivery orders stored in SQLite",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import orders from a JSON file
    Import {
        #[arg(
            long,
            value_name = "FILE",
            help = "JSON file containing an array of order records"
        )]
        file: String,
    },

    /// Compute working-day summaries for an enterprise and date
    Process {
        #[arg(
            long,
            help = "Enterprise identifier (defaults to default_enterprise from the config)"
        )]
        enterprise: Option<String>,

        #[arg(long, help = "Day to process (YYYY-MM-DD, defaults to yesterday)")]
        date: Option<String>,
    },

    /// List computed working-day summaries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by driver identifier")]
        driver: Option<String>,

        #[arg(long = "details", help = "Show the per-order realized breakdown")]
        details: bool,
    },

    /// Mark an order as deleted
    Del {
        /// Order identifier
        order_id: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export working-day summary data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
