use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_cli::cli::{handle_add_command, handle_report_command, AddArgs};
use ledger_cli::config::{paths::LedgerPaths, settings::Settings, StoreConfig};
use ledger_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "Records income and expense transactions to a CSV file and \
                  summarizes them over a date range: total income, total \
                  expense and net savings."
)]
struct Cli {
    /// Show informational log output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger file and settings
    Init,

    /// Add a new transaction
    Add(AddArgs),

    /// View transactions and totals within a date range
    #[command(alias = "view")]
    Report {
        /// Start date (DD-MM-YYYY)
        start: String,
        /// End date (DD-MM-YYYY), inclusive
        end: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(StoreConfig::from_settings(&paths, &settings));

    match cli.command {
        Some(Commands::Init) => {
            let store = ledger_cli::storage::initialize_storage(&paths, &settings)?;
            println!("Ledger ready at: {}", store.config().path().display());
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&store, &settings, args)?;
        }
        Some(Commands::Report { start, end }) => {
            handle_report_command(&store, &settings, &start, &end)?;
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Ledger file:      {}", store.config().path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("ledger - personal income and expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
