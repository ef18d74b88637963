use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use household_ledger::cli::{
    handle_budget_command, handle_export_command, handle_overview_command,
    handle_reminder_command, handle_transaction_command,
};
use household_ledger::config::logging::init_tracing;
use household_ledger::config::paths::DATA_DIR_ENV;
use household_ledger::config::{paths::LedgerPaths, settings::Settings};
use household_ledger::notify::FileNotificationCenter;
use household_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "household",
    version,
    about = "Household ledger with monthly budgets and payment reminders",
    long_about = "Records household income and expenses, tracks a spending limit per \
                  month, projects the available balance month by month, and reminds \
                  you of upcoming payments on the day they are due."
)]
struct Cli {
    /// Directory holding settings and data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(household_ledger::cli::TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(household_ledger::cli::BudgetCommands),

    /// Month-by-month overview with carried balance
    Overview(household_ledger::cli::OverviewArgs),

    /// Payment reminder commands
    #[command(subcommand)]
    Reminders(household_ledger::cli::ReminderCommands),

    /// Export data
    Export(household_ledger::cli::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing household ledger at: {}", paths.base_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record a transaction with: household transaction add <title> <amount>");
        }
        Some(Commands::Config) => {
            println!("Household Ledger Configuration");
            println!("==============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Reminders file:  {}", paths.reminders_file().display());
            println!(
                "Initialized:     {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!(
                "  Overview window:       {}..={} ({} months)",
                settings.window.start,
                settings.window.end,
                settings.window.month_count()
            );
            println!(
                "  Reminder time:         {:02}:{:02}",
                settings.reminder_hour, settings.reminder_minute
            );
            println!("  Notifications enabled: {}", settings.notifications_enabled);
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Log level:             {}", settings.log_level);
        }
        Some(Commands::Transaction(cmd)) => {
            // Reminder failures never block the transaction itself
            let center = FileNotificationCenter::open_or_unavailable(
                paths.reminders_file(),
                settings.notifications_enabled,
            );
            handle_transaction_command(&storage, &settings, &center, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Overview(args)) => {
            handle_overview_command(&storage, &settings, args)?;
        }
        Some(Commands::Reminders(cmd)) => {
            let center =
                FileNotificationCenter::open(paths.reminders_file(), settings.notifications_enabled)?;
            handle_reminder_command(&storage, &settings, &center, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        None => {
            println!("household - household ledger with monthly budgets");
            println!();
            println!("Run 'household --help' for usage information.");
        }
    }

    Ok(())
}
