//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::{Local, NaiveDateTime, Timelike};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthAnchor, TransactionId};
use crate::notify::NotificationCenter;
use crate::services::{
    CreateTransactionInput, ReminderScheduler, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "50.00")
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        transaction_type: String,
        /// Category key (housing, food, transport, ...)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Date (YYYY-MM-DD or "YYYY-MM-DD HH:MM"), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Only this month (YYYY-MM, current, last, next)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction and its pending reminder
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Parse a month argument relative to the current month
pub(crate) fn parse_month_arg(s: &str) -> LedgerResult<MonthAnchor> {
    let current = MonthAnchor::of(&Local::now().date_naive());
    MonthAnchor::parse_relative(s, current)
        .map_err(|e| LedgerError::Validation(format!("Invalid month '{}': {}", s, e)))
}

/// Parse a decimal amount argument
pub(crate) fn parse_amount_arg(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '50.00' or '100'. Error: {}",
            s, e
        ))
    })
}

fn parse_id_arg(s: &str) -> LedgerResult<TransactionId> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid transaction id: '{}'", s)))
}

/// Drop seconds so `now` matches a date written as `%Y-%m-%d %H:%M`
fn to_minute(now: NaiveDateTime) -> NaiveDateTime {
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    center: &dyn NotificationCenter,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let scheduler = ReminderScheduler::new(center, settings);
    let service = TransactionService::new(storage, &scheduler);
    let now = to_minute(Local::now().naive_local());
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            transaction_type,
            category,
            date,
        } => {
            let input = CreateTransactionInput {
                title,
                amount: parse_amount_arg(&amount)?,
                date: date.unwrap_or_else(|| now.format("%Y-%m-%d %H:%M").to_string()),
                category,
                transaction_type,
            };

            let txn = service.create(input, now)?;
            println!("Recorded transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List { month, limit } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(month) = month {
                filter = filter.month(parse_month_arg(&month)?);
            }
            let transactions = service.list(filter)?;
            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Show { id } => {
            let id = parse_id_arg(&id)?;
            let txn = service
                .get(id)?
                .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id_arg(&id)?;
            service.delete(id)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}
