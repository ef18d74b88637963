//! Budget CLI commands
//!
//! Implements CLI commands for monthly budget limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::transaction::{parse_amount_arg, parse_month_arg};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a month
    Set {
        /// Month (YYYY-MM, current, last, next)
        month: String,
        /// Limit (e.g., "500.00")
        amount: String,
    },
    /// List all monthly limits
    List,
    /// Remove the limit for a month
    Remove {
        /// Month (YYYY-MM, current, last, next)
        month: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { month, amount } => {
            let month = parse_month_arg(&month)?;
            let entry = service.set(month, parse_amount_arg(&amount)?)?;
            println!(
                "Budget for {} set to {}",
                entry.month.label(),
                entry.amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            if budgets.is_empty() {
                println!("No budgets set.");
                println!("Set one with: household budget set <YYYY-MM> <amount>");
                return Ok(());
            }

            println!("{:16} {:>12}", "Month", "Budget");
            println!("{}", "-".repeat(29));
            for entry in budgets {
                println!(
                    "{:16} {:>12}",
                    entry.month.label(),
                    entry.amount.format_with_symbol(symbol)
                );
            }
        }

        BudgetCommands::Remove { month } => {
            let month = parse_month_arg(&month)?;
            service.remove(month)?;
            println!("Removed budget for {}", month.label());
        }
    }

    Ok(())
}
