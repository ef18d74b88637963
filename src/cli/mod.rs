//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod overview;
pub mod reminders;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs};
pub use overview::{handle_overview_command, OverviewArgs};
pub use reminders::{handle_reminder_command, ReminderCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
