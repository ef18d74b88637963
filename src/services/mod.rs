//! Service layer for the household ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, the monthly overview, and keeping reminders in step
//! with recorded transactions.

pub mod budget;
pub mod overview;
pub mod reminders;
pub mod transaction;

pub use budget::BudgetService;
pub use overview::{compute_monthly_cards, sum_by_key, OverviewService};
pub use reminders::{ReminderScheduler, ScheduleOutcome, ScheduleSummary};
pub use transaction::{
    delete_transaction, CreateTransactionInput, TransactionFilter, TransactionService,
};
