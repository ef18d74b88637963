//! Core data models for the household ledger
//!
//! Transactions, monthly budgets, the month anchors that key them, and the
//! derived monthly cards.

pub mod budget;
pub mod card;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;
pub mod window;

pub use budget::BudgetEntry;
pub use card::MonthBudgetCard;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use month::{MonthAnchor, MonthParseError};
pub use transaction::{
    parse_transaction_date, Category, Transaction, TransactionInputError, TransactionType,
};
pub use window::MonthWindow;
