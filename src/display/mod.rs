//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, monthly cards and reminders.

pub mod card;
pub mod reminder;
pub mod transaction;

pub use card::{format_card_table, format_usage_bar};
pub use reminder::format_reminder_list;
pub use transaction::{format_transaction_details, format_transaction_register};
