//! CSV Export functionality
//!
//! Spreadsheet-friendly exports of transactions and monthly cards. Amounts
//! are written as decimal text in major units.

use serde::Serialize;
use std::io::Write;

use super::export_error;
use crate::error::LedgerResult;
use crate::models::{Money, MonthBudgetCard, Transaction};

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    id: u64,
    date: String,
    title: &'a str,
    #[serde(rename = "type")]
    transaction_type: &'static str,
    category: &'static str,
    amount: String,
    month: String,
}

#[derive(Serialize)]
struct CardRow<'a> {
    month: String,
    label: &'a str,
    used: String,
    budget: String,
    available: String,
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.value(),
                date: txn.date.format("%Y-%m-%d %H:%M").to_string(),
                title: &txn.title,
                transaction_type: txn.transaction_type.as_str(),
                category: txn.category.key(),
                amount: decimal(txn.amount),
                month: txn.budget_month.to_string(),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)
}

/// Export monthly cards to CSV; a month without a limit has an empty budget cell
pub fn export_cards_csv<W: Write>(cards: &[MonthBudgetCard], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for card in cards {
        csv_writer
            .serialize(CardRow {
                month: card.date.to_string(),
                label: &card.label,
                used: decimal(card.used_value),
                budget: card.budget_limit.map(decimal).unwrap_or_default(),
                available: decimal(card.available_value),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)
}
