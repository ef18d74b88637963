//! Transaction display formatting
//!
//! Register views for the terminal.

use crate::models::{Transaction, TransactionType};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let (outflow, inflow) = match txn.transaction_type {
        TransactionType::Expense => (txn.amount.format_with_symbol(symbol), String::new()),
        TransactionType::Income => (String::new(), txn.amount.format_with_symbol(symbol)),
    };

    format!(
        "{:>5} {} {:24} {:12} {:>12} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d %H:%M"),
        truncate(&txn.title, 24),
        txn.category.key(),
        outflow,
        inflow
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5} {:16} {:24} {:12} {:>12} {:>12}\n",
        "Id", "Date", "Title", "Category", "Outflow", "Inflow"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Month:       {}\n", txn.budget_month.label()));

    output
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionId};
    use chrono::NaiveDate;

    fn groceries() -> Transaction {
        Transaction::new(
            TransactionId::new(3),
            "Groceries",
            Money::from_minor(5000),
            NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
            TransactionType::Expense,
            Category::Food,
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&groceries(), "$");
        assert!(formatted.contains("2025-01-15 18:30"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("food"));
        assert!(formatted.contains("$50.00"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], "$");
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&groceries(), "€");
        assert!(formatted.contains("Transaction: 3"));
        assert!(formatted.contains("€50.00"));
        assert!(formatted.contains("January 2025"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("Supermercado São João", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
