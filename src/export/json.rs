//! JSON Export functionality
//!
//! Exports the complete ledger to JSON with schema versioning, plus the
//! monthly cards and the transaction list on their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::export_error;
use crate::error::LedgerResult;
use crate::models::{BudgetEntry, MonthBudgetCard, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions, newest first
    pub transactions: Vec<Transaction>,

    /// All monthly budgets, ascending by month
    pub budgets: Vec<BudgetEntry>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,

    /// Earliest transaction date, if any
    pub earliest_transaction: Option<String>,

    /// Latest transaction date, if any
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot everything currently loaded in `storage`
    pub fn from_storage(storage: &Storage) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        })
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, pretty: bool) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    }
    .map_err(export_error)?;
    writeln!(writer).map_err(export_error)
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;
    write_json(writer, &export, pretty)
}

/// Export monthly cards as a JSON array
pub fn export_cards_json<W: Write>(cards: &[MonthBudgetCard], writer: &mut W) -> LedgerResult<()> {
    write_json(writer, cards, true)
}

/// Export transactions as a JSON array
pub fn export_transactions_json<W: Write>(transactions: &[Transaction], writer: &mut W) -> LedgerResult<()> {
    write_json(writer, transactions, true)
}
