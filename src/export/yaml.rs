//! YAML Export functionality
//!
//! Human-readable exports of the full ledger and of the monthly cards.

use std::io::Write;

use super::export_error;
use crate::error::LedgerResult;
use crate::export::json::FullExport;
use crate::models::{MonthBudgetCard, Transaction};
use crate::storage::Storage;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Household ledger export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)
}

/// Export monthly cards as a YAML sequence
pub fn export_cards_yaml<W: Write>(cards: &[MonthBudgetCard], writer: &mut W) -> LedgerResult<()> {
    serde_yaml::to_writer(writer, cards).map_err(export_error)
}

/// Export transactions as a YAML sequence
pub fn export_transactions_yaml<W: Write>(transactions: &[Transaction], writer: &mut W) -> LedgerResult<()> {
    serde_yaml::to_writer(writer, transactions).map_err(export_error)
}
