//! Export module for the household ledger
//!
//! Provides data export in multiple formats:
//! - CSV: transactions and monthly cards (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_cards_csv, export_transactions_csv};
pub use json::{
    export_cards_json, export_full_json, export_transactions_json, ExportMetadata, FullExport,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_cards_yaml, export_full_yaml, export_transactions_yaml};

use crate::error::LedgerError;

pub(crate) fn export_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Export(e.to_string())
}
