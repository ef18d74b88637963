//! Storage layer for the household ledger
//!
//! JSON file repositories with atomic writes. The overview engine and the
//! deletion flow only see the two store traits below, so any other backend
//! can be plugged in behind them.

pub mod budget;
pub mod file_io;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{BudgetEntry, Transaction, TransactionId};

/// Read/delete access to recorded transactions
pub trait TransactionStore {
    /// Every known transaction, unfiltered
    fn fetch_transactions(&self) -> LedgerResult<Vec<Transaction>>;

    /// Remove one transaction durably
    ///
    /// Fails with `LedgerError::NotFound` for an unknown id. On any error the
    /// record must still be present.
    fn delete(&self, id: TransactionId) -> LedgerResult<()>;
}

/// Read access to monthly budget entries
pub trait BudgetStore {
    fn fetch_budgets(&self) -> LedgerResult<Vec<BudgetEntry>>;
}

/// Coordinator owning every repository
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create the repositories, making sure the data directory exists
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> LedgerResult<()> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Write empty store files for any that are missing
    pub fn initialize(&self) -> LedgerResult<()> {
        if !self.paths.transactions_file().exists() {
            self.transactions.save()?;
        }
        if !self.paths.budgets_file().exists() {
            self.budgets.save()?;
        }
        Ok(())
    }

    /// Whether `init` has written the settings and store files
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_initialize_writes_store_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();

        storage.initialize().unwrap();

        assert!(paths.transactions_file().exists());
        assert!(paths.budgets_file().exists());
        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
