//! Monthly budget repository for JSON storage
//!
//! Manages loading and saving budget entries to `budgets.json`, one entry per
//! month anchor.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetEntry, MonthAnchor};

use super::file_io::{read_json, write_json_atomic};
use super::BudgetStore;

/// On-disk layout of `budgets.json`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<BudgetEntry>,
}

/// Repository for monthly budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    entries: RwLock<BTreeMap<MonthAnchor, BudgetEntry>>,
}

fn lock_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Budget store lock poisoned: {}", e))
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load entries from disk; a later duplicate for the same month wins
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.clear();
        for entry in file_data.budgets {
            entries.insert(entry.month, entry);
        }
        Ok(())
    }

    /// Save entries to disk, ascending by month
    pub fn save(&self) -> LedgerResult<()> {
        let entries = self.entries.read().map_err(lock_error)?;
        let file_data = BudgetData {
            budgets: entries.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, month: MonthAnchor) -> LedgerResult<Option<BudgetEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(&month).cloned())
    }

    /// All entries, ascending by month
    pub fn get_all(&self) -> LedgerResult<Vec<BudgetEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.values().cloned().collect())
    }

    /// Insert or replace the entry for its month; returns the previous one
    pub fn upsert(&self, entry: BudgetEntry) -> LedgerResult<Option<BudgetEntry>> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        Ok(entries.insert(entry.month, entry))
    }

    pub fn remove(&self, month: MonthAnchor) -> LedgerResult<Option<BudgetEntry>> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        Ok(entries.remove(&month))
    }

    pub fn count(&self) -> LedgerResult<usize> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.len())
    }
}

impl BudgetStore for BudgetRepository {
    fn fetch_budgets(&self) -> LedgerResult<Vec<BudgetEntry>> {
        self.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        (temp_dir, repo)
    }

    fn month(y: i32, m: u32) -> MonthAnchor {
        MonthAnchor::new(y, m).unwrap()
    }

    #[test]
    fn test_one_entry_per_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo
            .upsert(BudgetEntry::new(month(2025, 1), Money::from_minor(500)))
            .unwrap()
            .is_none());
        let previous = repo
            .upsert(BudgetEntry::new(month(2025, 1), Money::from_minor(700)))
            .unwrap();

        assert_eq!(previous.unwrap().amount.minor_units(), 500);
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.get(month(2025, 1)).unwrap().unwrap().amount.minor_units(),
            700
        );
    }

    #[test]
    fn test_save_and_reload_sorted() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(BudgetEntry::new(month(2025, 3), Money::from_minor(300)))
            .unwrap();
        repo.upsert(BudgetEntry::new(month(2024, 11), Money::from_minor(100)))
            .unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();
        let months: Vec<_> = repo2
            .fetch_budgets()
            .unwrap()
            .into_iter()
            .map(|b| b.month)
            .collect();
        assert_eq!(months, vec![month(2024, 11), month(2025, 3)]);
    }

    #[test]
    fn test_duplicate_months_on_disk_last_wins() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("budgets.json"),
            r#"{"budgets":[{"month":"2025-01","amount":100},{"month":"2025-01","amount":900}]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.get(month(2025, 1)).unwrap().unwrap().amount.minor_units(),
            900
        );
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(BudgetEntry::new(month(2025, 1), Money::from_minor(500)))
            .unwrap();
        assert!(repo.remove(month(2025, 1)).unwrap().is_some());
        assert!(repo.remove(month(2025, 1)).unwrap().is_none());
    }
}
