//! Budget service
//!
//! Monthly spending limits, one per month.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetEntry, Money, MonthAnchor};
use crate::storage::Storage;

/// Service for monthly budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the limit for a month, replacing any existing one
    pub fn set(&self, month: MonthAnchor, amount: Money) -> LedgerResult<BudgetEntry> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Budget for {} must not be negative: {}",
                month, amount
            )));
        }

        let entry = match self.storage.budgets.get(month)? {
            Some(mut existing) => {
                existing.set_amount(amount);
                existing
            }
            None => BudgetEntry::new(month, amount),
        };

        let previous = self.storage.budgets.upsert(entry.clone())?;
        if let Err(e) = self.storage.budgets.save() {
            match previous {
                Some(previous) => self.storage.budgets.upsert(previous)?,
                None => self.storage.budgets.remove(month)?,
            };
            return Err(e);
        }

        info!(month = %month, amount = amount.minor_units(), "set budget");
        Ok(entry)
    }

    pub fn get(&self, month: MonthAnchor) -> LedgerResult<Option<BudgetEntry>> {
        self.storage.budgets.get(month)
    }

    /// All budgets, ascending by month
    pub fn list(&self) -> LedgerResult<Vec<BudgetEntry>> {
        self.storage.budgets.get_all()
    }

    /// Remove the limit for a month
    pub fn remove(&self, month: MonthAnchor) -> LedgerResult<BudgetEntry> {
        let removed = self
            .storage
            .budgets
            .remove(month)?
            .ok_or_else(|| LedgerError::budget_not_found(month.to_string()))?;

        if let Err(e) = self.storage.budgets.save() {
            self.storage.budgets.upsert(removed)?;
            return Err(e);
        }

        info!(month = %month, "removed budget");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn month(y: i32, m: u32) -> MonthAnchor {
        MonthAnchor::new(y, m).unwrap()
    }

    #[test]
    fn test_set_and_overwrite() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(month(2025, 1), Money::from_minor(50_000)).unwrap();
        service.set(month(2025, 1), Money::from_minor(65_000)).unwrap();

        let budgets = service.list().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, Money::from_minor(65_000));
    }

    #[test]
    fn test_set_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(month(2025, 2), Money::from_minor(100)).unwrap();
        storage.budgets.load().unwrap();

        assert_eq!(
            service.get(month(2025, 2)).unwrap().unwrap().amount,
            Money::from_minor(100)
        );
    }

    #[test]
    fn test_negative_budget_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .set(month(2025, 1), Money::from_minor(-1))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.get(month(2025, 1)).unwrap().is_none());
    }

    #[test]
    fn test_zero_budget_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.set(month(2025, 1), Money::zero()).is_ok());
    }

    #[test]
    fn test_list_ascending() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(month(2025, 6), Money::from_minor(1)).unwrap();
        service.set(month(2024, 12), Money::from_minor(2)).unwrap();
        service.set(month(2025, 1), Money::from_minor(3)).unwrap();

        let months: Vec<_> = service.list().unwrap().iter().map(|b| b.month).collect();
        assert_eq!(months, vec![month(2024, 12), month(2025, 1), month(2025, 6)]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(month(2025, 1), Money::from_minor(10)).unwrap();
        let removed = service.remove(month(2025, 1)).unwrap();
        assert_eq!(removed.amount, Money::from_minor(10));

        let err = service.remove(month(2025, 1)).unwrap_err();
        assert!(err.is_not_found());
    }
}
