//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to `transactions.json`. Ids are
//! handed out from a persisted counter so a deleted id is never reused.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthAnchor, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::TransactionStore;

/// On-disk layout of `transactions.json`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Debug, Default)]
struct TransactionState {
    records: BTreeMap<TransactionId, Transaction>,
    next_id: TransactionId,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    state: RwLock<TransactionState>,
}

fn lock_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(format!("Transaction store lock poisoned: {}", e))
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(TransactionState {
                records: BTreeMap::new(),
                next_id: TransactionId::new(1),
            }),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut state = self.state.write().map_err(lock_error)?;
        state.records = file_data
            .transactions
            .into_iter()
            .map(|txn| (txn.id, txn))
            .collect();

        // Never hand out an id at or below one already on disk
        let after_max = state
            .records
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(TransactionId::new(1));
        state.next_id = after_max.max(TransactionId::new(file_data.next_id.max(1)));

        debug!(count = state.records.len(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> LedgerResult<()> {
        let state = self.state.read().map_err(lock_error)?;
        let file_data = TransactionData {
            next_id: state.next_id.value(),
            transactions: state.records.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.get(&id).cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut transactions: Vec<_> = state.records.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(transactions)
    }

    /// Transactions attributed to one month, newest first
    pub fn get_by_month(&self, month: MonthAnchor) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = self.get_all()?;
        transactions.retain(|t| t.budget_month == month);
        Ok(transactions)
    }

    /// Insert a new transaction under the next free id (in memory only)
    pub fn insert_new(&self, mut txn: Transaction) -> LedgerResult<Transaction> {
        let mut state = self.state.write().map_err(lock_error)?;
        txn.id = state.next_id;
        state.next_id = state.next_id.next();
        state.records.insert(txn.id, txn.clone());
        Ok(txn)
    }

    /// Insert or replace by id (in memory only)
    pub fn upsert(&self, txn: Transaction) -> LedgerResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if txn.id >= state.next_id {
            state.next_id = txn.id.next();
        }
        state.records.insert(txn.id, txn);
        Ok(())
    }

    /// Remove by id (in memory only); returns the removed record
    pub fn remove(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.records.remove(&id))
    }

    pub fn count(&self) -> LedgerResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.len())
    }
}

impl TransactionStore for TransactionRepository {
    fn fetch_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.get_all()
    }

    /// Remove and persist; an unknown id or a failed write leaves the store unchanged
    fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        let removed = self
            .remove(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        if let Err(e) = self.save() {
            self.upsert(removed)?;
            return Err(e);
        }
        Ok(())
    }
}
