//! Transaction service
//!
//! Creation, listing and deletion of transactions. Creation and deletion keep
//! the pending reminders in step with the store on a best-effort basis.

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::LedgerResult;
use crate::models::{
    parse_transaction_date, Category, Money, MonthAnchor, Transaction, TransactionId,
    TransactionType,
};
use crate::storage::{Storage, TransactionStore};

use super::reminders::ReminderScheduler;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    scheduler: &'a ReminderScheduler<'a>,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only transactions attributed to this month
    pub month: Option<MonthAnchor>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: MonthAnchor) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Raw user input for a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub amount: Money,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`
    pub date: String,
    /// Category key, e.g. "food"
    pub category: String,
    /// "income" or "expense"
    pub transaction_type: String,
}

/// Delete a transaction, then cancel its reminder
///
/// A store error is returned unchanged and the reminder is left alone.
/// Cancellation itself never fails the deletion.
pub fn delete_transaction(
    store: &dyn TransactionStore,
    scheduler: &ReminderScheduler<'_>,
    id: TransactionId,
) -> LedgerResult<()> {
    store.delete(id)?;
    info!(transaction = %id, "deleted transaction");
    scheduler.cancel(id);
    Ok(())
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage, scheduler: &'a ReminderScheduler<'a>) -> Self {
        Self { storage, scheduler }
    }

    /// Validate and record a new transaction, scheduling its reminder
    ///
    /// The store assigns the id. Nothing is written when validation fails.
    pub fn create(
        &self,
        input: CreateTransactionInput,
        now: NaiveDateTime,
    ) -> LedgerResult<Transaction> {
        let transaction_type: TransactionType = input.transaction_type.parse()?;
        let category: Category = input.category.parse()?;
        let date = parse_transaction_date(&input.date)?;

        let draft = Transaction::new(
            TransactionId::default(),
            input.title.trim(),
            input.amount,
            date,
            transaction_type,
            category,
        );
        draft.validate()?;

        let txn = self.storage.transactions.insert_new(draft)?;
        if let Err(e) = self.storage.transactions.save() {
            self.storage.transactions.remove(txn.id)?;
            return Err(e);
        }
        info!(transaction = %txn.id, month = %txn.budget_month, "recorded transaction");

        self.scheduler.schedule(&txn, now);
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        let mut transactions = match filter.month {
            Some(month) => self.storage.transactions.get_by_month(month)?,
            None => self.storage.transactions.get_all()?,
        };
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    pub fn delete(&self, id: TransactionId) -> LedgerResult<()> {
        delete_transaction(&self.storage.transactions, self.scheduler, id)
    }
}
