//! Monthly overview
//!
//! Turns raw transactions and budgets into one card per month of the
//! overview window, carrying the available balance forward from month to
//! month. The balance starts at zero at the first month of the window;
//! transactions before the window do not contribute to it.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::ops::RangeInclusive;

use chrono::Datelike;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::{BudgetEntry, Money, MonthAnchor, MonthBudgetCard, MonthWindow, Transaction};
use crate::storage::{BudgetStore, Storage, TransactionStore};

/// Group `items` by key and add up their values
///
/// Keys with no items are absent from the result, not zero.
pub fn sum_by_key<T, K, I, FK, FV>(items: I, key: FK, value: FV) -> HashMap<K, Money>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> Money,
{
    items.into_iter().fold(HashMap::new(), |mut acc, item| {
        *acc.entry(key(&item)).or_insert_with(Money::zero) += value(&item);
        acc
    })
}

/// Build the monthly cards for `offsets` around `reference`'s month
///
/// Cards come back in ascending month order, one per distinct month. Each
/// card's available value is the previous card's available value plus the
/// month's income minus its expenses; the first card starts from zero.
/// Months with no data still get a card that carries the balance forward.
pub fn compute_monthly_cards<D: Datelike>(
    transactions: &[Transaction],
    budgets: &[BudgetEntry],
    offsets: RangeInclusive<i32>,
    reference: &D,
) -> Vec<MonthBudgetCard> {
    // Later entries overwrite earlier ones for the same month
    let limits: HashMap<MonthAnchor, Money> =
        budgets.iter().map(|b| (b.month, b.amount)).collect();

    let expenses = sum_by_key(
        transactions.iter().filter(|t| t.is_expense()),
        |t| t.budget_month,
        |t| t.amount,
    );
    let incomes = sum_by_key(
        transactions.iter().filter(|t| t.is_income()),
        |t| t.budget_month,
        |t| t.amount,
    );

    let reference = MonthAnchor::of(reference);
    let anchors: BTreeSet<MonthAnchor> = offsets.map(|offset| reference.offset(offset)).collect();

    let mut carry = Money::zero();
    let cards: Vec<MonthBudgetCard> = anchors
        .into_iter()
        .map(|anchor| {
            let expense = expenses.get(&anchor).copied().unwrap_or_default();
            let income = incomes.get(&anchor).copied().unwrap_or_default();

            let available = carry + income - expense;
            carry = available;

            MonthBudgetCard {
                date: anchor,
                label: anchor.label(),
                used_value: expense,
                budget_limit: limits.get(&anchor).copied(),
                available_value: available,
            }
        })
        .collect();

    debug_assert!(cards.windows(2).all(|w| w[0].date < w[1].date));
    debug!(
        transactions = transactions.len(),
        budgets = budgets.len(),
        cards = cards.len(),
        "computed monthly cards"
    );
    cards
}

/// Reads both stores and builds the overview for the configured window
pub struct OverviewService<'a> {
    transactions: &'a dyn TransactionStore,
    budgets: &'a dyn BudgetStore,
    window: MonthWindow,
}

impl<'a> OverviewService<'a> {
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self::with_stores(&storage.transactions, &storage.budgets, settings.window)
    }

    pub fn with_stores(
        transactions: &'a dyn TransactionStore,
        budgets: &'a dyn BudgetStore,
        window: MonthWindow,
    ) -> Self {
        Self {
            transactions,
            budgets,
            window,
        }
    }

    /// Override the configured window
    pub fn window(mut self, window: MonthWindow) -> Self {
        self.window = window;
        self
    }

    /// Cards for the window around `reference`; store read errors pass through
    pub fn load_monthly_cards<D: Datelike>(&self, reference: &D) -> LedgerResult<Vec<MonthBudgetCard>> {
        let budgets = self.budgets.fetch_budgets()?;
        let transactions = self.transactions.fetch_transactions()?;
        Ok(compute_monthly_cards(
            &transactions,
            &budgets,
            self.window.offsets(),
            reference,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Category, TransactionId, TransactionType};
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;

    fn month(y: i32, m: u32) -> MonthAnchor {
        MonthAnchor::new(y, m).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn txn(id: u64, kind: TransactionType, minor: i64, date: NaiveDateTime) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            format!("txn {}", id),
            Money::from_minor(minor),
            date,
            kind,
            Category::Other,
        )
    }

    fn budget(y: i32, m: u32, minor: i64) -> BudgetEntry {
        BudgetEntry::new(month(y, m), Money::from_minor(minor))
    }

    #[test]
    fn test_january_february_scenario() {
        let budgets = vec![budget(2025, 1, 500)];
        let transactions = vec![
            txn(1, TransactionType::Expense, 200, at(2025, 1, 5)),
            txn(2, TransactionType::Income, 100, at(2025, 1, 20)),
            txn(3, TransactionType::Expense, 50, at(2025, 2, 3)),
        ];

        let cards = compute_monthly_cards(&transactions, &budgets, 0..=1, &at(2025, 1, 15));

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].date, month(2025, 1));
        assert_eq!(cards[0].label, "January 2025");
        assert_eq!(cards[0].used_value, Money::from_minor(200));
        assert_eq!(cards[0].budget_limit, Some(Money::from_minor(500)));
        assert_eq!(cards[0].available_value, Money::from_minor(-100));

        assert_eq!(cards[1].date, month(2025, 2));
        assert_eq!(cards[1].used_value, Money::from_minor(50));
        assert_eq!(cards[1].budget_limit, None);
        assert_eq!(cards[1].available_value, Money::from_minor(-150));
    }

    #[test]
    fn test_anchors_strictly_ascending_across_year_boundary() {
        let cards = compute_monthly_cards(&[], &[], -12..=24, &at(2025, 1, 31));

        assert_eq!(cards.len(), 37);
        assert_eq!(cards.first().unwrap().date, month(2024, 1));
        assert_eq!(cards.last().unwrap().date, month(2027, 1));
        assert!(cards.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_carry_forward_identity() {
        let transactions = vec![
            txn(1, TransactionType::Income, 1000, at(2024, 11, 1)),
            txn(2, TransactionType::Expense, 300, at(2024, 12, 24)),
            txn(3, TransactionType::Income, 50, at(2025, 1, 2)),
            txn(4, TransactionType::Expense, 75, at(2025, 1, 9)),
            txn(5, TransactionType::Expense, 10, at(2025, 3, 9)),
        ];
        let income = sum_by_key(
            transactions.iter().filter(|t| t.is_income()),
            |t| t.budget_month,
            |t| t.amount,
        );

        let cards = compute_monthly_cards(&transactions, &[], -3..=3, &at(2025, 1, 1));

        let net = |card: &MonthBudgetCard| {
            income.get(&card.date).copied().unwrap_or_default() - card.used_value
        };
        assert_eq!(cards[0].available_value, net(&cards[0]));
        for pair in cards.windows(2) {
            assert_eq!(
                pair[1].available_value,
                pair[0].available_value + net(&pair[1])
            );
        }
        assert_eq!(cards.last().unwrap().available_value, Money::from_minor(665));
    }

    #[test]
    fn test_transactions_before_window_are_ignored() {
        let transactions = vec![
            txn(1, TransactionType::Income, 10_000, at(2020, 1, 1)),
            txn(2, TransactionType::Expense, 40, at(2025, 1, 1)),
        ];

        let cards = compute_monthly_cards(&transactions, &[], 0..=0, &at(2025, 1, 10));
        assert_eq!(cards[0].available_value, Money::from_minor(-40));
    }

    #[test]
    fn test_empty_month_carries_balance_unchanged() {
        let transactions = vec![txn(1, TransactionType::Income, 900, at(2025, 1, 1))];

        let cards = compute_monthly_cards(&transactions, &[], 0..=3, &at(2025, 1, 1));

        for card in &cards[1..] {
            assert_eq!(card.used_value, Money::zero());
            assert_eq!(card.budget_limit, None);
            assert_eq!(card.available_value, Money::from_minor(900));
        }
    }

    #[test]
    fn test_income_does_not_reduce_used_value() {
        let transactions = vec![
            txn(1, TransactionType::Expense, 400, at(2025, 5, 1)),
            txn(2, TransactionType::Income, 1000, at(2025, 5, 2)),
        ];

        let cards = compute_monthly_cards(&transactions, &[], 0..=0, &at(2025, 5, 15));
        assert_eq!(cards[0].used_value, Money::from_minor(400));
        assert_eq!(cards[0].available_value, Money::from_minor(600));
    }

    #[test]
    fn test_duplicate_budget_entries_last_wins() {
        let budgets = vec![budget(2025, 1, 100), budget(2025, 1, 250)];

        let cards = compute_monthly_cards(&[], &budgets, 0..=0, &at(2025, 1, 1));
        assert_eq!(cards[0].budget_limit, Some(Money::from_minor(250)));
    }

    #[test]
    fn test_zero_budget_is_not_absent() {
        let cards = compute_monthly_cards(&[], &[budget(2025, 1, 0)], 0..=0, &at(2025, 1, 1));
        assert_eq!(cards[0].budget_limit, Some(Money::zero()));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let transactions = vec![
            txn(1, TransactionType::Income, i64::MAX, at(2025, 1, 2)),
            txn(2, TransactionType::Income, i64::MAX, at(2025, 1, 3)),
            txn(3, TransactionType::Expense, i64::MAX, at(2025, 2, 3)),
            txn(4, TransactionType::Expense, i64::MAX, at(2025, 2, 4)),
        ];

        let cards = compute_monthly_cards(&transactions, &[], 0..=1, &at(2025, 1, 1));
        assert_eq!(cards[0].available_value, Money::from_minor(i64::MAX));
        assert_eq!(cards[1].used_value, Money::from_minor(i64::MAX));
        assert_eq!(cards[1].available_value, Money::zero());
    }

    #[test]
    fn test_idempotent() {
        let budgets = vec![budget(2025, 2, 1000)];
        let transactions = vec![
            txn(1, TransactionType::Expense, 123, at(2025, 2, 1)),
            txn(2, TransactionType::Income, 456, at(2025, 3, 1)),
        ];

        let first = compute_monthly_cards(&transactions, &budgets, -2..=2, &at(2025, 2, 14));
        let second = compute_monthly_cards(&transactions, &budgets, -2..=2, &at(2025, 2, 14));
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_range_yields_no_cards() {
        #[allow(clippy::reversed_empty_ranges)]
        let cards = compute_monthly_cards(&[], &[], 2..=1, &at(2025, 1, 1));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_sum_by_key() {
        let words = ["apple", "avocado", "banana"];
        let totals = sum_by_key(
            words.iter(),
            |w| w.chars().next().unwrap(),
            |w| Money::from_minor(w.len() as i64),
        );
        assert_eq!(totals[&'a'], Money::from_minor(12));
        assert_eq!(totals[&'b'], Money::from_minor(6));
        assert!(!totals.contains_key(&'c'));
    }

    #[test]
    fn test_service_reads_stores() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage.budgets.upsert(budget(2025, 1, 500)).unwrap();
        storage
            .transactions
            .insert_new(txn(0, TransactionType::Expense, 200, at(2025, 1, 5)))
            .unwrap();

        let settings = Settings {
            window: MonthWindow::new(0, 1).unwrap(),
            ..Settings::default()
        };
        let service = OverviewService::new(&storage, &settings);

        let cards = service.load_monthly_cards(&at(2025, 1, 1)).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].available_value, Money::from_minor(-200));

        assert_eq!(cards[0].date, month(2025, 1));
        assert_eq!(cards[0].budget_limit, Some(Money::from_minor(500)));

        let wide = service.window(MonthWindow::new(-1, 1).unwrap());
        assert_eq!(wide.load_monthly_cards(&at(2025, 1, 1)).unwrap().len(), 3);
    }
}
