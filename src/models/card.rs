//! Monthly budget card
//!
//! Cards are derived on every read from transactions and budgets; they are
//! never stored.

use serde::Serialize;

use super::money::Money;
use super::month::MonthAnchor;

/// Summary of one month in the overview window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBudgetCard {
    pub date: MonthAnchor,

    /// Display label, e.g. "January 2025"
    pub label: String,

    /// Sum of expenses attributed to the month (income is not subtracted)
    pub used_value: Money,

    /// Limit from the month's budget entry, if one was set
    pub budget_limit: Option<Money>,

    /// Carry-forward balance after this month's net
    pub available_value: Money,
}

impl MonthBudgetCard {
    /// Budget left to spend this month, when a limit exists
    pub fn remaining_budget(&self) -> Option<Money> {
        self.budget_limit.map(|limit| limit - self.used_value)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget().is_some_and(|left| left.is_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(used: i64, limit: Option<i64>) -> MonthBudgetCard {
        let date = MonthAnchor::new(2025, 1).unwrap();
        MonthBudgetCard {
            date,
            label: date.label(),
            used_value: Money::from_minor(used),
            budget_limit: limit.map(Money::from_minor),
            available_value: Money::zero(),
        }
    }

    #[test]
    fn test_remaining_budget() {
        assert_eq!(card(200, Some(500)).remaining_budget(), Some(Money::from_minor(300)));
        assert_eq!(card(200, None).remaining_budget(), None);
    }

    #[test]
    fn test_over_budget() {
        assert!(card(600, Some(500)).is_over_budget());
        assert!(!card(500, Some(500)).is_over_budget());
        assert!(!card(10_000, None).is_over_budget());
    }
}
