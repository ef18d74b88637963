//! Monthly budget entry
//!
//! At most one entry exists per month. A month without an entry has no
//! spending limit, which is different from a limit of zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::MonthAnchor;

/// Spending limit set for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub month: MonthAnchor,

    pub amount: Money,

    /// When this limit was last changed
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BudgetEntry {
    pub fn new(month: MonthAnchor, amount: Money) -> Self {
        Self {
            month,
            amount,
            updated_at: Utc::now(),
        }
    }

    /// Replace the limit
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }
}
