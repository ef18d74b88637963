//! Transaction model
//!
//! A transaction is a single income or expense on a given date. Each one is
//! attributed to the month it falls in through `budget_month`, which is
//! computed once when the transaction is built.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthAnchor;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TransactionInputError::InvalidType(s.to_string())),
        }
    }
}

/// Spending/earning category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Food,
    Transport,
    Health,
    Education,
    Leisure,
    Shopping,
    Utilities,
    Salary,
    Investment,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Self::Housing,
        Self::Food,
        Self::Transport,
        Self::Health,
        Self::Education,
        Self::Leisure,
        Self::Shopping,
        Self::Utilities,
        Self::Salary,
        Self::Investment,
        Self::Other,
    ];

    /// Stable key used in storage and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Health => "health",
            Self::Education => "education",
            Self::Leisure => "leisure",
            Self::Shopping => "shopping",
            Self::Utilities => "utilities",
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = TransactionInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .ok_or_else(|| TransactionInputError::InvalidCategory(s.to_string()))
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub title: String,

    /// Never negative; direction comes from `transaction_type`
    pub amount: Money,

    /// Local wall-clock time of the transaction
    pub date: NaiveDateTime,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: Category,

    /// Month this transaction counts toward
    pub budget_month: MonthAnchor,
}

impl Transaction {
    /// Build a transaction, deriving its budget month from `date`
    pub fn new(
        id: TransactionId,
        title: impl Into<String>,
        amount: Money,
        date: NaiveDateTime,
        transaction_type: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            date,
            transaction_type,
            category,
            budget_month: MonthAnchor::of(&date),
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Signed effect on the available balance
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check the stored invariants
    pub fn validate(&self) -> Result<(), TransactionInputError> {
        if self.title.trim().is_empty() {
            return Err(TransactionInputError::EmptyTitle);
        }
        if self.amount.is_negative() {
            return Err(TransactionInputError::NegativeAmount(self.amount.minor_units()));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Parse a transaction date: `YYYY-MM-DD` (midnight) or `YYYY-MM-DD HH:MM`
pub fn parse_transaction_date(s: &str) -> Result<NaiveDateTime, TransactionInputError> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TransactionInputError::InvalidDateFormat(s.to_string()))
}

/// Rejections of user-supplied transaction fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionInputError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
    #[error("invalid category: {0}")]
    InvalidCategory(String),
    #[error("invalid transaction type: {0}")]
    InvalidType(String),
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("amount must not be negative: {0}")]
    NegativeAmount(i64),
}
