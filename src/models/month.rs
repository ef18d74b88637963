//! Month anchors
//!
//! A `MonthAnchor` names one calendar month and is the bucketing key for
//! transactions, budgets and monthly cards. Anchors order chronologically
//! (year first, then month) and serialize as `"YYYY-MM"` so they can be used
//! directly as JSON map keys.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical key for a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthAnchor {
    // Field order matters: the derived Ord compares year before month.
    year: i32,
    month: u32,
}

impl MonthAnchor {
    /// Create an anchor, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month owning `date`
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use household_ledger::models::MonthAnchor;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
    /// assert_eq!(MonthAnchor::of(&date).to_string(), "2025-03");
    /// ```
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shift by a signed number of calendar months
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Display label such as "January 2025"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Parse `"YYYY-MM"`
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or(MonthParseError::MonthOutOfRange(month))
    }

    /// Parse `"YYYY-MM"` or one of the relative words `current`, `last`,
    /// `next`, resolved against `reference`
    pub fn parse_relative(s: &str, reference: MonthAnchor) -> Result<Self, MonthParseError> {
        match s.trim().to_lowercase().as_str() {
            "current" | "this" | "now" => Ok(reference),
            "last" | "prev" | "previous" => Ok(reference.prev()),
            "next" => Ok(reference.next()),
            _ => Self::parse(s),
        }
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<MonthAnchor> for String {
    fn from(anchor: MonthAnchor) -> Self {
        anchor.to_string()
    }
}

impl TryFrom<String> for MonthAnchor {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidFormat(String),
    #[error("Month out of range: {0}")]
    MonthOutOfRange(u32),
}
