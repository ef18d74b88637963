//! Strongly-typed transaction identifier
//!
//! Transaction ids are small integers handed out by the transaction store.
//! The newtype keeps them from being mixed up with amounts or offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique integer identity of a transaction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "#12" as printed in listings
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = TransactionId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<TransactionId>().unwrap(), id);
        assert_eq!("#42".parse::<TransactionId>().unwrap(), id);
        assert!("abc".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_next_and_ordering() {
        let id = TransactionId::new(7);
        assert_eq!(id.next().value(), 8);
        assert!(id < id.next());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
