//! Month window
//!
//! The overview covers an inclusive range of month offsets relative to a
//! reference month. The default spans a year back and two years ahead.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inclusive range of month offsets around a reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub start: i32,
    pub end: i32,
}

impl MonthWindow {
    /// Create a window; `None` when `start > end`
    pub fn new(start: i32, end: i32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn offsets(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Number of months covered
    pub fn month_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

impl Default for MonthWindow {
    fn default() -> Self {
        Self { start: -12, end: 24 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let window = MonthWindow::default();
        assert_eq!(window.offsets(), -12..=24);
        assert_eq!(window.month_count(), 37);
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(MonthWindow::new(3, 1).is_none());
        assert_eq!(MonthWindow::new(0, 0).unwrap().month_count(), 1);
    }
}
