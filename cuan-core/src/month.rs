//! Month keys: the `YYYY-MM` strings budgets and summaries are bucketed by.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month. Displays as `YYYY-MM`, the storage key format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(MonthKey::new(2026, 8).to_string(), "2026-08");
        assert_eq!(MonthKey::new(2026, 11).to_string(), "2026-11");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey::new(2026, 8));
    }

    #[test]
    fn test_contains() {
        let key = MonthKey::new(2026, 8);
        assert!(key.contains(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }
}
