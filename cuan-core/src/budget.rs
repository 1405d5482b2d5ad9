//! Budget figures and the dashboard alert rule.

use serde::{Deserialize, Serialize};

/// Spent-vs-allocated ratio at which a budget lands on the dashboard alert
/// list. Distinct from the chat reply's low-remaining warning, which fires
/// when the remainder drops under 20% of the allocation.
pub const BUDGET_ALERT_SPENT_RATIO: f64 = 0.8;

/// Allocated and spent figures for one category in one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub allocated: f64,
    pub spent: f64,
}

impl BudgetStatus {
    pub fn new(allocated: f64, spent: f64) -> Self {
        Self { allocated, spent }
    }

    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent
    }

    /// Dashboard alert rule: spent ≥ 80% of allocated.
    pub fn is_alert(&self) -> bool {
        self.spent >= self.allocated * BUDGET_ALERT_SPENT_RATIO
    }
}

/// A month's budget joined with its category, as the dashboard lists them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRow {
    pub category_name: String,
    pub category_icon: String,
    pub status: BudgetStatus,
}

/// Filter a month's budget rows down to the near-exhausted ones.
pub fn budget_alerts(rows: &[BudgetRow]) -> Vec<&BudgetRow> {
    rows.iter().filter(|r| r.status.is_alert()).collect()
}
