//! The storage collaborator seam the interpreter reads through.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetStatus;
use crate::model::{Category, TxKind, Wallet};
use crate::month::MonthKey;

/// One month's income and expense totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub income: f64,
    pub expense: f64,
}

impl MonthlySummary {
    /// Income minus expense.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Read side of storage as the interpreter sees it.
///
/// Implementations return whatever snapshot they currently hold; the
/// interpreter fetches each collection at most once per message and does not
/// expect transactional consistency across calls.
pub trait FinanceStore {
    fn categories(&self, user_id: i64, kind: TxKind) -> Result<Vec<Category>>;

    /// Wallets in storage order. Callers needing default-first ordering
    /// sort the snapshot themselves.
    fn wallets(&self, user_id: i64) -> Result<Vec<Wallet>>;

    /// `None` when no budget row exists for that category and month.
    fn budget_status(
        &self,
        user_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<Option<BudgetStatus>>;

    fn monthly_summary(&self, user_id: i64, month: MonthKey) -> Result<MonthlySummary>;
}

impl<S: FinanceStore> FinanceStore for &S {
    fn categories(&self, user_id: i64, kind: TxKind) -> Result<Vec<Category>> {
        (**self).categories(user_id, kind)
    }

    fn wallets(&self, user_id: i64) -> Result<Vec<Wallet>> {
        (**self).wallets(user_id)
    }

    fn budget_status(
        &self,
        user_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<Option<BudgetStatus>> {
        (**self).budget_status(user_id, category_id, month)
    }

    fn monthly_summary(&self, user_id: i64, month: MonthKey) -> Result<MonthlySummary> {
        (**self).monthly_summary(user_id, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_difference() {
        let summary = MonthlySummary {
            income: 5_000_000.0,
            expense: 3_200_000.0,
        };
        assert_eq!(summary.net(), 1_800_000.0);
    }
}
