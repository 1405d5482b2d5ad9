//! In-memory store seeded with the defaults every new account starts with.
//!
//! Stands in for the SQL layer: good enough for a local chat session, and
//! the same seed the product gives fresh users.

use anyhow::{Result, bail};
use chrono::NaiveDate;

use cuan_chat::TransactionDraft;
use cuan_core::{
    BudgetRow, BudgetStatus, Category, FinanceStore, MonthKey, MonthlySummary, Transaction,
    TxKind, Wallet,
};

use crate::export::ExportRow;

struct BudgetEntry {
    category_id: i64,
    month: MonthKey,
    amount: f64,
    user_id: i64,
}

pub struct MemoryStore {
    categories: Vec<Category>,
    wallets: Vec<Wallet>,
    transactions: Vec<Transaction>,
    budgets: Vec<BudgetEntry>,
    next_tx_id: i64,
}

/// What saving a draft produced: the stored row and, when the draft named a
/// wallet, that wallet's new balance.
pub struct SaveOutcome {
    pub transaction: Transaction,
    pub wallet_balance: Option<f64>,
}

impl MemoryStore {
    /// The category and wallet set a fresh account is seeded with.
    pub fn seeded(user_id: i64) -> Self {
        let categories = [
            ("Makanan & Minuman", "🍔", "#ef4444", TxKind::Expense),
            ("Transportasi", "🚕", "#f59e0b", TxKind::Expense),
            ("Belanja", "🛒", "#8b5cf6", TxKind::Expense),
            ("Hiburan", "🎮", "#ec4899", TxKind::Expense),
            ("Tagihan", "📄", "#06b6d4", TxKind::Expense),
            ("Kesehatan", "💊", "#14b8a6", TxKind::Expense),
            ("Pendidikan", "📚", "#6366f1", TxKind::Expense),
            ("Lainnya", "📦", "#64748b", TxKind::Expense),
            ("Gaji", "💰", "#10b981", TxKind::Income),
            ("Freelance", "💻", "#22c55e", TxKind::Income),
            ("Investasi", "📈", "#84cc16", TxKind::Income),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, icon, color, kind))| {
            Category::new(i as i64 + 1, *name, *icon, *color, *kind, user_id)
        })
        .collect();

        let wallets = vec![
            Wallet::new(1, "Tunai", "💵", "#22c55e", 500_000.0, true, user_id),
            Wallet::new(2, "BCA", "🏦", "#0066AE", 2_500_000.0, false, user_id),
            Wallet::new(3, "OVO", "🟣", "#4C2A86", 350_000.0, false, user_id),
            Wallet::new(4, "GoPay", "🟢", "#00AED6", 200_000.0, false, user_id),
            Wallet::new(5, "ShopeePay", "🟠", "#EE4D2D", 150_000.0, false, user_id),
        ];

        Self {
            categories,
            wallets,
            transactions: Vec::new(),
            budgets: Vec::new(),
            next_tx_id: 1,
        }
    }

    /// Create or replace the budget for a category (by name) in a month.
    pub fn set_budget(
        &mut self,
        user_id: i64,
        category_name: &str,
        month: MonthKey,
        amount: f64,
    ) -> Result<()> {
        let Some(category) = self
            .categories
            .iter()
            .find(|c| c.name == category_name && c.user_id == user_id)
        else {
            bail!("no category named {category_name}");
        };
        let category_id = category.id;
        self.budgets
            .retain(|b| !(b.category_id == category_id && b.month == month && b.user_id == user_id));
        self.budgets.push(BudgetEntry {
            category_id,
            month,
            amount,
            user_id,
        });
        Ok(())
    }

    /// Persist a draft dated `date` and apply the wallet delta (expense
    /// subtracts, income adds).
    pub fn save_draft(
        &mut self,
        draft: &TransactionDraft,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<SaveOutcome> {
        let transaction = Transaction {
            id: self.next_tx_id,
            date,
            description: draft.description.clone(),
            amount: draft.amount,
            kind: draft.kind,
            category_id: draft.category_id,
            wallet_id: draft.wallet_id,
            user_id,
            notes: None,
            source: "chat".to_string(),
        };
        self.next_tx_id += 1;

        let mut wallet_balance = None;
        if let Some(wallet_id) = draft.wallet_id {
            let delta = match draft.kind {
                TxKind::Income => draft.amount,
                TxKind::Expense => -draft.amount,
            };
            if let Some(wallet) = self
                .wallets
                .iter_mut()
                .find(|w| w.id == wallet_id && w.user_id == user_id)
            {
                wallet.balance += delta;
                wallet_balance = Some(wallet.balance);
            }
        }

        self.transactions.push(transaction.clone());
        Ok(SaveOutcome {
            transaction,
            wallet_balance,
        })
    }

    /// Budget rows for a month, spent recomputed from saved transactions.
    pub fn month_budget_rows(&self, user_id: i64, month: MonthKey) -> Vec<BudgetRow> {
        self.budgets
            .iter()
            .filter(|b| b.user_id == user_id && b.month == month)
            .filter_map(|b| {
                let category = self.categories.iter().find(|c| c.id == b.category_id)?;
                Some(BudgetRow {
                    category_name: category.name.clone(),
                    category_icon: category.icon.clone(),
                    status: BudgetStatus::new(
                        b.amount,
                        self.spent_in(user_id, b.category_id, month),
                    ),
                })
            })
            .collect()
    }

    /// Saved transactions joined with category/wallet names, oldest first.
    pub fn export_rows(&self, user_id: i64) -> Vec<ExportRow> {
        self.transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| ExportRow {
                date: t.date,
                description: t.description.clone(),
                kind: t.kind,
                category: t
                    .category_id
                    .and_then(|id| self.categories.iter().find(|c| c.id == id))
                    .map(|c| c.name.clone()),
                wallet: t
                    .wallet_id
                    .and_then(|id| self.wallets.iter().find(|w| w.id == id))
                    .map(|w| w.name.clone()),
                amount: t.amount,
                notes: t.notes.clone(),
            })
            .collect()
    }

    fn spent_in(&self, user_id: i64, category_id: i64, month: MonthKey) -> f64 {
        self.transactions
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.kind == TxKind::Expense
                    && t.category_id == Some(category_id)
                    && month.contains(t.date)
            })
            .map(|t| t.amount)
            .sum()
    }
}

impl FinanceStore for MemoryStore {
    fn categories(&self, user_id: i64, kind: TxKind) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|c| c.user_id == user_id && c.kind == kind)
            .cloned()
            .collect())
    }

    fn wallets(&self, user_id: i64) -> Result<Vec<Wallet>> {
        Ok(self
            .wallets
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    fn budget_status(
        &self,
        user_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<Option<BudgetStatus>> {
        Ok(self
            .budgets
            .iter()
            .find(|b| b.user_id == user_id && b.category_id == category_id && b.month == month)
            .map(|b| BudgetStatus::new(b.amount, self.spent_in(user_id, category_id, month))))
    }

    fn monthly_summary(&self, user_id: i64, month: MonthKey) -> Result<MonthlySummary> {
        let mut summary = MonthlySummary::default();
        for t in self
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && month.contains(t.date))
        {
            match t.kind {
                TxKind::Income => summary.income += t.amount,
                TxKind::Expense => summary.expense += t.amount,
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuan_chat::{Interpreter, ParsedResult};

    const USER: i64 = 1;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    fn drafted(store: &MemoryStore, msg: &str) -> TransactionDraft {
        match Interpreter::new(store).interpret_on(msg, USER, date()).unwrap() {
            ParsedResult::Transaction { data } => data,
            other => panic!("expected draft, got {other:?}"),
        }
    }

    #[test]
    fn test_save_adjusts_wallet_balance() {
        let mut store = MemoryStore::seeded(USER);
        let draft = drafted(&store, "makan 15rb gopay");

        let outcome = store.save_draft(&draft, USER, date()).unwrap();
        assert_eq!(outcome.transaction.source, "chat");
        // GoPay started at 200k
        assert_eq!(outcome.wallet_balance, Some(185_000.0));
    }

    #[test]
    fn test_budget_status_counts_saved_expenses() {
        let mut store = MemoryStore::seeded(USER);
        let month = MonthKey::from_date(date());
        store
            .set_budget(USER, "Makanan & Minuman", month, 1_000_000.0)
            .unwrap();

        let draft = drafted(&store, "nasi goreng 15rb");
        store.save_draft(&draft, USER, date()).unwrap();

        let makan_id = FinanceStore::categories(&store, USER, TxKind::Expense)
            .unwrap()
            .iter()
            .find(|c| c.name == "Makanan & Minuman")
            .map(|c| c.id)
            .unwrap();
        let status = store.budget_status(USER, makan_id, month).unwrap().unwrap();
        assert_eq!(status.allocated, 1_000_000.0);
        assert_eq!(status.spent, 15_000.0);
        assert_eq!(status.remaining(), 985_000.0);
    }

    #[test]
    fn test_monthly_summary_sums_by_kind() {
        let mut store = MemoryStore::seeded(USER);
        let month = MonthKey::from_date(date());

        for msg in ["makan 15rb", "grab 24k"] {
            let draft = drafted(&store, msg);
            store.save_draft(&draft, USER, date()).unwrap();
        }

        let summary = store.monthly_summary(USER, month).unwrap();
        assert_eq!(summary.expense, 39_000.0);
        assert_eq!(summary.income, 0.0);
    }

    #[test]
    fn test_set_budget_replaces_existing() {
        let mut store = MemoryStore::seeded(USER);
        let month = MonthKey::from_date(date());
        store.set_budget(USER, "Hiburan", month, 200_000.0).unwrap();
        store.set_budget(USER, "Hiburan", month, 300_000.0).unwrap();

        let rows = store.month_budget_rows(USER, month);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status.allocated, 300_000.0);
    }

    #[test]
    fn test_set_budget_unknown_category() {
        let mut store = MemoryStore::seeded(USER);
        let month = MonthKey::from_date(date());
        assert!(store.set_budget(USER, "Bukan Kategori", month, 100_000.0).is_err());
    }

    #[test]
    fn test_export_rows_join_names() {
        let mut store = MemoryStore::seeded(USER);
        let draft = drafted(&store, "kopi susu 25rb");
        store.save_draft(&draft, USER, date()).unwrap();

        let rows = store.export_rows(USER);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Kopi susu");
        assert_eq!(rows[0].category.as_deref(), Some("Makanan & Minuman"));
        assert_eq!(rows[0].wallet.as_deref(), Some("Tunai"));
    }
}
