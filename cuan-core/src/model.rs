//! Record types for categories, wallets, and transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of money flow, used by both categories and transactions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxKind {
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "income")]
    Income,
}

/// A user-owned transaction category. Read-only to the interpreter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    /// Unique per user and kind
    pub name: String,
    /// Emoji shown next to the name
    pub icon: String,
    /// Hex color for charts
    pub color: String,
    pub kind: TxKind,
    pub user_id: i64,
}

impl Category {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        kind: TxKind,
        user_id: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            kind,
            user_id,
        }
    }
}

/// A user's wallet (cash, bank account, e-money). Read-only to the
/// interpreter; balances move only when a transaction is saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub balance: f64,
    /// At most one per user
    pub is_default: bool,
    pub user_id: i64,
}

impl Wallet {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        balance: f64,
        is_default: bool,
        user_id: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            balance,
            is_default,
            user_id,
        }
    }
}

/// A saved transaction row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    /// Always positive; `kind` carries the direction
    pub amount: f64,
    pub kind: TxKind,
    pub category_id: Option<i64>,
    pub wallet_id: Option<i64>,
    pub user_id: i64,
    pub notes: Option<String>,
    /// Where the entry came from ("chat", "web")
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TxKind::Expense).unwrap(), "\"expense\"");
        assert_eq!(serde_json::to_string(&TxKind::Income).unwrap(), "\"income\"");
    }

    #[test]
    fn test_category_builder() {
        let cat = Category::new(3, "Makanan & Minuman", "🍔", "#ef4444", TxKind::Expense, 1);
        assert_eq!(cat.name, "Makanan & Minuman");
        assert_eq!(cat.kind, TxKind::Expense);
    }
}
