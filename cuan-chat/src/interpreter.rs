//! The message interpreter: one-shot classification of a chat message into
//! a query answer or an unsaved expense draft.
//!
//! Pure in spirit: everything it needs is fetched through the store at most
//! once per message, so concurrent calls for different users are safe.
//! Malformed input never errors — parse failures come back as user-facing
//! text. Only infrastructure failures (store lookups) propagate.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use cuan_core::{FinanceStore, MonthKey, TxKind};

use crate::amount::extract_amount;
use crate::category::{match_category, match_category_for_query};
use crate::description::clean_description;
use crate::intent::{Intent, detect_intent};
use crate::reply;
use crate::wallet::match_wallet;

/// Outcome of interpreting one message. Serializes to the chat endpoint's
/// wire shape: `{"type": "query" | "error" | "transaction", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedResult {
    Query { response: String },
    Error { response: String },
    Transaction { data: TransactionDraft },
}

/// An unsaved expense drafted from a message. Amount is always positive;
/// category and wallet fields stay empty when nothing matched. Saving (and
/// the wallet balance adjustment that comes with it) is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_icon: Option<String>,
    pub wallet_id: Option<i64>,
    pub wallet_name: Option<String>,
    pub wallet_icon: Option<String>,
}

/// Interprets messages against one store's categories, wallets, and budgets.
pub struct Interpreter<S: FinanceStore> {
    store: S,
}

impl<S: FinanceStore> Interpreter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Sole entry point: classify and answer or parse `message` for
    /// `user_id`, with "this month" anchored to the local date.
    pub fn interpret(&self, message: &str, user_id: i64) -> Result<ParsedResult> {
        self.interpret_on(message, user_id, Local::now().date_naive())
    }

    /// Date-explicit variant for callers (and tests) that control time.
    pub fn interpret_on(&self, message: &str, user_id: i64, today: NaiveDate) -> Result<ParsedResult> {
        let msg = message.trim().to_lowercase();
        match detect_intent(&msg) {
            Intent::Budget => self.budget_query(&msg, user_id, MonthKey::from_date(today)),
            Intent::Summary => self.summary_query(user_id, MonthKey::from_date(today)),
            Intent::Balance => self.balance_query(user_id),
            Intent::Transaction => self.parse_transaction(&msg, message, user_id),
        }
    }

    fn budget_query(&self, msg: &str, user_id: i64, month: MonthKey) -> Result<ParsedResult> {
        let categories = self.store.categories(user_id, TxKind::Expense)?;
        let Some(category) = match_category_for_query(msg, &categories) else {
            return Ok(ParsedResult::Query {
                response: reply::BUDGET_WHICH_CATEGORY.to_string(),
            });
        };

        let response = match self.store.budget_status(user_id, category.id, month)? {
            Some(status) => reply::budget_reply(&category.name, status),
            None => reply::budget_not_configured(&category.name),
        };
        Ok(ParsedResult::Query { response })
    }

    fn summary_query(&self, user_id: i64, month: MonthKey) -> Result<ParsedResult> {
        let summary = self.store.monthly_summary(user_id, month)?;
        Ok(ParsedResult::Query {
            response: reply::summary_reply(&summary),
        })
    }

    fn balance_query(&self, user_id: i64) -> Result<ParsedResult> {
        let mut wallets = self.store.wallets(user_id)?;
        // default first, storage order otherwise (sort is stable)
        wallets.sort_by_key(|w| !w.is_default);
        Ok(ParsedResult::Query {
            response: reply::balance_reply(&wallets),
        })
    }

    /// `msg` is the lower-cased message for matching; `original` keeps the
    /// user's casing for the description.
    fn parse_transaction(&self, msg: &str, original: &str, user_id: i64) -> Result<ParsedResult> {
        let amount = extract_amount(msg)?.unwrap_or(0.0);
        if amount == 0.0 {
            return Ok(ParsedResult::Error {
                response: reply::AMOUNT_NOT_FOUND.to_string(),
            });
        }

        let categories = self.store.categories(user_id, TxKind::Expense)?;
        let category = match_category(msg, &categories);

        let wallets = self.store.wallets(user_id)?;
        let wallet = match_wallet(msg, &wallets);

        Ok(ParsedResult::Transaction {
            data: TransactionDraft {
                description: clean_description(original)?,
                amount,
                kind: TxKind::Expense,
                category_id: category.map(|c| c.id),
                category_name: category.map(|c| c.name.clone()),
                category_icon: category.map(|c| c.icon.clone()),
                wallet_id: wallet.map(|w| w.id),
                wallet_name: wallet.map(|w| w.name.clone()),
                wallet_icon: wallet.map(|w| w.icon.clone()),
            },
        })
    }
}
