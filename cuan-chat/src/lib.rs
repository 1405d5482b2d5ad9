//! cuan-chat: rule-based interpreter turning free-text chat messages into
//! expense drafts and budget/balance/summary answers.
//!
//! No LLM involved — ordered substring rules, regex amount patterns, and
//! fixed keyword tables cover the product's Indonesian/English chat inputs.

pub mod amount;
pub mod category;
pub mod description;
pub mod intent;
pub mod interpreter;
pub mod reply;
pub mod wallet;

pub use amount::extract_amount;
pub use category::{CATCH_ALL_CATEGORY, keyword_category, match_category};
pub use description::clean_description;
pub use intent::{Intent, detect_intent};
pub use interpreter::{Interpreter, ParsedResult, TransactionDraft};
pub use wallet::{keyword_wallet, match_wallet};
