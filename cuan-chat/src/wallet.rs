//! Wallet matching: keyword table, then the user's default wallet.

use cuan_core::Wallet;

/// Canonical wallet names and triggers, in priority order. "tf" and
/// "transfer" both point at the bank wallet, matching how people type.
const WALLET_KEYWORDS: &[(&str, &[&str])] = &[
    ("Tunai", &["tunai", "cash"]),
    ("BCA", &["bca", "bank", "transfer", "tf"]),
    ("OVO", &["ovo"]),
    ("GoPay", &["gopay"]),
    ("ShopeePay", &["shopeepay", "spay"]),
];

/// First keyword hit in table order decides the canonical name.
pub fn keyword_wallet(msg: &str) -> Option<&'static str> {
    for (name, keywords) in WALLET_KEYWORDS {
        if keywords.iter().any(|kw| msg.contains(kw)) {
            return Some(name);
        }
    }
    None
}

/// Resolve a canonical name against the user's actual rows, exact match.
pub fn find_by_name<'a>(name: &str, rows: &'a [Wallet]) -> Option<&'a Wallet> {
    rows.iter().find(|w| w.name == name)
}

/// Keyword hit, else the wallet flagged default, else whatever storage
/// listed first. `None` only for a user with no wallets at all.
pub fn match_wallet<'a>(msg: &str, rows: &'a [Wallet]) -> Option<&'a Wallet> {
    keyword_wallet(msg)
        .and_then(|name| find_by_name(name, rows))
        .or_else(|| rows.iter().find(|w| w.is_default))
        .or_else(|| rows.first())
}
