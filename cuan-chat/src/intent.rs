//! Intent routing: ordered substring rules, first match wins.

/// What a message is asking the tracker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "sisa budget makan?" — remaining budget for a category
    Budget,
    /// "total pengeluaran bulan ini?" — monthly income/expense recap
    Summary,
    /// "cek saldo" — wallet balances
    Balance,
    /// Anything else is treated as an expense entry
    Transaction,
}

/// Checked top to bottom; order encodes precedence, so a message containing
/// both "budget" and "saldo" is a budget query.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["sisa budget", "sisa anggaran", "budget"], Intent::Budget),
    (
        &["total pengeluaran", "total bulan ini", "berapa pengeluaran"],
        Intent::Summary,
    ),
    (&["saldo", "balance", "cek saldo"], Intent::Balance),
];

/// Classify a lower-cased, trimmed message.
pub fn detect_intent(msg: &str) -> Intent {
    for (needles, intent) in INTENT_RULES {
        if needles.iter().any(|n| msg.contains(n)) {
            return *intent;
        }
    }
    Intent::Transaction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_queries() {
        assert_eq!(detect_intent("sisa budget makan?"), Intent::Budget);
        assert_eq!(detect_intent("sisa anggaran transportasi"), Intent::Budget);
        assert_eq!(detect_intent("budget hiburan masih ada?"), Intent::Budget);
    }

    #[test]
    fn test_summary_queries() {
        assert_eq!(detect_intent("total pengeluaran?"), Intent::Summary);
        assert_eq!(detect_intent("total bulan ini berapa"), Intent::Summary);
        assert_eq!(detect_intent("berapa pengeluaran saya"), Intent::Summary);
    }

    #[test]
    fn test_balance_queries() {
        assert_eq!(detect_intent("cek saldo"), Intent::Balance);
        assert_eq!(detect_intent("saldo dompet"), Intent::Balance);
        assert_eq!(detect_intent("balance please"), Intent::Balance);
    }

    #[test]
    fn test_everything_else_is_a_transaction() {
        assert_eq!(detect_intent("nasi goreng 15rb"), Intent::Transaction);
        assert_eq!(detect_intent("halo apa kabar"), Intent::Transaction);
    }

    #[test]
    fn test_precedence_budget_beats_balance() {
        // contains both "budget" and "saldo"; rule order decides
        assert_eq!(detect_intent("budget vs saldo"), Intent::Budget);
    }
}
