//! User-facing reply copy: Indonesian, emoji-forward, as the product ships.

use cuan_core::{BudgetStatus, MonthlySummary, Wallet, format_id};

/// Remaining-vs-allocated ratio under which the budget reply warns.
/// Distinct from the dashboard's 80%-spent alert rule in `cuan_core::budget`.
pub const LOW_BUDGET_REMAINING_RATIO: f64 = 0.2;

/// Fixed guidance when no amount can be read out of a message.
pub const AMOUNT_NOT_FOUND: &str =
    "❌ Nominal tidak terdeteksi. Contoh: \"Nasi goreng 15rb\" atau \"Kopi Rp25.000\"";

/// Budget query couldn't name a category.
pub const BUDGET_WHICH_CATEGORY: &str =
    "❓ Kategori mana yang ingin kamu cek? Contoh: \"Sisa budget makan?\"";

pub fn budget_reply(category_name: &str, status: BudgetStatus) -> String {
    let mut text = format!(
        "💰 Budget {} bulan ini:\n\nAnggaran: Rp{}\nTerpakai: Rp{}\nSisa: Rp{}",
        category_name,
        format_id(status.allocated),
        format_id(status.spent),
        format_id(status.remaining()),
    );
    if status.remaining() < status.allocated * LOW_BUDGET_REMAINING_RATIO {
        text.push_str("\n\n⚠️ Budget hampir habis!");
    }
    text
}

pub fn budget_not_configured(category_name: &str) -> String {
    format!("ℹ️ Belum ada budget untuk kategori {category_name} bulan ini. Atur di menu Budget.")
}

pub fn summary_reply(summary: &MonthlySummary) -> String {
    format!(
        "📊 Ringkasan bulan ini:\n\n💚 Pemasukan: Rp{}\n❤️ Pengeluaran: Rp{}\n📌 Selisih: Rp{}",
        format_id(summary.income),
        format_id(summary.expense),
        format_id(summary.net()),
    )
}

/// One line per wallet plus the grand total. Callers pass wallets already
/// ordered default-first.
pub fn balance_reply(wallets: &[Wallet]) -> String {
    let mut text = String::from("💳 Saldo Dompet:\n\n");
    let mut total = 0.0;
    for w in wallets {
        text.push_str(&format!("{} {}: Rp{}\n", w.icon, w.name, format_id(w.balance)));
        total += w.balance;
    }
    text.push_str(&format!("\n💰 Total: Rp{}", format_id(total)));
    text
}
