//! Line-oriented chat session against the in-memory store.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;

use cuan_chat::{Interpreter, ParsedResult, TransactionDraft};
use cuan_core::{MonthKey, budget_alerts, format_id};

use crate::export;
use crate::store::MemoryStore;

const BANNER: &str = "💬 CuanChat — catat pengeluaran lewat chat.
   Contoh: \"nasi goreng 15rb\", \"grab 24k gopay\", \"sisa budget makan?\", \"cek saldo\"
   Perintah: /budgets, /export <file.csv>, /quit";

pub fn run(user_id: i64) -> Result<()> {
    let mut store = MemoryStore::seeded(user_id);
    let today = Local::now().date_naive();
    let month = MonthKey::from_date(today);
    // demo budget so budget queries have something to answer
    store.set_budget(user_id, "Makanan & Minuman", month, 1_000_000.0)?;

    println!("{BANNER}");
    println!("   (demo: budget Makanan & Minuman Rp1.000.000 bulan ini)\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(cmd) = line.strip_prefix('/') {
            if run_command(cmd, &mut store, user_id, month)? {
                break;
            }
            continue;
        }

        match Interpreter::new(&store).interpret(line, user_id)? {
            ParsedResult::Query { response } | ParsedResult::Error { response } => {
                println!("{response}\n");
            }
            ParsedResult::Transaction { data } => {
                print_draft(&data);
                let outcome = store.save_draft(&data, user_id, today)?;
                match (outcome.wallet_balance, data.wallet_name.as_deref()) {
                    (Some(balance), Some(wallet)) => {
                        println!("✅ Tersimpan. Saldo {wallet}: Rp{}\n", format_id(balance));
                    }
                    _ => println!("✅ Tersimpan.\n"),
                }
            }
        }
    }

    Ok(())
}

fn print_draft(data: &TransactionDraft) {
    println!("📝 {} — Rp{}", data.description, format_id(data.amount));
    println!(
        "   Kategori: {}  Dompet: {}",
        data.category_name.as_deref().unwrap_or("-"),
        data.wallet_name.as_deref().unwrap_or("-"),
    );
}

/// Returns true when the session should end.
fn run_command(cmd: &str, store: &mut MemoryStore, user_id: i64, month: MonthKey) -> Result<bool> {
    let mut parts = cmd.split_whitespace();
    match parts.next() {
        Some("quit") | Some("exit") => return Ok(true),
        Some("budgets") => {
            let rows = store.month_budget_rows(user_id, month);
            if rows.is_empty() {
                println!("Belum ada budget bulan ini.\n");
                return Ok(false);
            }
            for row in &rows {
                println!(
                    "{} {}: terpakai Rp{} dari Rp{}",
                    row.category_icon,
                    row.category_name,
                    format_id(row.status.spent),
                    format_id(row.status.allocated),
                );
            }
            let alerts = budget_alerts(&rows);
            if alerts.is_empty() {
                println!("Semua budget masih aman.\n");
            } else {
                for row in alerts {
                    println!("⚠️ Budget {} hampir habis!", row.category_name);
                }
                println!();
            }
        }
        Some("export") => match parts.next() {
            Some(path) => {
                let rows = store.export_rows(user_id);
                let written = export::export_to_path(Path::new(path), &rows)?;
                println!("📄 {written} transaksi diekspor ke {path}\n");
            }
            None => println!("Pemakaian: /export <file.csv>\n"),
        },
        _ => println!("Perintah tidak dikenal. Coba /budgets, /export, /quit\n"),
    }
    Ok(false)
}
