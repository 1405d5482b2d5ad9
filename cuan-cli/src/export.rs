//! CSV export of recorded transactions, same columns as the web export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use cuan_core::TxKind;

/// One transaction joined with its category and wallet names.
pub struct ExportRow {
    pub date: NaiveDate,
    pub description: String,
    pub kind: TxKind,
    pub category: Option<String>,
    pub wallet: Option<String>,
    pub amount: f64,
    pub notes: Option<String>,
}

/// Write rows as CSV, returning how many were written.
pub fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> Result<usize> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["Tanggal", "Deskripsi", "Tipe", "Kategori", "Dompet", "Nominal", "Catatan"])?;

    for row in rows {
        let kind = match row.kind {
            TxKind::Income => "Pemasukan",
            TxKind::Expense => "Pengeluaran",
        };
        w.write_record([
            row.date.to_string(),
            row.description.clone(),
            kind.to_string(),
            row.category.clone().unwrap_or_else(|| "-".to_string()),
            row.wallet.clone().unwrap_or_else(|| "-".to_string()),
            row.amount.to_string(),
            row.notes.clone().unwrap_or_default(),
        ])?;
    }

    w.flush()?;
    Ok(rows.len())
}

pub fn export_to_path(path: &Path, rows: &[ExportRow]) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, rows)
}
