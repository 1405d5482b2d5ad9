//! cuan: terminal chat client for the CuanChat interpreter.

mod chat;
mod export;
mod store;

use anyhow::Result;
use clap::Parser;

/// Catat pengeluaran dan cek budget lewat chat.
#[derive(Parser)]
#[command(name = "cuan", version, about)]
struct Cli {
    /// Account id to run the session as
    #[arg(long, default_value_t = 1)]
    user: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    chat::run(cli.user)
}
