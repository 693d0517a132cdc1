//! Basic example of using the `Session`.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::{Decimal, Session};

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut session = Session::default();
    session
        .create_client("12345678900", "Ana Souza", "01-02-1990", "Rua A, 1 - Centro - Recife/PE")
        .expect("Failed to create client");
    session
        .create_account("12345678900")
        .expect("Failed to create account");

    // Rejected operations are logged and leave the account untouched
    let operations = [
        ("deposit", Decimal::from(100)),
        ("withdrawal", Decimal::from(50)),
        ("withdrawal", Decimal::from(600)),
        ("withdrawal", Decimal::from(20)),
        ("withdrawal", Decimal::from(20)),
        ("withdrawal", Decimal::from(1)),
    ];
    for (kind, amount) in operations {
        let result = match kind {
            "deposit" => session.deposit("12345678900", amount),
            _ => session.withdraw("12345678900", amount),
        };
        println!("{kind} {amount}: {result:?}");
    }

    let statement = session
        .statement("12345678900")
        .expect("Failed to build statement");
    println!("\n{statement}");

    println!("\n=== History ===");
    session
        .export_history("12345678900", std::io::stdout())
        .expect("Failed to export history");

    println!("\n=== Accounts ===");
    session
        .export_accounts(std::io::stdout())
        .expect("Failed to export accounts");
}
