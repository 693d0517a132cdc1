pub(crate) use clap::Parser;
use bank_ledger::{Decimal, LedgerConfig, WithdrawalLimits};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "A minimal interactive banking ledger",
    long_about = None,
    after_help = "MENU:\n    d  deposit      s  withdraw      e  statement\n    nu new client   nc new account   lc list accounts\n    q  quit\n\nLogs go to stderr; set RUST_LOG=info to see every operation."
)]
pub struct Args {
    /// Maximum amount of a single checking-account withdrawal
    #[arg(long, value_name = "AMOUNT", default_value = "500")]
    pub withdrawal_limit: Decimal,

    /// Maximum number of withdrawals per checking account
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub max_withdrawals: usize,

    /// Read menu input from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Write a CSV summary of all accounts to this file on exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

impl Args {
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            limits: WithdrawalLimits {
                per_withdrawal: self.withdrawal_limit,
                max_withdrawals: self.max_withdrawals,
            },
        }
    }
}
