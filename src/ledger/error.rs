use super::account::AccountNumber;
use super::Decimal;

/// Top-level error type for I/O-facing ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Recoverable errors raised while validating or applying an operation.
/// None of these abort the session: they are reported and the caller moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("Deposit of {amount} would overflow the balance")]
    AmountOverflow { amount: Decimal },

    #[error("Insufficient funds: account {account} has {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Withdrawal of {requested} exceeds the limit of {limit}")]
    LimitExceeded { requested: Decimal, limit: Decimal },

    #[error("Maximum number of withdrawals reached ({max})")]
    MaxWithdrawalsReached { max: usize },

    #[error("Client {tax_id} not found")]
    ClientNotFound { tax_id: String },

    #[error("Client {tax_id} has no account")]
    AccountNotFound { tax_id: String },

    #[error("A client with tax ID {tax_id} already exists")]
    DuplicateClient { tax_id: String },
}
