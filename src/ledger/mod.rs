//! Ledger module.
//!
//! This module contains the core banking model including:
//! - `Session` - The registry of clients and accounts for one process run
//! - `Client` - Account owner and entry point for transactions
//! - `Account` - Balance, history and optional checking-account limits
//! - `Transaction` types - Deposit, Withdrawal
//! - `Error` types - Validation and lookup errors

mod account;
mod client;
mod error;
mod history;
mod session;
mod transaction;

pub use rust_decimal::Decimal;

pub use account::{Account, AccountNumber, WithdrawalLimits, BRANCH};
pub use client::{Client, TaxId};
pub use error::{Error, LedgerError};
pub use history::{History, HistoryRecord};
pub use session::{AccountSummary, LedgerConfig, Session, Statement};
pub use transaction::{Deposit, Transaction, TransactionKind, Withdrawal};
