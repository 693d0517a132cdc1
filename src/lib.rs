//! A minimal in-memory retail banking ledger.
//!
//! Clients own accounts, accounts keep a balance and an append-only history,
//! and deposits/withdrawals are registered through the owning client. Checking
//! accounts additionally gate withdrawals by a per-transaction ceiling and a
//! lifetime withdrawal count.

mod ledger;

pub use ledger::*;
