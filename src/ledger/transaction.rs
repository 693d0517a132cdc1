mod deposit;
mod withdrawal;

pub use deposit::Deposit;
pub use withdrawal::Withdrawal;

use super::account::Account;
use super::error::LedgerError;
use super::Decimal;
use serde::Serialize;

/// Tag identifying the variant of a recorded transaction.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A requested operation against an account. The amount is fixed at
/// construction; validation happens when the transaction is registered.
#[derive(Debug, Clone)]
pub enum Transaction {
    Deposit(Deposit),
    Withdrawal(Withdrawal),
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Transaction::Deposit(Deposit::new(amount))
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction::Withdrawal(Withdrawal::new(amount))
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(d) => d.amount(),
            Transaction::Withdrawal(w) => w.amount(),
        }
    }

    /// Apply this transaction to `account` and, only if the account accepted
    /// it, append it to the account's history.
    ///
    /// A rejected transaction leaves both balance and history untouched, so the
    /// history is always exactly the list of operations that moved money.
    pub fn register(&self, account: &mut Account) -> Result<(), LedgerError> {
        log::trace!("Registering transaction: {self} on account {}", account.number());

        let outcome = match self {
            Transaction::Deposit(deposit) => deposit.apply(account),
            Transaction::Withdrawal(withdrawal) => withdrawal.apply(account),
        };

        if let Err(e) = outcome {
            log::warn!("[account {}] - Rejected {}: {e}", account.number(), self.kind());
            return Err(e);
        }

        account.history_mut().add_transaction(self);
        log::info!(
            "[account {}] {} of {} registered, balance={}",
            account.number(),
            self.kind(),
            self.amount(),
            account.balance()
        );
        Ok(())
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transaction::Deposit(d) => write!(f, "[deposit] amount={}", d.amount()),
            Transaction::Withdrawal(w) => write!(f, "[withdrawal] amount={}", w.amount()),
        }
    }
}
