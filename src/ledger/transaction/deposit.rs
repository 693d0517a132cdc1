use crate::ledger::{account::Account, error::LedgerError, Decimal};

/// A deposit request.
///
/// Deposits credit the account balance. They are only constrained by
/// the amount being strictly positive.
#[derive(Debug, Clone)]
pub struct Deposit {
    amount: Decimal,
}

impl Deposit {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub(super) fn apply(&self, account: &mut Account) -> Result<(), LedgerError> {
        account.deposit(self.amount)
    }
}
