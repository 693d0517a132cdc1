use crate::ledger::{account::Account, error::LedgerError, Decimal};

/// A withdrawal request.
///
/// Withdrawals debit the account balance. If the account does not have
/// sufficient funds, or a checking-account limit applies, the withdrawal fails.
#[derive(Debug, Clone)]
pub struct Withdrawal {
    amount: Decimal,
}

impl Withdrawal {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub(super) fn apply(&self, account: &mut Account) -> Result<(), LedgerError> {
        account.withdraw(self.amount)
    }
}
