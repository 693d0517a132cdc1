use super::client::TaxId;
use super::error::LedgerError;
use super::history::History;
use super::Decimal;

pub type AccountNumber = u32;

/// Every account belongs to the same branch.
pub const BRANCH: &str = "0001";

/// Withdrawal gates applied by checking accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalLimits {
    /// Maximum amount of a single withdrawal
    pub per_withdrawal: Decimal,
    /// Maximum number of successful withdrawals over the account's lifetime
    pub max_withdrawals: usize,
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

/// A client's account: a non-negative balance plus the history of every
/// transaction that changed it.
///
/// An account with `limits` set behaves as a checking account.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    balance: Decimal,
    holder: TaxId,
    history: History,
    limits: Option<WithdrawalLimits>,
}

impl Account {
    /// Create an unrestricted account bound to `holder`.
    pub fn new_account(holder: TaxId, number: AccountNumber) -> Self {
        log::debug!("Created account {number} for client {holder}");
        Self {
            number,
            branch: BRANCH,
            balance: Decimal::ZERO,
            holder,
            history: History::new(),
            limits: None,
        }
    }

    /// Create a checking account bound to `holder`.
    pub fn new_checking(holder: TaxId, number: AccountNumber, limits: WithdrawalLimits) -> Self {
        let mut account = Self::new_account(holder, number);
        account.limits = Some(limits);
        account
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        self.branch
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Tax ID of the owning client
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn limits(&self) -> Option<&WithdrawalLimits> {
        self.limits.as_ref()
    }

    pub(super) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Debit the account.
    ///
    /// Checking accounts first reject amounts above the ceiling, then reject
    /// once the withdrawal count is exhausted. Only then are the amount and
    /// the balance checked. Nothing is mutated unless every check passes.
    pub(super) fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if let Some(limits) = self.limits {
            if amount > limits.per_withdrawal {
                return Err(LedgerError::LimitExceeded {
                    requested: amount,
                    limit: limits.per_withdrawal,
                });
            }

            if self.history.withdrawal_count() >= limits.max_withdrawals {
                return Err(LedgerError::MaxWithdrawalsReached {
                    max: limits.max_withdrawals,
                });
            }
        }

        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount { amount });
        }

        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.number,
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance = (self.balance - amount).normalize();
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance ({}) went negative",
            self.balance
        );
        Ok(())
    }

    /// Credit the account.
    pub(super) fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow { amount })?;
        self.balance = balance.normalize();
        Ok(())
    }
}
