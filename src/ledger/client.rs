use super::account::{Account, AccountNumber};
use super::error::LedgerError;
use super::transaction::Transaction;

pub type TaxId = String;

/// An individual bank client.
///
/// Accounts are referenced by number; the `Session` owns the account values.
#[derive(Debug, Clone)]
pub struct Client {
    tax_id: TaxId,
    name: String,
    birth_date: String,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(tax_id: TaxId, name: String, birth_date: String, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned account numbers in the order they were added
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Execute `transaction` against one of this client's accounts.
    pub fn perform_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), LedgerError> {
        log::trace!(
            "[client {}] requested {transaction} on account {}",
            self.tax_id,
            account.number()
        );
        transaction.register(account)
    }

    /// Attach an account. The same number may be added twice.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client() -> Client {
        Client::new(
            "12345678900".to_string(),
            "Ana Souza".to_string(),
            "01-02-1990".to_string(),
            "Rua A, 1 - Centro - Recife/PE".to_string(),
        )
    }

    #[test]
    fn test_new_client_has_no_accounts() {
        let client = client();
        assert_eq!(client.tax_id(), "12345678900");
        assert_eq!(client.name(), "Ana Souza");
        assert_eq!(client.birth_date(), "01-02-1990");
        assert_eq!(client.address(), "Rua A, 1 - Centro - Recife/PE");
        assert!(client.accounts().is_empty());
    }

    #[test]
    fn test_add_account_keeps_order_and_duplicates() {
        let mut client = client();
        client.add_account(2);
        client.add_account(1);
        client.add_account(2);

        assert_eq!(client.accounts(), &[2, 1, 2]);
    }

    #[test]
    fn test_perform_transaction_registers_on_account() {
        let client = client();
        let mut account = Account::new_account(client.tax_id().to_string(), 1);

        client
            .perform_transaction(&mut account, &Transaction::deposit(dec!(80)))
            .unwrap();
        let result = client.perform_transaction(&mut account, &Transaction::withdrawal(dec!(100)));

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(account.balance(), dec!(80));
        assert_eq!(account.history().len(), 1);
    }
}
