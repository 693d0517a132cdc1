use std::fmt;
use std::io::Write;

use serde::{Serialize, Serializer};

use super::account::{Account, AccountNumber, WithdrawalLimits};
use super::client::Client;
use super::error::{Error, LedgerError};
use super::transaction::Transaction;
use super::Decimal;

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Settings applied to accounts opened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Limits given to every new checking account
    pub limits: WithdrawalLimits,
}

/// The registry of clients and accounts for one process run.
///
/// Clients and accounts are only ever added; nothing is persisted.
#[derive(Debug, Default)]
pub struct Session {
    config: LedgerConfig,
    clients: Vec<Client>,
    /// Every account in creation order
    accounts: Vec<Account>,
}

impl Session {
    /// Create an empty `Session` using `config` for new accounts
    pub fn new(config: LedgerConfig) -> Self {
        log::trace!("Session initialized with {config:?}");
        Self {
            config,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Register a new client. Tax IDs are unique within a session.
    pub fn create_client(
        &mut self,
        tax_id: &str,
        name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<&Client, LedgerError> {
        if self.find_client(tax_id).is_ok() {
            log::warn!("[client {tax_id}] - Skipped: already registered");
            return Err(LedgerError::DuplicateClient {
                tax_id: tax_id.to_string(),
            });
        }

        self.clients.push(Client::new(
            tax_id.to_string(),
            name.to_string(),
            birth_date.to_string(),
            address.to_string(),
        ));
        log::info!("[client {tax_id}] created ({} clients)", self.clients.len());
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Look up a client by exact tax ID
    pub fn find_client(&self, tax_id: &str) -> Result<&Client, LedgerError> {
        self.clients
            .iter()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound {
                tax_id: tax_id.to_string(),
            })
    }

    /// Open a checking account for an existing client.
    /// Accounts are numbered sequentially from 1 across the whole session.
    #[allow(clippy::cast_possible_truncation)]
    pub fn create_account(&mut self, tax_id: &str) -> Result<AccountNumber, LedgerError> {
        let next = self.accounts.len() as AccountNumber + 1;
        let limits = self.config.limits;

        let client = self
            .clients
            .iter_mut()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound {
                tax_id: tax_id.to_string(),
            })?;

        let account = Account::new_checking(client.tax_id().to_string(), next, limits);
        client.add_account(account.number());
        self.accounts.push(account);

        log::info!("[client {tax_id}] opened account {next}");
        Ok(next)
    }

    /// The account every operation for `tax_id` acts on: the client's first one.
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account, LedgerError> {
        let client = self.find_client(tax_id)?;
        let number = Self::first_account_of(client)?;
        self.accounts
            .iter()
            .find(|account| account.number() == number)
            .ok_or_else(|| LedgerError::AccountNotFound {
                tax_id: tax_id.to_string(),
            })
    }

    pub fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.perform(tax_id, &Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.perform(tax_id, &Transaction::withdrawal(amount))
    }

    /// Resolve the client and its primary account, then let the client
    /// execute `transaction` against it.
    pub fn perform(&mut self, tax_id: &str, transaction: &Transaction) -> Result<(), LedgerError> {
        let client = self
            .clients
            .iter()
            .find(|client| client.tax_id() == tax_id)
            .ok_or_else(|| LedgerError::ClientNotFound {
                tax_id: tax_id.to_string(),
            })?;
        let number = Self::first_account_of(client)?;
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| LedgerError::AccountNotFound {
                tax_id: tax_id.to_string(),
            })?;

        client.perform_transaction(account, transaction)
    }

    /// History and balance of the client's primary account
    pub fn statement(&self, tax_id: &str) -> Result<Statement<'_>, LedgerError> {
        let account = self.primary_account(tax_id)?;
        Ok(Statement { account })
    }

    /// One summary row per account, in creation order
    pub fn account_summaries(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .map(|account| AccountSummary {
                branch: account.branch(),
                number: account.number(),
                holder: self
                    .find_client(account.holder())
                    .map(|client| client.name().to_string())
                    .unwrap_or_default(),
                balance: account.balance(),
            })
            .collect()
    }

    /// Write the account summaries to any sink (Stdout, File, etc.) as CSV.
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.accounts.len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for summary in self.account_summaries() {
            csv_writer.serialize(summary)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Write the primary account's history to any sink as CSV, oldest first.
    pub fn export_history<W: Write>(&self, tax_id: &str, writer: W) -> Result<(), Error> {
        let account = self.primary_account(tax_id)?;
        log::info!(
            "Exporting {} history records of account {}",
            account.history().len(),
            account.number()
        );

        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in account.history().records() {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    fn first_account_of(client: &Client) -> Result<AccountNumber, LedgerError> {
        client
            .accounts()
            .first()
            .copied()
            .ok_or_else(|| LedgerError::AccountNotFound {
                tax_id: client.tax_id().to_string(),
            })
    }
}

/// Listing entry for one account.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountSummary {
    pub branch: &'static str,
    pub number: AccountNumber,
    pub holder: String,
    #[serde(serialize_with = "serialize_decimal_2dp")]
    pub balance: Decimal,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.number)?;
        write!(f, "Holder:\t\t{}", self.holder)
    }
}

/// Printable extract of one account.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    account: &'a Account,
}

impl Statement<'_> {
    pub fn account(&self) -> &Account {
        self.account
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        let history = self.account.history();
        if history.is_empty() {
            writeln!(f, "No transactions were made.")?;
        } else {
            for record in history.records() {
                writeln!(f, "\n{}:\n\t$ {:.2}", record.kind(), record.amount())?;
            }
        }
        writeln!(f, "\nBalance:\n\t$ {:.2}", self.account.balance())?;
        write!(f, "===========================================")
    }
}
