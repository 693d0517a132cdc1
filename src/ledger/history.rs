use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use super::transaction::{Transaction, TransactionKind};
use super::Decimal;

/// Capture format for history timestamps
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

fn serialize_timestamp<S: Serializer>(
    value: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
}

/// A single executed transaction as recorded in an account's history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    kind: TransactionKind,
    amount: Decimal,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<Local>,
}

impl HistoryRecord {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// When the transaction was registered (not when it took economic effect)
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Append-only, insertion-ordered log of the transactions applied to one account.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of withdrawals recorded so far.
    /// Only successful withdrawals are ever recorded, so this is the count
    /// of withdrawals that actually moved money.
    pub fn withdrawal_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind == TransactionKind::Withdrawal)
            .count()
    }

    pub(super) fn add_transaction(&mut self, transaction: &Transaction) {
        let record = HistoryRecord {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: Local::now(),
        };
        log::trace!(
            "[history] appended {} {} (#{})",
            record.kind,
            record.amount,
            self.records.len() + 1
        );
        self.records.push(record);
    }
}
