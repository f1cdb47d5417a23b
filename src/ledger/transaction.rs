use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single signed ledger entry, immutable once appended.
///
/// Positive amounts are credits (deposits and incoming transfers); negative
/// amounts are debits (withdrawals and outgoing transfers).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub recorded_on: NaiveDate,
}

impl Transaction {
    /// Creates an entry dated today (UTC).
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            recorded_on: Utc::now().date_naive(),
        }
    }

    /// Whether this entry counts towards the account's expenses.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}
