use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{round_to_cents, Transaction};

/// Statement and chart rendering both assume this fixed line width.
const LINE_WIDTH: usize = 30;

/// A named spending category with an append-only ledger of signed entries.
///
/// Fields stay private so every mutation flows through [`Account::deposit`],
/// [`Account::withdraw`], or [`Account::transfer`], keeping the stored balance
/// equal to the sum of entry amounts at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    id: Uuid,
    name: String,
    balance: f64,
    entries: Vec<Transaction>,
}

impl Account {
    /// Creates a new account with a zero balance and an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ledger entries in chronological (insertion) order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Whether the current balance covers `amount`.
    pub fn check_funds(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Records a credit entry. Zero is accepted; negative or non-finite
    /// amounts are refused.
    pub fn deposit(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        validate_amount(amount)?;
        self.record(amount, description);
        tracing::debug!(account = %self.name, amount, "deposit recorded");
        Ok(())
    }

    /// Records a debit entry when funds suffice.
    ///
    /// Returns `Ok(false)` and leaves the account untouched when the balance
    /// is short; errors only on negative or non-finite amounts.
    pub fn withdraw(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<bool, LedgerError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(account = %self.name, amount, "withdrawal refused: insufficient funds");
            return Ok(false);
        }
        self.record(-amount, description);
        tracing::debug!(account = %self.name, amount, "withdrawal recorded");
        Ok(true)
    }

    /// Moves `amount` from this account into `other` as one atomic-in-effect
    /// step: either both ledgers gain an entry or neither does.
    ///
    /// Both accounts are borrowed exclusively, so a half-applied transfer is
    /// unobservable and transferring an account into itself does not compile.
    pub fn transfer(&mut self, amount: f64, other: &mut Account) -> Result<bool, LedgerError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(
                from = %self.name,
                to = %other.name,
                amount,
                "transfer refused: insufficient funds"
            );
            return Ok(false);
        }
        self.record(-amount, format!("Transfer to {}", other.name));
        other.record(amount, format!("Transfer from {}", self.name));
        tracing::debug!(from = %self.id, to = %other.id, amount, "transfer recorded");
        Ok(true)
    }

    /// Current balance rounded to two decimal places. The stored value stays
    /// unrounded.
    pub fn balance(&self) -> f64 {
        round_to_cents(self.balance)
    }

    /// Sum of the absolute values of all debit entries, rounded to two
    /// decimal places. Credits never count.
    pub fn expenses(&self) -> f64 {
        let debits: f64 = self
            .entries
            .iter()
            .filter(|entry| entry.is_expense())
            .map(|entry| -entry.amount)
            .sum();
        round_to_cents(debits)
    }

    fn record(&mut self, amount: f64, description: impl Into<String>) {
        self.entries.push(Transaction::new(amount, description));
        self.balance += amount;
        debug_assert!(self.balance_matches_entries());
    }

    fn balance_matches_entries(&self) -> bool {
        let total: f64 = self.entries.iter().map(|entry| entry.amount).sum();
        total == self.balance
    }
}

impl crate::chart::ExpenseSource for Account {
    fn label(&self) -> &str {
        &self.name
    }

    fn expenses(&self) -> f64 {
        Account::expenses(self)
    }
}

/// Renders the fixed-width account statement: the name centered between `*`
/// padding, one line per entry with the amount right-aligned at column 30,
/// and a closing total. No trailing newline.
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(format!("{:*^width$}", self.name, width = LINE_WIDTH));
        for entry in &self.entries {
            lines.push(statement_line(entry));
        }
        lines.push(format!("Total: {:.2}", self.balance));
        f.write_str(&lines.join("\n"))
    }
}

fn statement_line(entry: &Transaction) -> String {
    let amount = format!("{:.2}", entry.amount);
    // Leave at least one space between the description and the amount.
    let max_description = LINE_WIDTH.saturating_sub(amount.len() + 1);
    let description: String = entry.description.chars().take(max_description).collect();
    let gap = LINE_WIDTH.saturating_sub(amount.len() + description.chars().count());
    format!("{}{}{}", description, " ".repeat(gap), amount)
}

fn validate_amount(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}
