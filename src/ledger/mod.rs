//! Ledger domain models and helpers.

pub mod account;
pub mod transaction;

pub use account::Account;
pub use transaction::Transaction;

/// Rounds a monetary value to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
