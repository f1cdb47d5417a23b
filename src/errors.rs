use thiserror::Error;

/// Error type that captures invalid ledger operations.
///
/// Insufficient funds is deliberately not represented here: `withdraw` and
/// `transfer` report it through their boolean success value with no state
/// change, so only malformed requests become errors.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
}

/// Error type for spend-chart rendering failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("No categories to chart")]
    NoCategories,
    #[error("Total expenses must be positive to compute shares")]
    NoExpenses,
}
