//! Unified error type for the ledger core.
//!
//! Every fallible operation in the crate returns [`Result`]. Validation and
//! not-found conditions are raised before any mutation is committed; database
//! failures leave the enclosing transaction uncommitted.

use thiserror::Error;

/// All error conditions surfaced by the ledger core.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was empty or otherwise malformed.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the failed validation
        message: String,
    },

    /// A transaction amount was non-positive or non-finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// The referenced account does not exist.
    #[error("Account not found: {id}")]
    AccountNotFound {
        /// The account id that failed to resolve
        id: i64,
    },

    /// The referenced transaction does not exist.
    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The transaction id that failed to resolve
        id: i64,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// Underlying persistence failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error outside the database layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
