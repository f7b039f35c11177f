//! Error types for the ledger

use thiserror::Error;

/// Ledger error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Checkout was attempted on a cart without lines
    #[error("cart is empty")]
    EmptyCart,

    /// A cart line failed validation (non-positive quantity/price, bounds)
    #[error("invalid line: {0}")]
    InvalidLine(String),

    /// A mutation or reconciliation was attempted on a closed session
    #[error("session {0} is closed")]
    SessionClosed(i64),

    /// Input validation failure outside of cart lines
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
