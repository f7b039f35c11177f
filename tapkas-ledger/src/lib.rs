//! # tapkas-ledger
//!
//! Pure financial core of the tapkas bar point-of-sale.
//!
//! ## Scope
//!
//! This crate decides WHAT the numbers are, with no I/O:
//! - Cart editing (persistent values, never mutated in place)
//! - Checkout: cart -> immutable VAT-split `Transaction`
//! - `DailySummary`: fold of a transaction stream
//! - `SalesSession`: cash float, manual cash movements, reconciliation
//!
//! Persistence and printing live elsewhere: callers hand sessions and
//! transactions in as values and get values back.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use cart::{Cart, CartLine};
pub use checkout::checkout;
pub use error::{LedgerError, LedgerResult};
pub use models::{
    CashDirection, CashEntry, CashManagement, CashReconciliation, CompanyDetails, DailySummary,
    PaymentMethod, Product, SalesSession, SessionStatus, SoldLine, Transaction, VatBucket, VatRate,
};
