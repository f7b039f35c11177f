//! Ticket formatters
//!
//! Pure layout: model in, directive sequence out. The same sequence feeds
//! the screen preview and the ESC/POS encoder, so what the operator sees is
//! what the printer prints.

mod receipt;
mod report;

pub use receipt::{ReceiptOptions, ReceiptRenderer};
pub use report::SessionReportRenderer;
