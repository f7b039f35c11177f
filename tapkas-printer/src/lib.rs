//! # tapkas-printer
//!
//! Receipt/report printing pipeline for the tapkas bar POS.
//!
//! ## Scope
//!
//! This crate handles HOW a ticket reaches paper (or the screen):
//! - Print directives: a style-tagged abstract line list
//! - Formatters: transaction receipt and session Z-report -> directives
//! - ESC/POS encoding of a directive sequence (Windows-1252 text)
//! - Chunked, paced delivery over a wireless printer link
//!
//! WHAT the numbers are stays in `tapkas-ledger`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tapkas_printer::{EscPosEncoder, PrinterLink, PrintService, ReceiptRenderer};
//!
//! let link = Arc::new(PrinterLink::new(selector));
//! link.connect().await?;
//!
//! let service = PrintService::new(link);
//! service.print_receipt(&transaction, &company, &Default::default()).await?;
//! service.open_drawer().await?;
//! ```

pub mod directive;
pub mod encoding;
pub mod error;
pub mod escpos;
pub mod format;
pub mod preview;
pub mod service;
pub mod transport;

// Re-exports
pub use directive::{Align, Directive, DirectiveBuilder, RuleStyle, Style, TextSize};
pub use encoding::{encode_text, pad_text, text_width, truncate_text};
pub use error::{PrintError, PrintResult, TransportError};
pub use escpos::{EscPosEncoder, drawer_kick};
pub use format::{ReceiptOptions, ReceiptRenderer, SessionReportRenderer};
pub use service::PrintService;
pub use transport::{
    CANDIDATE_SERVICES, ChannelProps, DeviceSelector, LinkConfig, LinkDevice, LinkState,
    PrinterLink, ServiceChannels, WriteChannel,
};

/// Reference paper width in characters (58mm paper)
pub const PAPER_WIDTH: usize = 32;
