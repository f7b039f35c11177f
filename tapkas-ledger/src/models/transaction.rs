//! Transaction Model
//!
//! A transaction is one completed sale. It is immutable after creation and
//! forms the append-only ledger: every amount is captured at sale time,
//! independent of later product edits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::VatRate;
use super::summary::VatBucket;

/// How a ticket was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
}

/// One sold line: name, price and VAT rate snapshotted at sale time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoldLine {
    pub name: String,
    /// VAT-inclusive unit price at sale time
    pub unit_price: Decimal,
    pub vat_rate: VatRate,
    pub quantity: i32,
}

impl SoldLine {
    /// Gross line total (`unit_price × quantity`)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A completed sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Ticket id (unique, human-legible, e.g. "T86930124801573")
    pub id: String,
    pub session_id: i64,
    /// Sale time (Unix millis)
    pub timestamp: i64,
    /// Formatted sale date for receipts (`dd-mm-yyyy HH:MM`)
    pub date: String,
    /// Sold lines in ring-up order
    pub lines: Vec<SoldLine>,
    /// Net amount (total minus VAT)
    pub subtotal: Decimal,
    /// VAT per rate bucket, ascending by rate
    pub vat_buckets: Vec<VatBucket>,
    /// Grand total: `subtotal + Σ vat_buckets`
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub seller: Option<String>,
    /// Last modified (Unix millis)
    pub updated_at: i64,
}

impl Transaction {
    /// Total VAT across all buckets
    pub fn vat_total(&self) -> Decimal {
        self.vat_buckets.iter().map(|b| b.vat).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_serde_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"CASH\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "\"CARD\"");
    }

    #[test]
    fn test_line_total() {
        let line = SoldLine {
            name: "Pils".into(),
            unit_price: Decimal::new(250, 2),
            vat_rate: VatRate::Standard,
            quantity: 2,
        };
        assert_eq!(line.line_total(), Decimal::new(500, 2));
    }
}
