//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT rate bucket (Dutch rates)
///
/// Declaration order is ascending by percentage so `Ord` sorts buckets the
/// way they appear on reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatRate {
    /// 0% (exempt)
    Zero,
    /// 9% (low rate: food)
    Low,
    /// 21% (standard rate: drinks, default for a bar)
    #[default]
    Standard,
}

impl VatRate {
    /// Percentage as shown on receipts
    pub fn percent(self) -> u32 {
        match self {
            VatRate::Zero => 0,
            VatRate::Low => 9,
            VatRate::Standard => 21,
        }
    }

    /// Rate as a fraction, e.g. `0.21`
    pub fn fraction(self) -> Decimal {
        Decimal::new(self.percent() as i64, 2)
    }
}

/// Product entity
///
/// Prices are VAT-inclusive. A sale copies price and VAT rate into the
/// transaction, so later edits never touch past tickets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// VAT-inclusive unit price
    pub price: Decimal,
    pub vat_rate: VatRate,
    /// Display color for the product grid (hex, e.g. "#E8A33D")
    pub color: String,
    /// Remaining stock; None when untracked
    pub stock: Option<i32>,
    /// Last modified (Unix millis)
    pub updated_at: i64,
}

impl Product {
    /// Register a sale of `quantity` units: decrements tracked stock
    /// (clamped at zero) and touches the modification timestamp.
    /// A no-op on the stock counter when the product is untracked.
    pub fn register_sale(&mut self, quantity: i32, at: i64) {
        if let Some(stock) = self.stock {
            self.stock = Some((stock - quantity).max(0));
        }
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    #[test]
    fn test_vat_rate_order_matches_percent() {
        assert!(VatRate::Zero < VatRate::Low);
        assert!(VatRate::Low < VatRate::Standard);
        assert_eq!(VatRate::Standard.fraction(), Decimal::from_str("0.21").unwrap());
    }

    #[test]
    fn test_vat_rate_serde_names() {
        assert_eq!(
            serde_json::to_string(&VatRate::Standard).unwrap(),
            "\"STANDARD\""
        );
    }

    #[test]
    fn test_register_sale_tracked_stock() {
        let mut p = Product {
            id: 1,
            name: "Pils".into(),
            price: Decimal::new(250, 2),
            vat_rate: VatRate::Standard,
            color: "#E8A33D".into(),
            stock: Some(10),
            updated_at: 0,
        };
        p.register_sale(3, 99);
        assert_eq!(p.stock, Some(7));
        assert_eq!(p.updated_at, 99);

        p.register_sale(100, 100);
        assert_eq!(p.stock, Some(0));
    }

    #[test]
    fn test_register_sale_untracked_stock() {
        let mut p = Product {
            id: 1,
            name: "Pils".into(),
            price: Decimal::new(250, 2),
            vat_rate: VatRate::Standard,
            color: "#E8A33D".into(),
            stock: None,
            updated_at: 0,
        };
        p.register_sale(3, 99);
        assert_eq!(p.stock, None);
    }
}
