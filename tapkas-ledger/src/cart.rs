//! Cart editing
//!
//! The cart is a value owned by the active sale flow: it has no durable
//! identity and every operation returns a new cart, leaving the input
//! untouched. Each line snapshots the product's name, price and VAT rate at
//! the moment it enters the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, VatRate};

/// One cart line: product snapshot + positive quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    /// VAT-inclusive unit price
    pub unit_price: Decimal,
    pub vat_rate: VatRate,
    pub quantity: i32,
}

impl CartLine {
    /// Gross line total (`unit_price × quantity`)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The in-progress cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Gross total across all lines
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of a product: increments the existing line, or appends
    /// a new line with quantity 1. Never mutates `self`.
    pub fn add_line(&self, product: &Product) -> Cart {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                vat_rate: product.vat_rate,
                quantity: 1,
            }),
        }
        Cart { lines }
    }

    /// Replace a line's quantity. `quantity <= 0` removes the line; an
    /// absent product id is a no-op.
    pub fn set_quantity(&self, product_id: i64, quantity: i32) -> Cart {
        let mut lines = self.lines.clone();
        if quantity <= 0 {
            lines.retain(|l| l.product_id != product_id);
        } else if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
        Cart { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, cents: i64) -> Product {
        Product {
            id,
            name: name.into(),
            price: Decimal::new(cents, 2),
            vat_rate: VatRate::Standard,
            color: "#FFFFFF".into(),
            stock: None,
            updated_at: 0,
        }
    }

    #[test]
    fn test_add_line_appends_then_increments() {
        let pils = product(1, "Pils", 250);
        let cart = Cart::new().add_line(&pils);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);

        let cart = cart.add_line(&pils);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Decimal::new(500, 2));
    }

    #[test]
    fn test_add_line_does_not_mutate_input() {
        let pils = product(1, "Pils", 250);
        let original = Cart::new().add_line(&pils);
        let _bigger = original.add_line(&pils);
        assert_eq!(original.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_line_snapshots_price() {
        let mut pils = product(1, "Pils", 250);
        let cart = Cart::new().add_line(&pils);
        // A later price edit must not reach the cart line
        pils.price = Decimal::new(300, 2);
        assert_eq!(cart.lines()[0].unit_price, Decimal::new(250, 2));
    }

    #[test]
    fn test_set_quantity_replaces() {
        let cart = Cart::new().add_line(&product(1, "Pils", 250));
        let cart = cart.set_quantity(1, 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let cart = Cart::new()
            .add_line(&product(1, "Pils", 250))
            .add_line(&product(2, "Cola", 220));
        let cart = cart.set_quantity(1, 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, 2);

        let cart = cart.set_quantity(2, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_product_is_noop() {
        let cart = Cart::new().add_line(&product(1, "Pils", 250));
        let same = cart.set_quantity(99, 4);
        assert_eq!(same, cart);
    }
}
