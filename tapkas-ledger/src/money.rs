//! Money calculation utilities using rust_decimal for precision
//!
//! All amounts are `Decimal` rounded half-up to 2 decimal places. The VAT
//! split uses inclusive-price back-calculation: shelf prices already contain
//! VAT, so the net base is derived from the gross, never the other way
//! around. The VAT rate is always the one stored on the line itself.

use rust_decimal::prelude::*;

use crate::error::{LedgerError, LedgerResult};
use crate::models::VatRate;

/// Monetary rounding: 2 decimal places, half-up
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price (€1,000,000)
pub const MAX_PRICE: i64 = 1_000_000;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Round a monetary value to 2 decimal places (half-up)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Split a VAT-inclusive gross amount into (net, vat) for a rate.
///
/// `vat = gross - gross / (1 + rate)`, rounded to 2 decimals; the net is the
/// remainder so that `net + vat == gross` exactly.
pub fn split_inclusive(gross: Decimal, rate: VatRate) -> (Decimal, Decimal) {
    let divisor = Decimal::ONE + rate.fraction();
    let vat = round_money(gross - gross / divisor);
    (gross - vat, vat)
}

/// Validate a unit price: non-negative and within bounds
pub fn validate_price(price: Decimal, field: &str) -> LedgerResult<()> {
    if price.is_sign_negative() {
        return Err(LedgerError::Validation(format!(
            "{field} must be non-negative, got {price}"
        )));
    }
    if price > Decimal::from(MAX_PRICE) {
        return Err(LedgerError::Validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate a cash amount handed in from the operator (float, counted cash)
pub fn validate_cash(value: Decimal, field: &str) -> LedgerResult<()> {
    validate_price(value, field)
}

/// Format an amount the way it appears on receipts: comma decimal separator
///
/// `2.5` -> `"2,50"`
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value)).replace('.', ",")
}

/// Format an amount with the currency sign: `"2,50 €"`
pub fn format_eur(value: Decimal) -> String {
    format!("{} €", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec("1.005")), dec("1.01"));
        assert_eq!(round_money(dec("1.004")), dec("1.00"));
        assert_eq!(round_money(dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn test_split_inclusive_standard_rate() {
        // 5.00 gross at 21%: net 4.13, vat 0.87
        let (net, vat) = split_inclusive(dec("5.00"), VatRate::Standard);
        assert_eq!(vat, dec("0.87"));
        assert_eq!(net, dec("4.13"));
        assert_eq!(net + vat, dec("5.00"));
    }

    #[test]
    fn test_split_inclusive_zero_rate() {
        let (net, vat) = split_inclusive(dec("3.00"), VatRate::Zero);
        assert_eq!(vat, Decimal::ZERO);
        assert_eq!(net, dec("3.00"));
    }

    #[test]
    fn test_split_reconstructs_gross() {
        for gross in ["0.01", "2.50", "19.99", "123.45"] {
            for rate in [VatRate::Zero, VatRate::Low, VatRate::Standard] {
                let g = dec(gross);
                let (net, vat) = split_inclusive(g, rate);
                assert_eq!(net + vat, g, "gross {gross} at {rate:?}");
            }
        }
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(dec("2.50"), "price").is_ok());
        assert!(validate_price(Decimal::ZERO, "price").is_ok());
        assert!(validate_price(dec("-0.01"), "price").is_err());
        assert!(validate_price(dec("1000001"), "price").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("2.5")), "2,50");
        assert_eq!(format_eur(dec("100")), "100,00 €");
        assert_eq!(format_amount(dec("-2")), "-2,00");
    }
}
