//! Checkout: cart -> immutable transaction
//!
//! Validation happens before anything is created; a failed checkout leaves
//! no partial transaction behind.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::cart::Cart;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{PaymentMethod, SoldLine, Transaction, VatBucket, VatRate};
use crate::money::{self, MAX_PRICE, MAX_QUANTITY};
use crate::util;

/// Turn a cart into a `Transaction`, snapshotting every line at call time.
///
/// The VAT split is computed per rate bucket from each line's own stored
/// rate (inclusive pricing): `vat = gross − gross / (1 + rate)`, rounded to
/// 2 decimals per bucket. The subtotal is the remainder, so
/// `subtotal + Σ buckets == Σ line totals` holds exactly.
pub fn checkout(
    cart: &Cart,
    session_id: i64,
    payment_method: PaymentMethod,
    timestamp: i64,
    seller: Option<String>,
) -> LedgerResult<Transaction> {
    if cart.is_empty() {
        return Err(LedgerError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(cart.lines().len());
    let mut gross_per_rate: BTreeMap<VatRate, Decimal> = BTreeMap::new();

    for line in cart.lines() {
        if line.quantity <= 0 {
            return Err(LedgerError::InvalidLine(format!(
                "quantity must be positive, got {} for {}",
                line.quantity, line.name
            )));
        }
        if line.quantity > MAX_QUANTITY {
            return Err(LedgerError::InvalidLine(format!(
                "quantity exceeds maximum allowed ({}), got {} for {}",
                MAX_QUANTITY, line.quantity, line.name
            )));
        }
        if line.unit_price <= Decimal::ZERO {
            return Err(LedgerError::InvalidLine(format!(
                "price must be positive, got {} for {}",
                line.unit_price, line.name
            )));
        }
        if line.unit_price > Decimal::from(MAX_PRICE) {
            return Err(LedgerError::InvalidLine(format!(
                "price exceeds maximum allowed ({}), got {} for {}",
                MAX_PRICE, line.unit_price, line.name
            )));
        }

        *gross_per_rate.entry(line.vat_rate).or_default() += line.line_total();
        lines.push(SoldLine {
            name: line.name.clone(),
            unit_price: line.unit_price,
            vat_rate: line.vat_rate,
            quantity: line.quantity,
        });
    }

    let mut subtotal = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut vat_buckets = Vec::with_capacity(gross_per_rate.len());
    for (rate, gross) in gross_per_rate {
        let (net, vat) = money::split_inclusive(gross, rate);
        subtotal += net;
        total += gross;
        vat_buckets.push(VatBucket {
            rate,
            net,
            vat,
            gross,
        });
    }

    let tx = Transaction {
        id: util::ticket_id(),
        session_id,
        timestamp,
        date: util::format_receipt_date(timestamp),
        lines,
        subtotal,
        vat_buckets,
        total,
        payment_method,
        seller,
        updated_at: timestamp,
    };

    debug!(
        ticket = %tx.id,
        session_id,
        total = %tx.total,
        method = ?payment_method,
        "checkout completed"
    );
    Ok(tx)
}
