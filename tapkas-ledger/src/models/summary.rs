//! Daily Summary Model
//!
//! The summary is a cache over a session's transactions, never a source of
//! truth: it must always equal `DailySummary::fold` over the transaction
//! set. `SalesSession` re-folds on every mutation to keep that invariant.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::VatRate;
use super::transaction::{PaymentMethod, Transaction};

/// Net/VAT/gross totals for one VAT rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatBucket {
    pub rate: VatRate,
    /// Net amount (before VAT)
    pub net: Decimal,
    /// VAT amount
    pub vat: Decimal,
    /// Gross amount (net + vat)
    pub gross: Decimal,
}

/// Session totals derived from the transaction stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Gross sales across all payment methods (omzet)
    pub total_sales: Decimal,
    pub transaction_count: i64,
    pub cash_total: Decimal,
    pub card_total: Decimal,
    /// VAT totals per rate bucket, ascending by rate
    pub vat_buckets: Vec<VatBucket>,
    /// Chronologically first ticket id in the session
    pub first_ticket: Option<String>,
    /// Chronologically last ticket id in the session
    pub last_ticket: Option<String>,
}

impl DailySummary {
    /// Fold a transaction stream into a summary.
    ///
    /// Transactions are ordered by timestamp first (stable: insertion order
    /// breaks ties) so first/last ticket ids are deterministic.
    pub fn fold(transactions: &[Transaction]) -> Self {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|tx| tx.timestamp);

        let mut summary = DailySummary::default();
        let mut buckets: BTreeMap<VatRate, (Decimal, Decimal)> = BTreeMap::new();

        for tx in &ordered {
            summary.total_sales += tx.total;
            summary.transaction_count += 1;
            match tx.payment_method {
                PaymentMethod::Cash => summary.cash_total += tx.total,
                PaymentMethod::Card => summary.card_total += tx.total,
            }
            for bucket in &tx.vat_buckets {
                let entry = buckets.entry(bucket.rate).or_default();
                entry.0 += bucket.net;
                entry.1 += bucket.vat;
            }
        }

        summary.vat_buckets = buckets
            .into_iter()
            .map(|(rate, (net, vat))| VatBucket {
                rate,
                net,
                vat,
                gross: net + vat,
            })
            .collect();

        summary.first_ticket = ordered.first().map(|tx| tx.id.clone());
        summary.last_ticket = ordered.last().map(|tx| tx.id.clone());
        summary
    }
}
