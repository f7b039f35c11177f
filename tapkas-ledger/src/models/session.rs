//! Sales Session Model
//!
//! A session is the open-to-close period during which tickets accumulate
//! against one cash float. Mutations go through `&mut self` methods that
//! re-fold the cached summary in the same call, so a session is never
//! observable with a summary that disagrees with its transaction set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::money;

use super::summary::DailySummary;
use super::transaction::Transaction;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Open,
    /// Terminal: a closed session is read-only
    Closed,
}

/// Direction of a manual cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashDirection {
    In,
    Out,
}

/// Manual cash movement, independent of sales (e.g. a change run)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashEntry {
    pub id: i64,
    pub session_id: i64,
    /// Unix millis
    pub timestamp: i64,
    pub direction: CashDirection,
    /// Always positive; the direction carries the sign
    pub amount: Decimal,
    pub reason: String,
}

/// Opening/closing/difference audit block recorded when a session closes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashManagement {
    pub opening: Decimal,
    pub closing: Option<Decimal>,
    pub difference: Option<Decimal>,
}

/// Result of comparing counted cash against the expectation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashReconciliation {
    pub expected: Decimal,
    pub counted: Decimal,
    /// `counted - expected`; negative means the drawer is short
    pub difference: Decimal,
}

/// A till session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSession {
    pub id: i64,
    /// Unix millis
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub status: SessionStatus,
    pub opening_float: Decimal,
    /// Cash counted at close
    pub counted_cash: Option<Decimal>,
    pub cash: CashManagement,
    summary: DailySummary,
    transactions: Vec<Transaction>,
    cash_entries: Vec<CashEntry>,
}

impl SalesSession {
    /// Open a new till session with the given cash float
    pub fn open(id: i64, opening_float: Decimal, at: i64) -> LedgerResult<Self> {
        money::validate_cash(opening_float, "opening_float")?;
        Ok(Self {
            id,
            start_time: at,
            end_time: None,
            status: SessionStatus::Open,
            opening_float,
            counted_cash: None,
            cash: CashManagement {
                opening: opening_float,
                closing: None,
                difference: None,
            },
            summary: DailySummary::default(),
            transactions: Vec::new(),
            cash_entries: Vec::new(),
        })
    }

    pub fn summary(&self) -> &DailySummary {
        &self.summary
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cash_entries(&self) -> &[CashEntry] {
        &self.cash_entries
    }

    pub fn is_closed(&self) -> bool {
        self.status == SessionStatus::Closed
    }

    /// Append a completed transaction and re-fold the summary
    pub fn record_transaction(&mut self, tx: Transaction) -> LedgerResult<()> {
        self.ensure_open()?;
        if tx.session_id != self.id {
            return Err(LedgerError::Validation(format!(
                "transaction {} belongs to session {}, not {}",
                tx.id, tx.session_id, self.id
            )));
        }
        self.transactions.push(tx);
        self.summary = DailySummary::fold(&self.transactions);
        Ok(())
    }

    /// Record a manual cash movement
    pub fn record_cash_entry(&mut self, entry: CashEntry) -> LedgerResult<()> {
        self.ensure_open()?;
        if entry.amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "cash entry amount must be positive, got {}",
                entry.amount
            )));
        }
        self.cash_entries.push(entry);
        Ok(())
    }

    /// Cash that should be in the drawer right now:
    /// opening float + cash sales + manual IN − manual OUT
    pub fn expected_cash(&self) -> Decimal {
        let manual: Decimal = self
            .cash_entries
            .iter()
            .map(|e| match e.direction {
                CashDirection::In => e.amount,
                CashDirection::Out => -e.amount,
            })
            .sum();
        self.opening_float + self.summary.cash_total + manual
    }

    /// Compare counted cash against the expectation.
    ///
    /// Idempotent while the session is open; fails once it is closed.
    pub fn reconcile(&self, counted: Decimal) -> LedgerResult<CashReconciliation> {
        self.ensure_open()?;
        money::validate_cash(counted, "counted")?;
        let expected = self.expected_cash();
        Ok(CashReconciliation {
            expected,
            counted,
            difference: counted - expected,
        })
    }

    /// Close the session. Terminal: every later mutation or reconciliation
    /// fails with `SessionClosed`.
    pub fn close(&mut self, counted: Decimal, at: i64) -> LedgerResult<CashReconciliation> {
        let reconciliation = self.reconcile(counted)?;
        self.status = SessionStatus::Closed;
        self.end_time = Some(at);
        self.counted_cash = Some(counted);
        self.cash.closing = Some(counted);
        self.cash.difference = Some(reconciliation.difference);
        info!(
            session_id = self.id,
            expected = %reconciliation.expected,
            counted = %counted,
            difference = %reconciliation.difference,
            "session closed"
        );
        Ok(reconciliation)
    }

    fn ensure_open(&self) -> LedgerResult<()> {
        if self.is_closed() {
            return Err(LedgerError::SessionClosed(self.id));
        }
        Ok(())
    }
}
