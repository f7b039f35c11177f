//! Session Z-report layout

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use tapkas_ledger::models::{CompanyDetails, SalesSession};
use tapkas_ledger::money::format_eur;
use tapkas_ledger::util::format_receipt_date;

use crate::directive::{Directive, DirectiveBuilder};
use crate::encoding::pad_text;

const NAME_COL: usize = 23;
const QTY_COL: usize = 8;

/// Renders a closing (or intermediate) session report
pub struct SessionReportRenderer<'a> {
    session: &'a SalesSession,
    company: &'a CompanyDetails,
    width: usize,
}

impl<'a> SessionReportRenderer<'a> {
    pub fn new(session: &'a SalesSession, company: &'a CompanyDetails, width: usize) -> Self {
        Self {
            session,
            company,
            width,
        }
    }

    pub fn render(&self) -> Vec<Directive> {
        let mut b = DirectiveBuilder::new(self.width);
        let s = self.session;
        let summary = s.summary();

        // Header
        b.align_center();
        b.size_double();
        b.bold_on();
        b.line("Z-RAPPORT");
        b.bold_off();
        b.size_reset();
        if !self.company.name.is_empty() {
            b.line(&self.company.name);
        }
        b.blank();

        // Session window
        b.align_left();
        b.line_lr("Sessie", &format!("#{}", s.id));
        b.line_lr("Start", &format_receipt_date(s.start_time));
        if let Some(end) = s.end_time {
            b.line_lr("Einde", &format_receipt_date(end));
        }
        b.rule_single();

        // Turnover
        b.bold_on();
        b.line_lr("Omzet", &format_eur(summary.total_sales));
        b.bold_off();
        b.line_lr("  Contant", &format_eur(summary.cash_total));
        b.line_lr("  Pin", &format_eur(summary.card_total));
        b.line_lr("Bonnen", &summary.transaction_count.to_string());
        if let Some(first) = &summary.first_ticket {
            b.line_lr("Eerste bon", first);
        }
        if let Some(last) = &summary.last_ticket {
            b.line_lr("Laatste bon", last);
        }
        b.rule_single();

        // Cash control
        b.bold_on();
        b.line("KASCONTROLE");
        b.bold_off();
        b.line_lr("Beginsaldo", &format_eur(s.opening_float));
        b.line_lr("Verwacht", &format_eur(s.expected_cash()));
        if let Some(counted) = s.counted_cash {
            b.line_lr("Geteld", &format_eur(counted));
        }
        if let Some(diff) = s.cash.difference {
            // A shortfall is the line the owner looks for first
            if diff < Decimal::ZERO {
                b.bold_on();
                b.line_lr("Verschil", &format_eur(diff));
                b.bold_off();
            } else {
                b.line_lr("Verschil", &format!("+{}", format_eur(diff)));
            }
        }
        b.rule_single();

        // VAT breakdown
        b.bold_on();
        b.line("BTW");
        b.bold_off();
        for bucket in &summary.vat_buckets {
            b.line_lr(
                &format!("BTW {}%", bucket.rate.percent()),
                &format_eur(bucket.vat),
            );
            b.line_lr("  Grondslag", &format_eur(bucket.net));
        }
        b.rule_single();

        // Quantity sold per product
        b.bold_on();
        b.line("VERKOCHT");
        b.bold_off();
        for ((name, Reverse(_price)), qty) in self.quantities() {
            b.line(&format!(
                "{} {}",
                pad_text(&name, NAME_COL, false),
                pad_text(&qty.to_string(), QTY_COL, true)
            ));
        }

        b.feed(4);
        b.cut();
        b.finish()
    }

    /// Units sold per (name, unit price), name ascending then price
    /// descending so renamed or repriced products stay distinguishable
    fn quantities(&self) -> BTreeMap<(String, Reverse<Decimal>), i64> {
        let mut quantities = BTreeMap::new();
        for tx in self.session.transactions() {
            for line in &tx.lines {
                *quantities
                    .entry((line.name.clone(), Reverse(line.unit_price)))
                    .or_insert(0) += line.quantity as i64;
            }
        }
        quantities
    }
}
