//! Transaction receipt layout

use rust_decimal::Decimal;

use tapkas_ledger::models::{CompanyDetails, Transaction};
use tapkas_ledger::money::format_eur;

use crate::directive::{Directive, DirectiveBuilder};
use crate::encoding::pad_text;

/// Columns reserved for the product name in a sold-line row
const NAME_COL: usize = 23;
/// Columns reserved for the right-aligned amount in a sold-line row
const AMOUNT_COL: usize = 8;

/// Receipt rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptOptions {
    /// Print the copy banner for a reprint of an existing ticket
    pub reprint: bool,
}

/// Renders a completed transaction as a customer receipt
pub struct ReceiptRenderer<'a> {
    transaction: &'a Transaction,
    company: &'a CompanyDetails,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(transaction: &'a Transaction, company: &'a CompanyDetails, width: usize) -> Self {
        Self {
            transaction,
            company,
            width,
        }
    }

    pub fn render(&self, options: &ReceiptOptions) -> Vec<Directive> {
        let mut b = DirectiveBuilder::new(self.width);
        let tx = self.transaction;

        if options.reprint {
            b.align_center();
            b.size_double();
            b.bold_on();
            b.line("*** KOPIE ***");
            b.bold_off();
            b.size_reset();
            b.blank();
        }

        // Company header
        b.align_center();
        if !self.company.name.is_empty() {
            b.size_double();
            b.bold_on();
            b.line(&self.company.name);
            b.bold_off();
            b.size_reset();
        }
        for line in &self.company.address_lines {
            b.line(line);
        }
        if !self.company.vat_number.is_empty() {
            b.line(&format!("BTW: {}", self.company.vat_number));
        }
        if let Some(website) = &self.company.website {
            b.line(website);
        }
        b.blank();

        // Ticket header
        b.align_left();
        b.line(&format!("Bon: {}", tx.id));
        b.line(&tx.date);
        if let Some(seller) = &tx.seller {
            b.line(&format!("Verkoper: {}", seller));
        }
        b.rule_single();

        // Sold lines: name + right-aligned line total, quantity and unit
        // price underneath
        for line in &tx.lines {
            let name = pad_text(&line.name, NAME_COL, false);
            let amount = pad_text(&format_eur(line.line_total()), AMOUNT_COL, true);
            b.line(&format!("{} {}", name, amount));
            b.line(&format!(
                "  {} x {}",
                line.quantity,
                format_eur(line.unit_price)
            ));
        }
        b.rule_single();

        // Total
        b.size_double();
        b.bold_on();
        b.line_lr("TOTAAL", &format_eur(tx.total));
        b.bold_off();
        b.size_reset();

        // VAT breakdown (prices are inclusive, so this is informational)
        for bucket in &tx.vat_buckets {
            if bucket.vat > Decimal::ZERO {
                b.line_lr(
                    &format!("Incl. BTW {}%", bucket.rate.percent()),
                    &format_eur(bucket.vat),
                );
            }
        }

        b.line_lr("Betaald", payment_label(tx));
        b.blank();

        if !self.company.footer_message.is_empty() {
            b.align_center();
            b.line(&self.company.footer_message);
        }

        b.feed(4);
        b.cut();
        b.finish()
    }
}

fn payment_label(tx: &Transaction) -> &'static str {
    match tx.payment_method {
        tapkas_ledger::PaymentMethod::Cash => "CONTANT",
        tapkas_ledger::PaymentMethod::Card => "PIN",
    }
}
