//! Debtor aging and payment-speed analysis.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{AgingBuckets, AgingScheme, DebtorMetrics, DebtorTransaction};

/// Returns true if the entry text classifies the row as an invoice.
fn is_invoice_like(entry_type: &str) -> bool {
    entry_type.to_lowercase().contains("invoice")
}

/// Returns true if the entry text classifies the row as a payment/receipt.
fn is_payment_like(entry_type: &str) -> bool {
    let text = entry_type.to_lowercase();
    text.contains("receipt") || text.contains("payment")
}

/// Accumulated weighted-average state for payment-speed figures.
#[derive(Default)]
struct PaymentSpeed {
    paid_weighted_days: Decimal,
    paid_weight: Decimal,
    outstanding_weighted_days: Decimal,
    outstanding_weight: Decimal,
}

/// Analyzer producing [`DebtorMetrics`] from a debtor transaction set.
///
/// "Today" is injected so results are a pure function of (inputs, now);
/// the analyzer never reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtorAnalyzer {
    scheme: AgingScheme,
}

impl DebtorAnalyzer {
    /// Creates an analyzer with the given aging scheme.
    #[must_use]
    pub const fn new(scheme: AgingScheme) -> Self {
        Self { scheme }
    }

    /// Computes aging, payment-speed, and count metrics for one set.
    #[must_use]
    pub fn analyze(&self, transactions: &[DebtorTransaction], today: NaiveDate) -> DebtorMetrics {
        let mut aging = AgingBuckets::new(self.scheme);
        let mut total_balance = Decimal::ZERO;
        let mut invoice_count = 0usize;

        for tx in transactions {
            total_balance += tx.amount;
            aging.add((today - tx.date).num_days(), tx.amount);
            if is_invoice_like(&tx.entry_type) {
                invoice_count += 1;
            }
        }

        let speed = Self::payment_speed(transactions, today);

        let avg_payment_days_paid = if speed.paid_weight.is_zero() {
            None
        } else {
            Some(speed.paid_weighted_days / speed.paid_weight)
        };
        let avg_payment_days_outstanding = if speed.outstanding_weight.is_zero() {
            Decimal::ZERO
        } else {
            speed.outstanding_weighted_days / speed.outstanding_weight
        };

        DebtorMetrics {
            total_balance,
            aging,
            avg_payment_days_paid,
            avg_payment_days_outstanding,
            transaction_count: transactions.len(),
            invoice_count,
        }
    }

    /// Matches invoices to their first payment per invoice number.
    ///
    /// Transactions without an invoice number are excluded here but still
    /// count toward the balance and aging figures. Within each group the
    /// earliest invoice-like row is the invoice and the earliest
    /// payment-like row its payment; partial payments are not modeled.
    fn payment_speed(transactions: &[DebtorTransaction], today: NaiveDate) -> PaymentSpeed {
        let mut groups: HashMap<&str, Vec<&DebtorTransaction>> = HashMap::new();
        for tx in transactions {
            if let Some(number) = tx.invoice_number.as_deref() {
                groups.entry(number).or_default().push(tx);
            }
        }

        let mut speed = PaymentSpeed::default();

        for group in groups.values() {
            let Some(invoice) = group
                .iter()
                .filter(|tx| is_invoice_like(&tx.entry_type))
                .min_by_key(|tx| tx.date)
            else {
                continue;
            };

            let payment = group
                .iter()
                .filter(|tx| is_payment_like(&tx.entry_type))
                .min_by_key(|tx| tx.date);

            let weight = invoice.amount.abs();
            if let Some(payment) = payment {
                let days_to_pay = Decimal::from((payment.date - invoice.date).num_days());
                speed.paid_weighted_days += days_to_pay * weight;
                speed.paid_weight += weight;
            } else {
                let days_outstanding = Decimal::from((today - invoice.date).num_days());
                speed.outstanding_weighted_days += days_outstanding * weight;
                speed.outstanding_weight += weight;
            }
        }

        speed
    }
}

/// Partitions a transaction set by service-line code.
///
/// The analyzer is then invoked once per group, plus once over the full
/// unpartitioned set for the overall figure. A `BTreeMap` keeps group
/// ordering deterministic.
#[must_use]
pub fn partition_by_service_line(
    transactions: &[DebtorTransaction],
) -> BTreeMap<String, Vec<DebtorTransaction>> {
    let mut groups: BTreeMap<String, Vec<DebtorTransaction>> = BTreeMap::new();
    for tx in transactions {
        groups
            .entry(tx.service_line.clone())
            .or_default()
            .push(tx.clone());
    }
    groups
}
