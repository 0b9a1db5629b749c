//! Debtor pipeline domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw debtor/receivables transaction.
///
/// Receipts carry negative amounts; invoices and credit notes positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorTransaction {
    /// Transaction date at calendar-day precision.
    pub date: NaiveDate,
    /// Signed amount.
    pub amount: Decimal,
    /// Free-text entry classification (invoice, receipt, journal, ...).
    pub entry_type: String,
    /// Correlation key matching receipts to the invoice they settle.
    pub invoice_number: Option<String>,
    /// Service-line code used for per-line grouping.
    pub service_line: String,
}

/// Aging bucket boundary scheme.
///
/// The engine supports both boundary definitions found in the wild; the
/// scheme is a parameter of the analyzer, never a hardcoded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingScheme {
    /// 0-60 / 61-90 / 91-120 / 120+ days (default).
    Days60,
    /// 0-30 / 31-60 / 61-90 / 91-120 / 120+ days.
    Days30,
}

impl AgingScheme {
    /// Upper bounds (inclusive) of the bounded buckets, in days.
    /// A final catch-all bucket covers everything beyond the last bound.
    #[must_use]
    pub const fn boundaries(self) -> &'static [i64] {
        match self {
            Self::Days60 => &[60, 90, 120],
            Self::Days30 => &[30, 60, 90, 120],
        }
    }
}

impl Default for AgingScheme {
    fn default() -> Self {
        Self::Days60
    }
}

/// One aging bucket: a day range and the total amount aged into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Display label ("current", "61-90", "120+").
    pub label: String,
    /// Inclusive lower bound in days.
    pub min_days: i64,
    /// Inclusive upper bound in days; `None` for the catch-all bucket.
    pub max_days: Option<i64>,
    /// Total signed amount in this bucket.
    pub total: Decimal,
}

/// Mutually exclusive, sum-exhaustive day-range totals relative to an
/// injected "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBuckets {
    /// The boundary scheme the buckets were built from.
    pub scheme: AgingScheme,
    /// Buckets ordered from youngest to oldest.
    pub buckets: Vec<AgingBucket>,
}

impl AgingBuckets {
    /// Creates zeroed buckets for the given scheme.
    #[must_use]
    pub fn new(scheme: AgingScheme) -> Self {
        let boundaries = scheme.boundaries();
        let mut buckets = Vec::with_capacity(boundaries.len() + 1);

        let mut lower = 0i64;
        for &bound in boundaries {
            let label = if lower == 0 {
                "current".to_string()
            } else {
                format!("{lower}-{bound}")
            };
            buckets.push(AgingBucket {
                label,
                min_days: lower,
                max_days: Some(bound),
                total: Decimal::ZERO,
            });
            lower = bound + 1;
        }
        buckets.push(AgingBucket {
            label: format!("{}+", lower - 1),
            min_days: lower,
            max_days: None,
            total: Decimal::ZERO,
        });

        Self { scheme, buckets }
    }

    /// Ages an amount into exactly one bucket.
    ///
    /// Future-dated transactions (negative `days`) land in the first bucket
    /// so no amount is ever dropped.
    pub fn add(&mut self, days: i64, amount: Decimal) {
        for bucket in &mut self.buckets {
            match bucket.max_days {
                Some(bound) if days > bound => {}
                _ => {
                    bucket.total += amount;
                    return;
                }
            }
        }
    }

    /// Sum of all bucket totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.buckets.iter().map(|b| b.total).sum()
    }
}

/// Derived debtor analytics for one transaction set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorMetrics {
    /// Sum of all transaction amounts.
    pub total_balance: Decimal,
    /// Outstanding balance bucketed by age.
    pub aging: AgingBuckets,
    /// Balance-weighted average days from invoice to payment; `None` when
    /// no invoice has a matched payment.
    pub avg_payment_days_paid: Option<Decimal>,
    /// Balance-weighted average days outstanding of unpaid invoices; zero
    /// when there are none. The asymmetry with `avg_payment_days_paid` is
    /// intentional.
    pub avg_payment_days_outstanding: Decimal,
    /// Number of transactions analyzed.
    pub transaction_count: usize,
    /// Number of invoice-like transactions. This counts entries, not
    /// distinct invoice numbers.
    pub invoice_count: usize,
}
