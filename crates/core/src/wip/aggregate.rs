//! Daily balance aggregation.
//!
//! Groups a transaction stream by calendar day, accumulates categorized
//! totals, and computes the running WIP balance across the sorted days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::category::TransactionCategory;
use super::types::{DailyMetric, WipSeries, WipSummary, WipTransaction};

/// Aggregates WIP transactions into a daily balance series.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Builds the daily series and summary for a transaction window.
    ///
    /// The input need not be sorted; transactions are bucketed by date and
    /// the buckets walked chronologically. The running balance is seeded at
    /// `opening_balance`, and each day's balance is:
    ///
    /// `balance[d] = balance[d-1] + production + adjustments + disbursements
    ///  + provisions - billing`
    ///
    /// Unrecognized type codes never raise; they are excluded from every
    /// category total. A day holding only unrecognized transactions still
    /// appears as an all-zero bucket.
    #[must_use]
    pub fn aggregate(transactions: &[WipTransaction], opening_balance: Decimal) -> WipSeries {
        let mut buckets: BTreeMap<NaiveDate, DailyMetric> = BTreeMap::new();

        for tx in transactions {
            let metric = buckets
                .entry(tx.date)
                .or_insert_with(|| DailyMetric::zero(tx.date));
            Self::accumulate(metric, tx);
        }

        let mut summary = WipSummary::default();
        let mut running = opening_balance;
        let mut daily_metrics = Vec::with_capacity(buckets.len());

        for (_, mut metric) in buckets {
            running += metric.daily_change();
            metric.wip_balance = running;

            summary.production += metric.production;
            summary.adjustments += metric.adjustments;
            summary.disbursements += metric.disbursements;
            summary.billing += metric.billing;
            summary.provisions += metric.provisions;

            daily_metrics.push(metric);
        }

        summary.current_wip_balance = running;

        WipSeries {
            daily_metrics,
            summary,
        }
    }

    /// Adds one transaction's signed amount to its category total.
    fn accumulate(metric: &mut DailyMetric, tx: &WipTransaction) {
        match TransactionCategory::classify(&tx.type_code, tx.sub_type_code.as_deref()) {
            Some(TransactionCategory::Time) => metric.production += tx.amount,
            Some(TransactionCategory::Adjustment) => metric.adjustments += tx.amount,
            Some(TransactionCategory::Disbursement) => metric.disbursements += tx.amount,
            Some(TransactionCategory::Fee) => metric.billing += tx.amount,
            Some(TransactionCategory::Provision) => metric.provisions += tx.amount,
            None => {}
        }
    }
}
