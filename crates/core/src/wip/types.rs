//! WIP pipeline domain types.

use chrono::NaiveDate;
use praxis_shared::types::{ClientId, TaskId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw ledger transaction on the WIP side.
///
/// Transactions are read-only inputs created by external ledger-import
/// collaborators. A transaction may reference only a task, only a client,
/// or both; the caller resolves scope inclusion before handing the stream
/// to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WipTransaction {
    /// Transaction date at calendar-day precision.
    pub date: NaiveDate,
    /// Signed amount.
    pub amount: Decimal,
    /// Primary classification code (time, disbursement, adjustment, ...).
    pub type_code: String,
    /// Optional refinement code, used to catch fee variants.
    pub sub_type_code: Option<String>,
    /// The task this transaction is recorded against, if any.
    pub task_id: Option<TaskId>,
    /// The client this transaction is recorded against, if any.
    pub client_id: Option<ClientId>,
}

/// Categorized financial totals for one calendar day, with the cumulative
/// WIP balance through that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetric {
    /// The calendar date of this bucket.
    pub date: NaiveDate,
    /// Value of time recorded (category `Time`).
    pub production: Decimal,
    /// Write-ups and write-downs (category `Adjustment`).
    pub adjustments: Decimal,
    /// Out-of-pocket costs (category `Disbursement`).
    pub disbursements: Decimal,
    /// Amounts invoiced, stored as positive magnitudes (category `Fee`).
    pub billing: Decimal,
    /// Anticipated write-offs (category `Provision`).
    pub provisions: Decimal,
    /// Cumulative WIP balance inclusive of this day.
    pub wip_balance: Decimal,
}

impl DailyMetric {
    /// Creates an all-zero metric for the given date.
    #[must_use]
    pub fn zero(date: NaiveDate) -> Self {
        Self {
            date,
            production: Decimal::ZERO,
            adjustments: Decimal::ZERO,
            disbursements: Decimal::ZERO,
            billing: Decimal::ZERO,
            provisions: Decimal::ZERO,
            wip_balance: Decimal::ZERO,
        }
    }

    /// The day's net effect on the WIP balance.
    ///
    /// Fees reduce the balance; every other category increases it.
    #[must_use]
    pub fn daily_change(&self) -> Decimal {
        self.production + self.adjustments + self.disbursements + self.provisions - self.billing
    }

    /// Returns true if any category total is non-zero.
    ///
    /// A day without activity only carries the balance forward; such days
    /// are the candidates the downsampler may drop.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !(self.production.is_zero()
            && self.adjustments.is_zero()
            && self.disbursements.is_zero()
            && self.billing.is_zero()
            && self.provisions.is_zero())
    }
}

/// Grand totals of each category across the requested window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WipSummary {
    /// Total production across the window.
    pub production: Decimal,
    /// Total adjustments across the window.
    pub adjustments: Decimal,
    /// Total disbursements across the window.
    pub disbursements: Decimal,
    /// Total billing across the window.
    pub billing: Decimal,
    /// Total provisions across the window.
    pub provisions: Decimal,
    /// Final cumulative balance, equal to the last day's `wip_balance`
    /// (or the opening balance when the window holds no transactions).
    pub current_wip_balance: Decimal,
}

/// Output of the balance aggregator: the daily series plus its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WipSeries {
    /// Daily metrics in chronological order.
    pub daily_metrics: Vec<DailyMetric>,
    /// Category totals and final balance.
    pub summary: WipSummary,
}
