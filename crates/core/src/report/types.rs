//! Report parameter and payload types.

use chrono::NaiveDate;
use praxis_shared::types::{ClientGroupId, ClientId, TaskId};
use serde::{Deserialize, Serialize};

use crate::debtor::{AgingScheme, DebtorMetrics};
use crate::series::Resolution;
use crate::wip::{DailyMetric, WipSummary};

/// The entity a report is scoped to.
///
/// The transaction source is assumed to be pre-filtered to this scope by
/// the caller; the engine stays agnostic to how a transaction's client/task
/// linkage was resolved (OR-inclusion semantics are a caller contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ReportScope {
    /// All transactions for a client.
    Client(ClientId),
    /// All transactions for a single task/engagement.
    Task(TaskId),
    /// All transactions for a client group.
    ClientGroup(ClientGroupId),
}

/// Parameters identifying one WIP report.
///
/// Also serves as the result-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WipReportParams {
    /// Report scope.
    pub scope: ReportScope,
    /// Window start (inclusive).
    pub from: NaiveDate,
    /// Window end (inclusive).
    pub to: NaiveDate,
    /// Series resolution.
    pub resolution: Resolution,
}

/// A WIP balance report for one scope and window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WipReport {
    /// The parameters this report was built from.
    pub params: WipReportParams,
    /// Opening balance the series was seeded with.
    pub opening_balance: rust_decimal::Decimal,
    /// Downsampled daily series.
    pub daily_metrics: Vec<DailyMetric>,
    /// Category totals and final balance for the window.
    pub summary: WipSummary,
    /// True when served from the result cache.
    pub cached: bool,
}

/// Parameters identifying one debtor report.
///
/// Also serves as the result-cache key; `as_of` keys the cache because the
/// aging figures are a function of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebtorReportParams {
    /// Report scope.
    pub scope: ReportScope,
    /// The "today" aging is computed against.
    pub as_of: NaiveDate,
    /// Aging bucket scheme.
    pub scheme: AgingScheme,
}

/// Debtor metrics for one service line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLineMetrics {
    /// Service-line code.
    pub service_line: String,
    /// Metrics for that line's transactions.
    pub metrics: DebtorMetrics,
}

/// A debtor aging and payment-speed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorReport {
    /// The parameters this report was built from.
    pub params: DebtorReportParams,
    /// Metrics over the full transaction set.
    pub overall: DebtorMetrics,
    /// Metrics per service line, ordered by code.
    pub by_service_line: Vec<ServiceLineMetrics>,
    /// True when served from the result cache.
    pub cached: bool,
}
