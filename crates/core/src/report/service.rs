//! Report building over injected collaborators.

use chrono::NaiveDate;
use praxis_shared::config::SeriesConfig;
use tracing::debug;

use super::error::ReportError;
use super::types::{
    DebtorReport, DebtorReportParams, ReportScope, ServiceLineMetrics, WipReport, WipReportParams,
};
use crate::debtor::{partition_by_service_line, DebtorAnalyzer, DebtorTransaction};
use crate::series::downsample;
use crate::wip::{BalanceAggregator, OpeningBalance, TypeSum, WipTransaction};

/// Builds reports by wiring the engine's components to caller-supplied
/// data-access collaborators.
///
/// The service holds only policy (the resolution mapping); all data flows
/// through the closure parameters, so one instance is safe to share across
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    series: SeriesConfig,
}

impl ReportService {
    /// Creates a report service with the given series configuration.
    #[must_use]
    pub const fn new(series: SeriesConfig) -> Self {
        Self { series }
    }

    /// Builds a WIP balance report.
    ///
    /// `transaction_source` returns the scope's transactions within the
    /// window; `opening_sums_source` returns per-type sums for the window
    /// strictly before `from`, used to seed the running balance.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] when the window is
    /// inverted, or a series error for an invalid point budget.
    pub fn wip_report<S, P>(
        &self,
        params: &WipReportParams,
        transaction_source: S,
        opening_sums_source: P,
    ) -> Result<WipReport, ReportError>
    where
        S: Fn(&ReportScope, NaiveDate, NaiveDate) -> Vec<WipTransaction>,
        P: Fn(&ReportScope, NaiveDate) -> Vec<TypeSum>,
    {
        if params.from > params.to {
            return Err(ReportError::InvalidDateRange {
                from: params.from,
                to: params.to,
            });
        }

        let opening_balance =
            OpeningBalance::from_type_sums(&opening_sums_source(&params.scope, params.from));
        let transactions = transaction_source(&params.scope, params.from, params.to);

        debug!(
            transactions = transactions.len(),
            %opening_balance,
            "aggregating wip series"
        );

        let series = BalanceAggregator::aggregate(&transactions, opening_balance);
        let target_points = params.resolution.target_points(&self.series);
        let daily_metrics = downsample(series.daily_metrics, target_points)?;

        debug!(
            points = daily_metrics.len(),
            target_points, "wip series downsampled"
        );

        Ok(WipReport {
            params: params.clone(),
            opening_balance,
            daily_metrics,
            summary: series.summary,
            cached: false,
        })
    }

    /// Builds a debtor aging and payment-speed report.
    ///
    /// The analyzer runs once per service line and once more over the full
    /// set for the overall figure.
    #[must_use]
    pub fn debtor_report<S>(&self, params: &DebtorReportParams, transaction_source: S) -> DebtorReport
    where
        S: Fn(&ReportScope) -> Vec<DebtorTransaction>,
    {
        let transactions = transaction_source(&params.scope);
        let analyzer = DebtorAnalyzer::new(params.scheme);

        debug!(transactions = transactions.len(), "analyzing debtor set");

        let overall = analyzer.analyze(&transactions, params.as_of);
        let by_service_line = partition_by_service_line(&transactions)
            .into_iter()
            .map(|(service_line, group)| ServiceLineMetrics {
                metrics: analyzer.analyze(&group, params.as_of),
                service_line,
            })
            .collect();

        DebtorReport {
            params: params.clone(),
            overall,
            by_service_line,
            cached: false,
        }
    }
}
