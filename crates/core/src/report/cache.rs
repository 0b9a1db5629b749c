//! Report result caching using Moka.
//!
//! Reports are pure functions of their parameters and the underlying
//! transaction stream, so identical requests within the TTL window can be
//! served from memory. Invalidation on ledger import is the caller's
//! responsibility.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache;
use praxis_shared::config::CacheConfig;
use tracing::debug;

use super::error::ReportError;
use super::service::ReportService;
use super::types::{DebtorReport, DebtorReportParams, ReportScope, WipReport, WipReportParams};
use crate::debtor::DebtorTransaction;
use crate::wip::{TypeSum, WipTransaction};

/// Cache for report results.
///
/// Uses the full parameter set as the cache key and stores complete
/// reports. Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct ReportCache {
    service: ReportService,
    wip: Cache<WipReportParams, Arc<WipReport>>,
    debtor: Cache<DebtorReportParams, Arc<DebtorReport>>,
}

impl ReportCache {
    /// Creates a report cache around the given service.
    #[must_use]
    pub fn new(service: ReportService, config: &CacheConfig) -> Self {
        fn build<K, V>(config: &CacheConfig) -> Cache<K, V>
        where
            K: std::hash::Hash + Eq + Send + Sync + 'static,
            V: Clone + Send + Sync + 'static,
        {
            Cache::builder()
                .max_capacity(config.max_capacity)
                .time_to_live(Duration::from_secs(config.ttl_secs))
                .build()
        }

        Self {
            service,
            wip: build(config),
            debtor: build(config),
        }
    }

    /// Builds a WIP report, returning a cached result when available.
    ///
    /// Cache hits come back with `cached: true`.
    ///
    /// # Errors
    ///
    /// Propagates [`ReportError`] from the underlying service; errors are
    /// never cached.
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
        if let Some(hit) = self.wip.get(params) {
            debug!(?params.scope, "wip report cache hit");
            let mut report = (*hit).clone();
            report.cached = true;
            return Ok(report);
        }

        let report = self
            .service
            .wip_report(params, transaction_source, opening_sums_source)?;
        self.wip.insert(params.clone(), Arc::new(report.clone()));
        Ok(report)
    }

    /// Builds a debtor report, returning a cached result when available.
    #[must_use]
    pub fn debtor_report<S>(
        &self,
        params: &DebtorReportParams,
        transaction_source: S,
    ) -> DebtorReport
    where
        S: Fn(&ReportScope) -> Vec<DebtorTransaction>,
    {
        if let Some(hit) = self.debtor.get(params) {
            debug!(?params.scope, "debtor report cache hit");
            let mut report = (*hit).clone();
            report.cached = true;
            return report;
        }

        let report = self.service.debtor_report(params, transaction_source);
        self.debtor.insert(params.clone(), Arc::new(report.clone()));
        report
    }

    /// Invalidates all cached reports.
    pub fn invalidate_all(&self) {
        self.wip.invalidate_all();
        self.debtor.invalidate_all();
    }

    /// Invalidates the cached WIP report for one parameter set.
    pub fn invalidate_wip(&self, params: &WipReportParams) {
        self.wip.invalidate(params);
    }

    /// Invalidates the cached debtor report for one parameter set.
    pub fn invalidate_debtor(&self, params: &DebtorReportParams) {
        self.debtor.invalidate(params);
    }

    /// Returns the number of cached entries across both report kinds.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.wip.entry_count() + self.debtor.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background, but calling this explicitly
    /// reclaims memory sooner and settles `entry_count`.
    pub fn run_pending_tasks(&self) {
        self.wip.run_pending_tasks();
        self.debtor.run_pending_tasks();
    }
}
