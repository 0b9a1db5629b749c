//! Debtor aging and payment-speed analytics.
//!
//! Runs as an independent pipeline over debtor/receivables transactions;
//! it does not depend on the WIP pipeline.

pub mod analyzer;
pub mod types;

#[cfg(test)]
mod analyzer_props;

pub use analyzer::{partition_by_service_line, DebtorAnalyzer};
pub use types::{AgingBucket, AgingBuckets, AgingScheme, DebtorMetrics, DebtorTransaction};
