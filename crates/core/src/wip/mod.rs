//! Transaction categorization and work-in-progress balance aggregation.
//!
//! This module implements the WIP pipeline:
//! - Classification of heterogeneous transaction type codes
//! - Daily grouping with a running cumulative balance
//! - Opening balance calculation for a reporting window

pub mod aggregate;
pub mod category;
pub mod opening;
pub mod types;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::BalanceAggregator;
pub use category::TransactionCategory;
pub use opening::{OpeningBalance, TypeSum};
pub use types::{DailyMetric, WipSeries, WipSummary, WipTransaction};
