//! Opening balance calculation.
//!
//! Computes the WIP balance accumulated strictly before a reporting window
//! begins, used to seed the running balance inside the window. Two entry
//! points share the categorization and sign logic: one over raw
//! transactions, one over sums the data-access layer pre-aggregated by
//! type at the source.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::TransactionCategory;
use super::types::WipTransaction;

/// A per-type amount sum produced by the data-access layer
/// (`GROUP BY type_code, sub_type_code` over the pre-cutoff window).
///
/// Carrying the subtype keeps the fee-variant rule applicable on this path,
/// so both opening-balance entry points agree exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSum {
    /// Primary classification code.
    pub type_code: String,
    /// Optional refinement code.
    pub sub_type_code: Option<String>,
    /// Summed signed amount for this code pair.
    pub total: Decimal,
}

/// Opening balance calculator.
pub struct OpeningBalance;

impl OpeningBalance {
    /// Computes the opening balance from raw transactions dated strictly
    /// before `cutoff`.
    #[must_use]
    pub fn from_transactions(transactions: &[WipTransaction], cutoff: NaiveDate) -> Decimal {
        transactions
            .iter()
            .filter(|tx| tx.date < cutoff)
            .filter_map(|tx| {
                TransactionCategory::classify(&tx.type_code, tx.sub_type_code.as_deref())
                    .map(|category| category.signed_contribution(tx.amount))
            })
            .sum()
    }

    /// Computes the opening balance from pre-aggregated per-type sums.
    ///
    /// The caller is responsible for restricting the sums to the pre-cutoff
    /// window. Unrecognized code pairs are excluded, matching the raw path.
    #[must_use]
    pub fn from_type_sums(sums: &[TypeSum]) -> Decimal {
        sums.iter()
            .filter_map(|sum| {
                TransactionCategory::classify(&sum.type_code, sum.sub_type_code.as_deref())
                    .map(|category| category.signed_contribution(sum.total))
            })
            .sum()
    }
}
