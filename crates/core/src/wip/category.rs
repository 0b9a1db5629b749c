//! Transaction type classification.
//!
//! Ledger imports tag transactions with a primary type code and an optional
//! subtype. The categories below are mutually exclusive by construction:
//! a transaction maps to exactly one category, or to none at all.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subtype codes that identify a fee/billing transaction regardless of the
/// primary type code. Some billing rows arrive with a generic primary type
/// and only the subtype carries the fee classification.
const FEE_SUBTYPE_CODES: [&str; 4] = ["FEE", "INTFEE", "FINFEE", "FIXFEE"];

/// Semantic category of a WIP transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Time worked against a task (production).
    Time,
    /// Write-up or write-down of recorded value.
    Adjustment,
    /// Out-of-pocket cost recovered from the client.
    Disbursement,
    /// Amount invoiced to the client (billing).
    Fee,
    /// Anticipated future write-off of unbilled value.
    Provision,
}

impl TransactionCategory {
    /// Classifies a transaction by its type code and optional subtype.
    ///
    /// Returns `None` for unrecognized codes. Unknown codes are expected in
    /// real ledger data and must never raise an error: such transactions
    /// count toward transaction counts but contribute to no category total.
    ///
    /// The primary code wins when it is recognized; the fee-subtype check
    /// only applies to transactions whose primary code is generic, since
    /// that is the shape billing imports produce.
    #[must_use]
    pub fn classify(type_code: &str, sub_type_code: Option<&str>) -> Option<Self> {
        match type_code.trim().to_uppercase().as_str() {
            "TIME" | "TIM" => Some(Self::Time),
            "ADJ" | "ADJUSTMENT" => Some(Self::Adjustment),
            "DISB" | "DISBURSEMENT" => Some(Self::Disbursement),
            "FEE" | "BILL" | "BILLING" => Some(Self::Fee),
            "PROV" | "PROVISION" => Some(Self::Provision),
            _ => sub_type_code.and_then(|sub| {
                let sub = sub.trim().to_uppercase();
                FEE_SUBTYPE_CODES
                    .contains(&sub.as_str())
                    .then_some(Self::Fee)
            }),
        }
    }

    /// Returns this category's signed contribution to the WIP balance.
    ///
    /// Fees are stored as positive magnitudes and subtracted from the
    /// balance; every other category contributes its amount as-is.
    #[must_use]
    pub fn signed_contribution(self, amount: Decimal) -> Decimal {
        match self {
            Self::Fee => -amount,
            Self::Time | Self::Adjustment | Self::Disbursement | Self::Provision => amount,
        }
    }
}
