//! Property-based tests for the WIP pipeline.
//!
//! - Balance recurrence: the final balance is grouping-order independent
//! - Opening-balance equivalence: raw and pre-aggregated paths agree
//! - Summary totals match direct per-category sums

use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregate::BalanceAggregator;
use super::category::TransactionCategory;
use super::opening::{OpeningBalance, TypeSum};
use super::types::WipTransaction;

/// Strategy for signed amounts (-1,000.00 to 1,000.00).
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for type codes, mixing every recognized code with unknowns.
fn type_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TIME".to_string()),
        Just("ADJ".to_string()),
        Just("DISB".to_string()),
        Just("FEE".to_string()),
        Just("PROV".to_string()),
        Just("GEN".to_string()),
        Just("XYZ".to_string()),
    ]
}

/// Strategy for optional subtype codes, including fee variants.
fn sub_type_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("INTFEE".to_string())),
        Just(Some("FINFEE".to_string())),
        Just(Some("MISC".to_string())),
    ]
}

/// Strategy for dates within a two-month window.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..60i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn transaction_strategy() -> impl Strategy<Value = WipTransaction> {
    (
        date_strategy(),
        amount_strategy(),
        type_code_strategy(),
        sub_type_strategy(),
    )
        .prop_map(|(date, amount, type_code, sub_type_code)| WipTransaction {
            date,
            amount,
            type_code,
            sub_type_code,
            task_id: None,
            client_id: None,
        })
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<WipTransaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

/// Signed contribution of one transaction, computed directly.
fn direct_contribution(tx: &WipTransaction) -> Decimal {
    TransactionCategory::classify(&tx.type_code, tx.sub_type_code.as_deref())
        .map_or(Decimal::ZERO, |c| c.signed_contribution(tx.amount))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The final balance equals the opening balance plus the direct sum of
    /// every transaction's signed contribution, independent of day grouping.
    #[test]
    fn prop_balance_recurrence(
        transactions in transactions_strategy(40),
        opening_cents in -1_000_000i64..1_000_000i64,
    ) {
        let opening = Decimal::new(opening_cents, 2);
        let series = BalanceAggregator::aggregate(&transactions, opening);

        let direct: Decimal = transactions.iter().map(direct_contribution).sum();
        prop_assert_eq!(series.summary.current_wip_balance, opening + direct);
    }

    /// Shuffling the input never changes the output series.
    #[test]
    fn prop_aggregation_is_order_independent(
        transactions in transactions_strategy(30),
    ) {
        let forward = BalanceAggregator::aggregate(&transactions, Decimal::ZERO);

        let mut reversed = transactions;
        reversed.reverse();
        let backward = BalanceAggregator::aggregate(&reversed, Decimal::ZERO);

        prop_assert_eq!(forward.daily_metrics, backward.daily_metrics);
        prop_assert_eq!(forward.summary, backward.summary);
    }

    /// Every day's balance equals the previous day's balance plus that day's
    /// net change, starting from the opening balance.
    #[test]
    fn prop_daily_balance_chain(
        transactions in transactions_strategy(40),
        opening_cents in -1_000_000i64..1_000_000i64,
    ) {
        let opening = Decimal::new(opening_cents, 2);
        let series = BalanceAggregator::aggregate(&transactions, opening);

        let mut previous = opening;
        for metric in &series.daily_metrics {
            prop_assert_eq!(metric.wip_balance, previous + metric.daily_change());
            previous = metric.wip_balance;
        }
    }

    /// Computing the opening balance from raw transactions and from an
    /// equivalent per-type sum mapping yields identical scalars.
    #[test]
    fn prop_opening_balance_equivalence(
        transactions in transactions_strategy(40),
    ) {
        let cutoff = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let mut grouped: HashMap<(String, Option<String>), Decimal> = HashMap::new();
        for tx in &transactions {
            *grouped
                .entry((tx.type_code.clone(), tx.sub_type_code.clone()))
                .or_insert(Decimal::ZERO) += tx.amount;
        }
        let sums: Vec<TypeSum> = grouped
            .into_iter()
            .map(|((type_code, sub_type_code), total)| TypeSum {
                type_code,
                sub_type_code,
                total,
            })
            .collect();

        prop_assert_eq!(
            OpeningBalance::from_transactions(&transactions, cutoff),
            OpeningBalance::from_type_sums(&sums)
        );
    }

    /// Summary category totals always match the direct per-category sums.
    #[test]
    fn prop_summary_totals_match_direct_sums(
        transactions in transactions_strategy(40),
    ) {
        let series = BalanceAggregator::aggregate(&transactions, Decimal::ZERO);

        let by_category = |wanted: TransactionCategory| -> Decimal {
            transactions
                .iter()
                .filter(|tx| {
                    TransactionCategory::classify(&tx.type_code, tx.sub_type_code.as_deref())
                        == Some(wanted)
                })
                .map(|tx| tx.amount)
                .sum()
        };

        prop_assert_eq!(series.summary.production, by_category(TransactionCategory::Time));
        prop_assert_eq!(series.summary.adjustments, by_category(TransactionCategory::Adjustment));
        prop_assert_eq!(series.summary.disbursements, by_category(TransactionCategory::Disbursement));
        prop_assert_eq!(series.summary.billing, by_category(TransactionCategory::Fee));
        prop_assert_eq!(series.summary.provisions, by_category(TransactionCategory::Provision));
    }
}
