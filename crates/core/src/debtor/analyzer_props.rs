//! Property-based tests for the debtor analyzer.
//!
//! - Aging exhaustiveness: bucket totals sum to the transaction total
//! - Payment-speed null handling
//! - Service-line partition conservation

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::analyzer::{partition_by_service_line, DebtorAnalyzer};
use super::types::{AgingScheme, DebtorTransaction};

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn entry_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Invoice".to_string()),
        Just("Credit Note".to_string()),
        Just("Receipt".to_string()),
        Just("Payment".to_string()),
        Just("Journal".to_string()),
    ]
}

fn invoice_number_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (1u32..6).prop_map(|n| Some(format!("I-{n}"))),
    ]
}

fn service_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TAX".to_string()),
        Just("AUDIT".to_string()),
        Just("ADVISORY".to_string()),
    ]
}

/// Dates up to a year either side of the reference "today".
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-365i64..365i64).prop_map(|offset| today() + chrono::Duration::days(offset))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn transaction_strategy() -> impl Strategy<Value = DebtorTransaction> {
    (
        date_strategy(),
        amount_strategy(),
        entry_type_strategy(),
        invoice_number_strategy(),
        service_line_strategy(),
    )
        .prop_map(
            |(date, amount, entry_type, invoice_number, service_line)| DebtorTransaction {
                date,
                amount,
                entry_type,
                invoice_number,
                service_line,
            },
        )
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<DebtorTransaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

fn scheme_strategy() -> impl Strategy<Value = AgingScheme> {
    prop_oneof![Just(AgingScheme::Days60), Just(AgingScheme::Days30)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The sum of the aging bucket totals equals the sum of all transaction
    /// amounts exactly, for either bucket scheme. No transaction is dropped
    /// or double-counted.
    #[test]
    fn prop_aging_is_sum_exhaustive(
        transactions in transactions_strategy(50),
        scheme in scheme_strategy(),
    ) {
        let metrics = DebtorAnalyzer::new(scheme).analyze(&transactions, today());

        let direct: Decimal = transactions.iter().map(|tx| tx.amount).sum();
        prop_assert_eq!(metrics.aging.total(), direct);
        prop_assert_eq!(metrics.total_balance, direct);
    }

    /// A set containing only unmatched invoices yields a null paid average
    /// and a non-null outstanding average.
    #[test]
    fn prop_unmatched_invoices_null_handling(
        dates in prop::collection::vec(0i64..365, 1..20),
    ) {
        let transactions: Vec<DebtorTransaction> = dates
            .iter()
            .enumerate()
            .map(|(i, &age)| DebtorTransaction {
                date: today() - chrono::Duration::days(age),
                amount: Decimal::new(10_000, 2),
                entry_type: "Invoice".to_string(),
                invoice_number: Some(format!("I-{i}")),
                service_line: "TAX".to_string(),
            })
            .collect();

        let metrics = DebtorAnalyzer::default().analyze(&transactions, today());

        prop_assert_eq!(metrics.avg_payment_days_paid, None);
        prop_assert!(metrics.avg_payment_days_outstanding >= Decimal::ZERO);
        prop_assert_eq!(metrics.invoice_count, transactions.len());
    }

    /// Partitioning by service line conserves transactions and balance.
    #[test]
    fn prop_partition_conserves_balance(
        transactions in transactions_strategy(50),
    ) {
        let groups = partition_by_service_line(&transactions);

        let grouped_count: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(grouped_count, transactions.len());

        let grouped_total: Decimal = groups
            .values()
            .flat_map(|group| group.iter().map(|tx| tx.amount))
            .sum();
        let direct: Decimal = transactions.iter().map(|tx| tx.amount).sum();
        prop_assert_eq!(grouped_total, direct);
    }
}
