//! Property-based tests for balance aggregation.
//!
//! - The balance equals inflow sums minus outflow sums
//! - Void entries never move any total
//! - Order of the input does not matter

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tillbook_shared::types::{AccountId, Amount, TransactionId};

use super::balance::BalanceSummary;
use super::transaction::{Transaction, TransactionKind};

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Sale),
        Just(TransactionKind::Refund),
        Just(TransactionKind::Void),
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense),
    ]
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (positive_amount(), kind_strategy()).prop_map(|(amount, kind)| Transaction {
        id: TransactionId::new(),
        owner_id: AccountId::new(),
        owner_name: "Prop".to_string(),
        amount: Amount::new(amount).unwrap(),
        kind,
        description: String::new(),
        created_at: Utc::now(),
    })
}

fn sum_of(txs: &[Transaction], kinds: &[TransactionKind]) -> Decimal {
    txs.iter()
        .filter(|t| kinds.contains(&t.kind))
        .map(|t| t.amount.value())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* transaction set, balance SHALL equal the sum of sale and
    /// income amounts minus the sum of refund and expense amounts.
    #[test]
    fn prop_balance_is_inflow_minus_outflow(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
    ) {
        let summary = BalanceSummary::from_transactions(&txs).unwrap();
        let inflow = sum_of(&txs, &[TransactionKind::Sale, TransactionKind::Income]);
        let outflow = sum_of(&txs, &[TransactionKind::Refund, TransactionKind::Expense]);

        prop_assert_eq!(summary.total_in, inflow);
        prop_assert_eq!(summary.total_out, outflow);
        prop_assert_eq!(summary.balance, inflow - outflow);
        prop_assert_eq!(summary.count, txs.len());
    }

    /// *For any* transaction set, appending void entries SHALL leave every
    /// total unchanged and only increase the count.
    #[test]
    fn prop_void_never_affects_totals(
        txs in prop::collection::vec(transaction_strategy(), 0..30),
        void_amounts in prop::collection::vec(positive_amount(), 1..10),
    ) {
        let before = BalanceSummary::from_transactions(&txs).unwrap();

        let mut with_voids = txs.clone();
        with_voids.extend(void_amounts.iter().map(|amount| Transaction {
            id: TransactionId::new(),
            owner_id: AccountId::new(),
            owner_name: "Prop".to_string(),
            amount: Amount::new(*amount).unwrap(),
            kind: TransactionKind::Void,
            description: String::new(),
            created_at: Utc::now(),
        }));
        let after = BalanceSummary::from_transactions(&with_voids).unwrap();

        prop_assert_eq!(after.total_in, before.total_in);
        prop_assert_eq!(after.total_out, before.total_out);
        prop_assert_eq!(after.balance, before.balance);
        prop_assert_eq!(after.count, before.count + void_amounts.len());
    }

    /// *For any* transaction set, reversing the order SHALL produce the same
    /// summary.
    #[test]
    fn prop_order_independent(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
    ) {
        let forward = BalanceSummary::from_transactions(&txs).unwrap();
        let backward = BalanceSummary::from_transactions(txs.iter().rev()).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
