//! Category breakdown with percentage shares.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    model::{Transaction, TransactionKind},
    money::Money,
};

/// One category's share of the selected transactions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryBreakdownEntry {
    /// The category name.
    pub category: String,
    /// The summed amount for the category.
    pub amount: Money,
    /// The category's rounded share of the total, 0-100.
    pub percentage: u8,
}

/// Groups transactions of `kind` by category and computes each group's
/// percentage share of the total.
///
/// Entries are sorted by percentage descending with category name ascending
/// as the tiebreak, so the output order is deterministic regardless of map
/// iteration order. When the total is zero every share is 0.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<CategoryBreakdownEntry> {
    let mut totals_by_category: HashMap<&str, Money> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        *totals_by_category
            .entry(transaction.category.as_str())
            .or_insert(Money::ZERO) += transaction.amount;
    }

    let total: Money = totals_by_category.values().copied().sum();

    let mut entries: Vec<CategoryBreakdownEntry> = totals_by_category
        .into_iter()
        .map(|(category, amount)| CategoryBreakdownEntry {
            category: category.to_owned(),
            amount,
            percentage: amount.percent_of(total),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.category.cmp(&b.category))
    });

    entries
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::category_breakdown;
    use crate::{
        model::{Transaction, TransactionKind, UNCATEGORISED_LABEL},
        money::Money,
    };

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(cents),
            category,
            date!(2024 - 01 - 15),
        )
    }

    #[test]
    fn groups_and_sums_by_category() {
        let transactions = vec![
            expense(50_00, "Food"),
            expense(30_00, "Food"),
            expense(20_00, "Transport"),
        ];

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].amount, Money::from_cents(80_00));
        assert_eq!(breakdown[0].percentage, 80);
        assert_eq!(breakdown[1].category, "Transport");
        assert_eq!(breakdown[1].percentage, 20);
    }

    #[test]
    fn ignores_transactions_of_the_other_kind() {
        let transactions = vec![
            expense(50_00, "Food"),
            Transaction::new(
                TransactionKind::Income,
                Money::from_cents(1000_00),
                "Salary",
                date!(2024 - 01 - 01),
            ),
        ];

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].percentage, 100);
    }

    #[test]
    fn ties_are_broken_alphabetically() {
        let transactions = vec![expense(50_00, "Zoo"), expense(50_00, "Art")];

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown[0].category, "Art");
        assert_eq!(breakdown[1].category, "Zoo");
        assert_eq!(breakdown[0].percentage, 50);
        assert_eq!(breakdown[1].percentage, 50);
    }

    #[test]
    fn percentages_sum_close_to_one_hundred() {
        let transactions = vec![
            expense(33_33, "A"),
            expense(33_33, "B"),
            expense(33_34, "C"),
        ];

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);
        let sum: i32 = breakdown.iter().map(|entry| entry.percentage as i32).sum();

        assert!((sum - 100).unsigned_abs() as usize <= breakdown.len());
        assert!(breakdown.iter().all(|entry| entry.percentage <= 100));
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let transactions = vec![expense(0, "Food"), expense(0, "Transport")];

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert!(breakdown.iter().all(|entry| entry.percentage == 0));
    }

    #[test]
    fn empty_input_produces_an_empty_breakdown() {
        assert!(category_breakdown(&[], TransactionKind::Expense).is_empty());
    }

    #[test]
    fn uncategorised_spending_lands_in_others() {
        let transactions: Vec<Transaction> = serde_json::from_str(
            r#"[
                { "amount": 60, "type": "expense", "date": "2024-01-10" },
                { "amount": 40, "type": "expense", "category": "Food", "date": "2024-01-12" }
            ]"#,
        )
        .unwrap();

        let breakdown = category_breakdown(&transactions, TransactionKind::Expense);

        assert_eq!(breakdown[0].category, UNCATEGORISED_LABEL);
        assert_eq!(breakdown[0].percentage, 60);
    }
}
