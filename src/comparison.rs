//! Budget versus actual spending.

use serde::Serialize;

use crate::{
    model::{Budget, Transaction, TransactionKind},
    money::Money,
};

/// A budget's cap alongside the spending actually recorded against its
/// category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetComparisonEntry {
    /// The budget's category.
    pub category: String,
    /// The budgeted cap.
    pub budget_limit: Money,
    /// Expense transactions summed for the category; zero when none match.
    pub actual_spent: Money,
}

/// Compares each budget against the expense transactions in its category.
///
/// Budgets drive the join: one entry per budget, in budget order, and
/// expense categories without a budget produce no entry.
pub fn budget_vs_actual(
    budgets: &[Budget],
    transactions: &[Transaction],
) -> Vec<BudgetComparisonEntry> {
    budgets
        .iter()
        .map(|budget| {
            let actual_spent = transactions
                .iter()
                .filter(|transaction| {
                    transaction.kind == TransactionKind::Expense
                        && transaction.category == budget.category
                })
                .map(|transaction| transaction.amount)
                .sum();

            BudgetComparisonEntry {
                category: budget.category.clone(),
                budget_limit: budget.limit,
                actual_spent,
            }
        })
        .collect()
}
