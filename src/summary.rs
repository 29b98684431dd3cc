//! Headline totals for the dashboard summary cards.
//!
//! Each function sums one field across a collection, filtering by
//! transaction kind where relevant. Accumulation happens in integer cents,
//! so balance is exactly income minus expenses with no float drift.

use crate::{
    model::{Budget, Goal, Transaction, TransactionKind},
    money::Money,
};

/// Sums the amounts of all income transactions.
pub fn total_income(transactions: &[Transaction]) -> Money {
    sum_of_kind(transactions, TransactionKind::Income)
}

/// Sums the amounts of all expense transactions.
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    sum_of_kind(transactions, TransactionKind::Expense)
}

/// The signed net position: income minus expenses. Negative when more was
/// spent than earned.
pub fn total_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Sums the caps across all budgets.
pub fn total_budget_limit(budgets: &[Budget]) -> Money {
    budgets.iter().map(|budget| budget.limit).sum()
}

/// Sums the tracked spending across all budgets.
pub fn total_budget_spent(budgets: &[Budget]) -> Money {
    budgets.iter().map(|budget| budget.spent).sum()
}

/// Sums the amounts saved across all goals.
pub fn total_saved(goals: &[Goal]) -> Money {
    goals.iter().map(Goal::amount_saved).sum()
}

/// Sums the targets across all goals.
pub fn total_goal_target(goals: &[Goal]) -> Money {
    goals.iter().map(|goal| goal.target).sum()
}

fn sum_of_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::{
        model::{Budget, Goal, Transaction, TransactionKind},
        money::Money,
    };

    fn transaction(kind: TransactionKind, cents: i64) -> Transaction {
        Transaction::new(kind, Money::from_cents(cents), "Food", date!(2024 - 01 - 15))
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let transactions = vec![
            transaction(TransactionKind::Income, 250_00),
            transaction(TransactionKind::Expense, 80_00),
            transaction(TransactionKind::Income, 10_50),
            transaction(TransactionKind::Expense, 99_99),
        ];

        let income = total_income(&transactions);
        let expenses = total_expenses(&transactions);

        assert_eq!(income, Money::from_cents(260_50));
        assert_eq!(expenses, Money::from_cents(179_99));
        assert_eq!(total_balance(&transactions), income - expenses);
    }

    #[test]
    fn balance_can_go_negative() {
        let transactions = vec![
            transaction(TransactionKind::Income, 50_00),
            transaction(TransactionKind::Expense, 120_00),
        ];

        assert_eq!(total_balance(&transactions), Money::from_cents(-70_00));
    }

    #[test]
    fn empty_collections_sum_to_zero() {
        assert_eq!(total_balance(&[]), Money::ZERO);
        assert_eq!(total_income(&[]), Money::ZERO);
        assert_eq!(total_expenses(&[]), Money::ZERO);
        assert_eq!(total_budget_limit(&[]), Money::ZERO);
        assert_eq!(total_saved(&[]), Money::ZERO);
        assert_eq!(total_goal_target(&[]), Money::ZERO);
    }

    #[test]
    fn budget_totals_sum_limits_and_spent() {
        let budgets = vec![
            Budget::new("Food", Money::from_cents(200_00), Money::from_cents(80_00)),
            Budget::new("Transport", Money::from_cents(50_00), Money::from_cents(65_00)),
        ];

        assert_eq!(total_budget_limit(&budgets), Money::from_cents(250_00));
        assert_eq!(total_budget_spent(&budgets), Money::from_cents(145_00));
    }

    #[test]
    fn goal_totals_use_the_populated_progress_field() {
        let goals = vec![
            Goal::new("Car", Money::from_cents(5000_00), Money::from_cents(1200_00)),
            Goal::new("Holiday", Money::from_cents(800_00), Money::from_cents(150_00)),
        ];

        assert_eq!(total_saved(&goals), Money::from_cents(1350_00));
        assert_eq!(total_goal_target(&goals), Money::from_cents(5800_00));
    }
}
