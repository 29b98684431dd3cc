//! Assembles the derived values each screen of the tracker displays.
//!
//! These bundles are thin compositions of the aggregation functions; the
//! functions stay independently callable for consumers that only need one
//! figure.

use serde::Serialize;
use time::Date;

use crate::{
    breakdown::{CategoryBreakdownEntry, category_breakdown},
    comparison::{BudgetComparisonEntry, budget_vs_actual},
    model::{Budget, Goal, Transaction, TransactionKind},
    money::Money,
    progress::{BudgetProgress, GoalProgress, overall_budget_spending, overall_goal_progress},
    series::{MonthlySeriesPoint, MonthlyTrendPoint, monthly_series, monthly_trend},
    summary::{total_balance, total_budget_limit, total_expenses, total_income},
};

/// Everything the dashboard shows: headline totals, the expense breakdown,
/// and per-budget and per-goal progress.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardReport {
    /// Net position across all transactions, signed.
    pub total_balance: Money,
    /// Total income.
    pub total_income: Money,
    /// Total expenses.
    pub total_expenses: Money,
    /// The summed caps across all budgets.
    pub total_budget: Money,
    /// Expense share per category, largest first.
    pub expense_breakdown: Vec<CategoryBreakdownEntry>,
    /// Spending progress per budget, in budget order.
    pub budgets: Vec<BudgetProgress>,
    /// Savings progress per goal, in goal order.
    pub goals: Vec<GoalProgress>,
    /// Total tracked spending as a share of total caps.
    pub overall_budget_spending: u8,
    /// Total saved as a share of total targets.
    pub overall_goal_progress: u8,
}

impl DashboardReport {
    /// Builds the dashboard for a user's records as of `today`.
    pub fn generate(
        transactions: &[Transaction],
        budgets: &[Budget],
        goals: &[Goal],
        today: Date,
    ) -> Self {
        Self {
            total_balance: total_balance(transactions),
            total_income: total_income(transactions),
            total_expenses: total_expenses(transactions),
            total_budget: total_budget_limit(budgets),
            expense_breakdown: category_breakdown(transactions, TransactionKind::Expense),
            budgets: budgets.iter().map(BudgetProgress::of).collect(),
            goals: goals.iter().map(|goal| GoalProgress::of(goal, today)).collect(),
            overall_budget_spending: overall_budget_spending(budgets),
            overall_goal_progress: overall_goal_progress(goals),
        }
    }
}

/// The expenses report: distribution by category and the monthly trend.
#[derive(Clone, Debug, Serialize)]
pub struct ExpensesReport {
    /// Expense share per category, largest first.
    pub by_category: Vec<CategoryBreakdownEntry>,
    /// Expense totals per month, chronological.
    pub monthly: Vec<MonthlySeriesPoint>,
}

impl ExpensesReport {
    /// Builds the expenses report.
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self {
            by_category: category_breakdown(transactions, TransactionKind::Expense),
            monthly: monthly_series(transactions, TransactionKind::Expense),
        }
    }
}

/// The income report: sources by category and the monthly trend.
#[derive(Clone, Debug, Serialize)]
pub struct IncomeReport {
    /// Income share per category, largest first.
    pub by_category: Vec<CategoryBreakdownEntry>,
    /// Income totals per month, chronological.
    pub monthly: Vec<MonthlySeriesPoint>,
}

impl IncomeReport {
    /// Builds the income report.
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self {
            by_category: category_breakdown(transactions, TransactionKind::Income),
            monthly: monthly_series(transactions, TransactionKind::Income),
        }
    }
}

/// The savings report: per-goal progress and the overall position.
///
/// Historical savings growth needs a persisted time series the tracker does
/// not keep, so this report covers the present position only.
#[derive(Clone, Debug, Serialize)]
pub struct SavingsReport {
    /// Savings progress per goal, in goal order.
    pub goals: Vec<GoalProgress>,
    /// Total saved as a share of total targets.
    pub overall_progress: u8,
}

impl SavingsReport {
    /// Builds the savings report as of `today`.
    pub fn generate(goals: &[Goal], today: Date) -> Self {
        Self {
            goals: goals.iter().map(|goal| GoalProgress::of(goal, today)).collect(),
            overall_progress: overall_goal_progress(goals),
        }
    }
}

/// The trends report: month-on-month cash flow and budget adherence.
#[derive(Clone, Debug, Serialize)]
pub struct TrendsReport {
    /// Income, expenses, and net savings per month, chronological.
    pub monthly: Vec<MonthlyTrendPoint>,
    /// Each budget's cap against what was actually spent.
    pub budget_comparison: Vec<BudgetComparisonEntry>,
}

impl TrendsReport {
    /// Builds the trends report.
    pub fn generate(transactions: &[Transaction], budgets: &[Budget]) -> Self {
        Self {
            monthly: monthly_trend(transactions),
            budget_comparison: budget_vs_actual(budgets, transactions),
        }
    }
}
