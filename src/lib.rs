//! Fintrack is the aggregation and reporting engine of a personal finance
//! tracker.
//!
//! This library turns raw transaction, budget, and savings goal records into
//! the derived values a tracker displays: headline totals, category
//! breakdowns, monthly time series, budget-versus-actual comparisons, and
//! goal progress with time-remaining labels. Everything is a pure function
//! over immutable slices; the data provider (a REST client, a file, a test
//! fixture) plugs in behind the [store] traits.

#![warn(missing_docs)]

mod breakdown;
mod comparison;
mod deadline;
mod error;
mod format;
mod model;
mod money;
mod preferences;
mod progress;
mod report;
mod series;
mod store;
mod summary;
mod theme;

pub use breakdown::{CategoryBreakdownEntry, category_breakdown};
pub use comparison::{BudgetComparisonEntry, budget_vs_actual};
pub use deadline::{TimeRemaining, time_remaining};
pub use error::Error;
pub use format::format_currency;
pub use model::{
    Budget, BudgetPeriod, DatabaseId, Goal, Transaction, TransactionKind, UNCATEGORISED_LABEL,
};
pub use money::Money;
pub use preferences::{
    NotificationSettings, NotificationUpdate, PreferencesUpdate, UserPreferences,
};
pub use progress::{
    BudgetProgress, GoalProgress, ProgressStatus, overall_budget_spending, overall_goal_progress,
    progress_percentage,
};
pub use report::{DashboardReport, ExpensesReport, IncomeReport, SavingsReport, TrendsReport};
pub use series::{
    MonthlySeriesPoint, MonthlyTrendPoint, month_label, monthly_series, monthly_trend,
};
pub use store::{
    BudgetStore, GoalStore, JsonStore, SortOrder, TransactionQuery, TransactionStore,
};
pub use summary::{
    total_balance, total_budget_limit, total_budget_spent, total_expenses, total_goal_target,
    total_income, total_saved,
};
pub use theme::{ThemeClasses, ThemeMode, ThemeState, compute_theme_classes};
