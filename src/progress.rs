//! Budget and goal progress calculations.

use serde::Serialize;
use time::Date;

use crate::{
    deadline::{TimeRemaining, time_remaining},
    model::{Budget, Goal},
    money::Money,
    summary::{total_budget_limit, total_budget_spent, total_goal_target, total_saved},
};

/// The rounded share of `target` reached by `current`, clamped to 0-100.
///
/// A zero or negative target is malformed denormalised data; it is replaced
/// with a one-dollar denominator rather than surfaced as an error, so a
/// zero-target goal with no savings reads 0% and one with any savings reads
/// 100% after clamping.
pub fn progress_percentage(current: Money, target: Money) -> u8 {
    let target = if target <= Money::ZERO {
        Money::from_cents(100)
    } else {
        target
    };

    let ratio = current.as_major() / target.as_major() * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// How close a tracked amount is to its cap or target.
///
/// The thresholds drive colour-coding in display layers, but the
/// classification itself is part of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    /// 75% or less of the cap is used.
    Ok,
    /// More than 75% of the cap is used.
    Warning,
    /// More than 90% of the cap is used.
    Critical,
}

impl ProgressStatus {
    /// Classifies a progress percentage.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage > 90 {
            ProgressStatus::Critical
        } else if percentage > 75 {
            ProgressStatus::Warning
        } else {
            ProgressStatus::Ok
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProgressStatus::Ok => "ok",
            ProgressStatus::Warning => "warning",
            ProgressStatus::Critical => "critical",
        };
        write!(f, "{label}")
    }
}

/// A budget's spending progress row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// The budget's category.
    pub category: String,
    /// The tracked spending so far.
    pub spent: Money,
    /// The cap.
    pub limit: Money,
    /// Spending as a share of the cap, clamped to 0-100.
    pub percentage: u8,
    /// The status classification for the percentage.
    pub status: ProgressStatus,
    /// Whether spending has exceeded the cap outright.
    pub over_limit: bool,
}

impl BudgetProgress {
    /// Builds the progress row for a budget.
    pub fn of(budget: &Budget) -> Self {
        let percentage = progress_percentage(budget.spent, budget.limit);

        Self {
            category: budget.category.clone(),
            spent: budget.spent,
            limit: budget.limit,
            percentage,
            status: ProgressStatus::from_percentage(percentage),
            over_limit: budget.spent > budget.limit,
        }
    }
}

/// A goal's savings progress row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalProgress {
    /// The goal's name.
    pub name: String,
    /// The amount saved so far.
    pub current: Money,
    /// The amount left to save, negative when overfunded.
    pub remaining: Money,
    /// Savings as a share of the target, clamped to 0-100.
    pub percentage: u8,
    /// Time remaining until the deadline.
    pub time_remaining: TimeRemaining,
}

impl GoalProgress {
    /// Builds the progress row for a goal as of `today`.
    pub fn of(goal: &Goal, today: Date) -> Self {
        let current = goal.amount_saved();

        Self {
            name: goal.name.clone(),
            current,
            remaining: goal.remaining(),
            percentage: progress_percentage(current, goal.target),
            time_remaining: time_remaining(goal.deadline, today),
        }
    }
}

/// Total tracked spending as a share of the total budgeted caps.
pub fn overall_budget_spending(budgets: &[Budget]) -> u8 {
    total_budget_spent(budgets).percent_of(total_budget_limit(budgets))
}

/// Total saved as a share of the total goal targets.
pub fn overall_goal_progress(goals: &[Goal]) -> u8 {
    total_saved(goals).percent_of(total_goal_target(goals))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{
        BudgetProgress, GoalProgress, ProgressStatus, overall_budget_spending,
        overall_goal_progress, progress_percentage,
    };
    use crate::{
        deadline::TimeRemaining,
        model::{Budget, Goal},
        money::Money,
    };

    #[test]
    fn progress_is_clamped_at_one_hundred() {
        assert_eq!(
            progress_percentage(Money::from_major(150.0), Money::from_major(100.0)),
            100
        );
    }

    #[test]
    fn zero_target_with_zero_progress_is_zero() {
        assert_eq!(progress_percentage(Money::ZERO, Money::ZERO), 0);
    }

    #[test]
    fn zero_target_with_any_progress_clamps_to_full() {
        assert_eq!(
            progress_percentage(Money::from_major(50.0), Money::ZERO),
            100
        );
    }

    #[test]
    fn negative_progress_is_clamped_at_zero() {
        assert_eq!(
            progress_percentage(Money::from_major(-10.0), Money::from_major(100.0)),
            0
        );
    }

    #[test]
    fn status_thresholds_match_the_colour_bands() {
        assert_eq!(ProgressStatus::from_percentage(0), ProgressStatus::Ok);
        assert_eq!(ProgressStatus::from_percentage(75), ProgressStatus::Ok);
        assert_eq!(ProgressStatus::from_percentage(76), ProgressStatus::Warning);
        assert_eq!(ProgressStatus::from_percentage(90), ProgressStatus::Warning);
        assert_eq!(ProgressStatus::from_percentage(91), ProgressStatus::Critical);
        assert_eq!(ProgressStatus::from_percentage(100), ProgressStatus::Critical);
    }

    #[test]
    fn budget_progress_flags_overspending() {
        let over = BudgetProgress::of(&Budget::new(
            "Food",
            Money::from_cents(200_00),
            Money::from_cents(250_00),
        ));
        let under = BudgetProgress::of(&Budget::new(
            "Transport",
            Money::from_cents(100_00),
            Money::from_cents(40_00),
        ));

        assert!(over.over_limit);
        assert_eq!(over.percentage, 100);
        assert_eq!(over.status, ProgressStatus::Critical);

        assert!(!under.over_limit);
        assert_eq!(under.percentage, 40);
        assert_eq!(under.status, ProgressStatus::Ok);
    }

    #[test]
    fn goal_progress_carries_remaining_and_deadline() {
        let goal = Goal::new("Car", Money::from_cents(5000_00), Money::from_cents(2000_00))
            .with_deadline(date!(2024 - 06 - 11));

        let progress = GoalProgress::of(&goal, date!(2024 - 06 - 01));

        assert_eq!(progress.percentage, 40);
        assert_eq!(progress.remaining, Money::from_cents(3000_00));
        assert_eq!(progress.time_remaining, TimeRemaining::Days { days: 10 });
    }

    #[test]
    fn overall_ratios_guard_empty_collections() {
        assert_eq!(overall_budget_spending(&[]), 0);
        assert_eq!(overall_goal_progress(&[]), 0);
    }

    #[test]
    fn overall_ratios_aggregate_across_records() {
        let budgets = vec![
            Budget::new("Food", Money::from_cents(200_00), Money::from_cents(150_00)),
            Budget::new("Transport", Money::from_cents(100_00), Money::from_cents(90_00)),
        ];
        let goals = vec![
            Goal::new("Car", Money::from_cents(4000_00), Money::from_cents(1000_00)),
            Goal::new("Holiday", Money::from_cents(1000_00), Money::from_cents(500_00)),
        ];

        assert_eq!(overall_budget_spending(&budgets), 80);
        assert_eq!(overall_goal_progress(&goals), 30);
    }
}
