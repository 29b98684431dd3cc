//! Time remaining until a goal's deadline.
//!
//! Uses an approximate calendar of 30-day months and 12-month years, which
//! is what the tracker has always shown users. The labels are indicative
//! ("2 years 3 months"), not exact calendar arithmetic.

use std::fmt;

use serde::{Serialize, Serializer};
use time::Date;

/// How long remains until a deadline, in the largest applicable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRemaining {
    /// The goal has no deadline set.
    NoDeadline,
    /// The deadline is today or in the past.
    Passed,
    /// At least an approximate year remains.
    YearsMonths {
        /// Whole approximate years remaining.
        years: i64,
        /// Months remaining beyond the whole years, 0-11.
        months: i64,
    },
    /// At least an approximate month remains.
    MonthsDays {
        /// Whole approximate months remaining.
        months: i64,
        /// Days remaining beyond the whole months, 0-29.
        days: i64,
    },
    /// Less than a month remains.
    Days {
        /// Whole days remaining.
        days: i64,
    },
}

/// Computes the time remaining from `today` until an optional deadline.
pub fn time_remaining(deadline: Option<Date>, today: Date) -> TimeRemaining {
    let Some(deadline) = deadline else {
        return TimeRemaining::NoDeadline;
    };

    let days = (deadline - today).whole_days();
    if days <= 0 {
        return TimeRemaining::Passed;
    }

    let months = days / 30;
    let years = months / 12;

    if years > 0 {
        TimeRemaining::YearsMonths {
            years,
            months: months % 12,
        }
    } else if months > 0 {
        TimeRemaining::MonthsDays {
            months,
            days: days % 30,
        }
    } else {
        TimeRemaining::Days { days }
    }
}

/// "s" unless the count is exactly one.
fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimeRemaining::NoDeadline => write!(f, "No deadline"),
            TimeRemaining::Passed => write!(f, "Deadline passed"),
            TimeRemaining::YearsMonths { years, months } => write!(
                f,
                "{years} year{} {months} month{}",
                plural(years),
                plural(months)
            ),
            TimeRemaining::MonthsDays { months, days } => write!(
                f,
                "{months} month{} {days} day{}",
                plural(months),
                plural(days)
            ),
            TimeRemaining::Days { days } => write!(f, "{days} day{}", plural(days)),
        }
    }
}

impl Serialize for TimeRemaining {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
