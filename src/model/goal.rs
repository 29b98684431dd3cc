//! The savings goal record.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    model::{DatabaseId, dates},
    money::Money,
};

/// A savings target with a tracked progress amount and optional deadline.
///
/// The upstream API carries the progress amount under two names,
/// `currentAmount` and `saved`, which it keeps in sync. Both are accepted;
/// use [Goal::amount_saved] rather than reading either field directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The upstream record ID.
    #[serde(default)]
    pub id: DatabaseId,
    /// The name of the goal.
    #[serde(default)]
    pub name: String,
    /// The amount being saved towards.
    #[serde(default)]
    pub target: Money,
    /// Progress under the newer upstream field name.
    #[serde(rename = "currentAmount", default)]
    pub current_amount: Money,
    /// Progress under the older upstream field name.
    #[serde(default)]
    pub saved: Money,
    /// An optional note describing the goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the goal should be reached, if a deadline was set.
    #[serde(default, with = "dates::option")]
    pub deadline: Option<Date>,
}

impl Goal {
    /// Creates a goal with the given name, target, and progress amount.
    pub fn new(name: &str, target: Money, saved: Money) -> Self {
        Self {
            id: 0,
            name: name.to_owned(),
            target,
            current_amount: saved,
            saved,
            description: None,
            deadline: None,
        }
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: Date) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The amount saved so far, preferring whichever upstream field is
    /// populated.
    pub fn amount_saved(&self) -> Money {
        if !self.current_amount.is_zero() {
            self.current_amount
        } else {
            self.saved
        }
    }

    /// How much is left to save: `target - saved`, negative when the goal
    /// is overfunded.
    pub fn remaining(&self) -> Money {
        self.target - self.amount_saved()
    }
}
