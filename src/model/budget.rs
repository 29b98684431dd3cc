//! The budget record.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    model::{DatabaseId, category_or_default, default_category},
    money::Money,
};

/// How often a budget's cap resets.
///
/// Unrecognised period strings fall back to monthly, the upstream default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Resets every week.
    Weekly,
    /// Resets every month. The upstream default.
    #[default]
    Monthly,
    /// Resets every year.
    Yearly,
}

impl<'de> Deserialize<'de> for BudgetPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "weekly" => BudgetPeriod::Weekly,
            "yearly" => BudgetPeriod::Yearly,
            _ => BudgetPeriod::Monthly,
        })
    }
}

/// A spending cap for a category over a period.
///
/// `spent` is denormalised: the data provider populates it, and this engine
/// reads it as-is rather than re-deriving it from transactions. Category
/// uniqueness is an upstream convention, not enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The upstream record ID.
    #[serde(default)]
    pub id: DatabaseId,
    /// The spending category this cap applies to.
    #[serde(
        default = "default_category",
        deserialize_with = "category_or_default"
    )]
    pub category: String,
    /// The cap amount.
    #[serde(default)]
    pub limit: Money,
    /// How much has been spent against the cap so far.
    #[serde(default)]
    pub spent: Money,
    /// How often the cap resets.
    #[serde(default)]
    pub period: BudgetPeriod,
    /// An optional note describing the budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Budget {
    /// Creates a budget for `category` with the given cap and spent amount.
    pub fn new(category: &str, limit: Money, spent: Money) -> Self {
        Self {
            id: 0,
            category: category.to_owned(),
            limit,
            spent,
            period: BudgetPeriod::default(),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Budget, BudgetPeriod};
    use crate::money::Money;

    #[test]
    fn deserializes_with_upstream_field_names() {
        let budget: Budget = serde_json::from_str(
            r#"{ "id": 3, "category": "Food", "limit": 200, "spent": 80.5, "period": "weekly" }"#,
        )
        .unwrap();

        assert_eq!(budget.category, "Food");
        assert_eq!(budget.limit, Money::from_cents(20000));
        assert_eq!(budget.spent, Money::from_cents(8050));
        assert_eq!(budget.period, BudgetPeriod::Weekly);
    }

    #[test]
    fn period_defaults_to_monthly() {
        let budget: Budget =
            serde_json::from_str(r#"{ "category": "Food", "limit": 200 }"#).unwrap();

        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.spent, Money::ZERO);
    }
}
