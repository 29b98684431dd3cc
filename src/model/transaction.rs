//! The transaction record, the core type of the engine.

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use crate::{
    model::{DatabaseId, category_or_default, dates, default_category},
    money::Money,
};

/// The category label given to transactions that arrive without one.
pub const UNCATEGORISED_LABEL: &str = "Others";

/// Whether a transaction brought money in or took money out.
///
/// The upstream API stores this as a lowercase string. Anything that is not
/// literally `"income"` is treated as an expense, mirroring the binary
/// branch the tracker's client takes on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    #[default]
    Expense,
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(if value == "income" {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        })
    }
}

/// A single dated income or expense record.
///
/// Immutable once fetched; the data provider owns creation and edits. The
/// leniency rules of the ingestion boundary apply: a missing or blank
/// category becomes [UNCATEGORISED_LABEL] and a malformed amount becomes
/// zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The upstream record ID.
    #[serde(default)]
    pub id: DatabaseId,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
    /// The amount of money spent or earned, always non-negative by
    /// convention; the sign of a transaction's effect comes from its kind.
    #[serde(default)]
    pub amount: Money,
    /// Whether this is income or an expense.
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    /// A user-defined category describing the type of spending or income.
    #[serde(
        default = "default_category",
        deserialize_with = "category_or_default"
    )]
    pub category: String,
    /// When the transaction happened.
    #[serde(with = "dates")]
    pub date: Date,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Creates a transaction with the given core fields and empty metadata.
    pub fn new(kind: TransactionKind, amount: Money, category: &str, date: Date) -> Self {
        Self {
            id: 0,
            description: String::new(),
            amount,
            kind,
            category: category.to_owned(),
            date,
            notes: None,
        }
    }

    /// The amount with the kind's sign applied: positive for income,
    /// negative for expenses.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
