//! Traits and implementations for objects that supply the record
//! collections.
//!
//! The data provider is an external collaborator; these traits are the seam
//! it plugs into. [JsonStore] covers the common case of a JSON document in
//! the shape the upstream REST API returns.

use std::ops::RangeInclusive;

use serde::Deserialize;
use time::Date;

use crate::{
    error::Error,
    model::{Budget, Goal, Transaction},
};

/// Defines how transactions should be fetched from
/// [TransactionStore::transactions].
#[derive(Clone, Debug, Default)]
pub struct TransactionQuery {
    /// Include transactions within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Selects up to the first N (`limit`) transactions after sorting.
    pub limit: Option<u64>,
    /// Orders transactions by date in the order `sort_date`. None returns
    /// transactions in the order they are stored.
    pub sort_date: Option<SortOrder>,
}

/// The order to sort transactions in a [TransactionQuery].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

/// Handles the retrieval of transactions.
pub trait TransactionStore {
    /// Retrieve transactions from the store in the way defined by `query`.
    fn transactions(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;
}

/// Handles the retrieval of budgets.
pub trait BudgetStore {
    /// Retrieve all budgets from the store.
    fn budgets(&self) -> Result<Vec<Budget>, Error>;
}

/// Handles the retrieval of savings goals.
pub trait GoalStore {
    /// Retrieve all goals from the store.
    fn goals(&self) -> Result<Vec<Goal>, Error>;
}

/// The JSON document the upstream API's collection endpoints add up to.
///
/// Every section is optional; a document holding only transactions is
/// valid.
#[derive(Debug, Default, Deserialize)]
struct RecordsDocument {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budgets: Vec<Budget>,
    #[serde(default)]
    goals: Vec<Goal>,
}

/// A store over a parsed JSON records document.
///
/// Parsing happens once, up front, so shape problems surface here at the
/// boundary rather than inside a report.
#[derive(Debug, Default)]
pub struct JsonStore {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    goals: Vec<Goal>,
}

impl JsonStore {
    /// Parses a records document from a JSON string.
    ///
    /// # Errors
    /// Returns [Error::InvalidJson] if the document is not valid JSON or a
    /// record has a structurally unusable field (such as a date that cannot
    /// be parsed).
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let document: RecordsDocument = serde_json::from_str(json)?;

        Ok(Self {
            transactions: document.transactions,
            budgets: document.budgets,
            goals: document.goals,
        })
    }
}

impl TransactionStore for JsonStore {
    fn transactions(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let mut results: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| match &query.date_range {
                Some(range) => range.contains(&transaction.date),
                None => true,
            })
            .cloned()
            .collect();

        match query.sort_date {
            Some(SortOrder::Ascending) => results.sort_by_key(|transaction| transaction.date),
            Some(SortOrder::Descending) => {
                results.sort_by_key(|transaction| std::cmp::Reverse(transaction.date));
            }
            None => {}
        }

        if let Some(limit) = query.limit {
            results.truncate(limit as usize);
        }

        Ok(results)
    }
}

impl BudgetStore for JsonStore {
    fn budgets(&self) -> Result<Vec<Budget>, Error> {
        Ok(self.budgets.clone())
    }
}

impl GoalStore for JsonStore {
    fn goals(&self) -> Result<Vec<Goal>, Error> {
        Ok(self.goals.clone())
    }
}
