//! The record types supplied by the data provider.
//!
//! The upstream API serialises these as camelCase JSON with amounts as
//! numbers and dates as ISO strings. Every leniency rule (default category,
//! malformed amounts, unknown transaction types) is applied here, once, so
//! the aggregation functions never have to re-check shapes.

mod budget;
mod goal;
mod transaction;

pub use budget::{Budget, BudgetPeriod};
pub use goal::Goal;
pub use transaction::{Transaction, TransactionKind, UNCATEGORISED_LABEL};

/// The integer IDs the upstream API assigns to records.
pub type DatabaseId = i64;

/// Serde helpers for the upstream date formats.
pub(crate) mod dates {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]");

    /// Parses an ISO date, tolerating a trailing time component.
    ///
    /// Transaction dates arrive as full datetimes ("2024-03-15T10:30:00Z")
    /// while goal deadlines are plain dates; the date part always comes
    /// first.
    pub(crate) fn parse(value: &str) -> Result<Date, time::error::Parse> {
        let date_part = value.get(..10).unwrap_or(value);
        Date::parse(date_part, DATE_FORMAT)
    }

    pub(crate) fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Date, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(D::Error::custom)
    }

    /// Variants of the helpers above for optional dates.
    pub(crate) mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use serde::de::Error as _;
        use time::Date;

        pub(crate) fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.collect_str(date),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(value) => super::parse(&value).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// Substitutes the default category for missing, null, or blank values.
pub(crate) fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value {
        Some(category) if !category.trim().is_empty() => category,
        _ => UNCATEGORISED_LABEL.to_owned(),
    })
}

pub(crate) fn default_category() -> String {
    UNCATEGORISED_LABEL.to_owned()
}
