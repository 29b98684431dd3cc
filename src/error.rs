//! The crate-level error type.
//!
//! The aggregation functions themselves are infallible: malformed amounts
//! become zero, missing optionals take their defaults, and empty inputs
//! produce zeroed outputs. Errors only arise at the data provider boundary,
//! where a document has to be read and parsed.

use time::Date;

/// The errors that may occur while loading records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The records document could not be read.
    #[error("could not read records: {0}")]
    Io(#[from] std::io::Error),

    /// The records document was not valid JSON, or a record inside it had a
    /// structurally unusable field such as an unparseable date.
    ///
    /// Dates are rejected rather than defaulted because a transaction
    /// without a real date cannot be bucketed into a month.
    #[error("could not parse records: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A date string given on the command line could not be parsed.
    ///
    /// Callers should pass the original input string.
    #[error("\"{0}\" is not a valid YYYY-MM-DD date")]
    InvalidDate(String),

    /// A date range where the start falls after the end.
    #[error("date range starts at {0} but ends earlier, at {1}")]
    EmptyDateRange(Date, Date),
}
