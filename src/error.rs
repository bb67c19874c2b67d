//! Defines the crate level error type.

/// The errors that may occur when building a view of transactions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested sort key does not name a sortable transaction field.
    ///
    /// Callers should fall back to a known default key, e.g.
    /// [crate::ViewConfig::default_sort_key], rather than failing the view.
    #[error("\"{0}\" is not a valid sort key")]
    InvalidSortKey(String),

    /// The requested sort direction was neither ascending nor descending.
    #[error("\"{0}\" is not a valid sort direction, expected \"asc\" or \"desc\"")]
    InvalidSortDirection(String),

    /// The text did not name a transaction kind (income or expense).
    #[error("\"{0}\" is not a valid transaction kind, expected \"income\" or \"expense\"")]
    InvalidKind(String),

    /// A page size of zero was requested.
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// A transaction was built with a negative or non-finite amount.
    ///
    /// Amounts are always recorded as a non-negative magnitude, the
    /// transaction kind determines whether money was earned or spent.
    #[error("{0} is not a valid amount, amounts must be finite and non-negative")]
    InvalidAmount(f64),

    /// A transaction was built with an empty identifier.
    #[error("transaction ID cannot be empty")]
    EmptyTransactionId,

    /// Two transactions in the same collection share an ID.
    #[error("the transaction ID \"{0}\" appears more than once")]
    DuplicateTransactionId(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// A JSON document could not be parsed as a list of transactions, or the
    /// output could not be serialized.
    #[error("could not (de)serialize JSON: {0}")]
    JSONSerializationError(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV file: {0}")]
    InvalidCSV(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::InvalidCSV(value.to_string())
    }
}
