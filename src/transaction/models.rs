//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The identifier of a transaction.
///
/// Identifiers are opaque strings assigned by whichever store the transaction
/// came from.
pub type TransactionId = String;

/// The categories offered when recording a transaction.
///
/// These are suggestions only, any category label is accepted.
pub const SUGGESTED_CATEGORIES: [&str; 10] = [
    "Salary",
    "Freelance",
    "Investments",
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Other",
];

/// Whether money was earned or spent in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(Error::InvalidKind(s.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are treated as read-only input: views reorder, filter and
/// select them but never change their fields.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The category label, e.g. "Food" or "Salary".
    pub category: String,
    /// An optional text description of what the transaction was for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(id: &str, amount: f64, date: Date, category: &str) -> TransactionBuilder {
        TransactionBuilder {
            id: id.to_owned(),
            kind: TransactionKind::Expense,
            amount,
            category: category.to_owned(),
            description: None,
            date,
        }
    }

    /// The date as it is displayed and searched, e.g. "2024-01-05".
    pub fn rendered_date(&self) -> String {
        self.date.to_string()
    }
}

/// A builder for creating [Transaction] instances.
///
/// Transactions default to expenses without a description.
///
/// # Examples
///
/// ```
/// use time::macros::date;
///
/// use expense_tracker::{Transaction, TransactionKind};
///
/// let transaction = Transaction::build("42", 1500.0, date!(2025 - 01 - 15), "Salary")
///     .kind(TransactionKind::Income)
///     .description("January pay")
///     .finalize()
///     .unwrap();
///
/// assert_eq!(transaction.description.as_deref(), Some("January pay"));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The identifier assigned by the store.
    pub id: TransactionId,
    /// Whether money was earned or spent.
    pub kind: TransactionKind,
    /// The non-negative magnitude of the transaction.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// A human-readable description of the transaction.
    pub description: Option<String>,
    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionBuilder {
    /// Set the kind of the transaction.
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the description of the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Build the transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTransactionId] if the ID is empty or only whitespace,
    /// - or [Error::InvalidAmount] if the amount is negative, NaN or infinite.
    pub fn finalize(self) -> Result<Transaction, Error> {
        if self.id.trim().is_empty() {
            return Err(Error::EmptyTransactionId);
        }

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(Transaction {
            id: self.id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        })
    }
}
