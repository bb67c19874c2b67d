//! Defines the transaction repository trait and an in-memory implementation.

use std::io::Read;

use crate::{
    Error, import,
    transaction::{Transaction, TransactionFilter},
};

/// The single source of transactions that views are built from.
pub trait TransactionRepository {
    /// Retrieve the transactions that satisfy `filter`, in the order they are stored.
    fn list(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error>;
}

/// Holds a fixed collection of transactions in memory.
///
/// The collection cannot be changed after construction, so a shared reference
/// can be read from several threads at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryTransactionRepository {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionRepository {
    /// Create a repository holding `transactions`.
    ///
    /// # Errors
    /// Returns an error from [import::validate_transactions] if a transaction is malformed
    /// or two transactions share an ID.
    pub fn new(transactions: Vec<Transaction>) -> Result<Self, Error> {
        Ok(Self {
            transactions: import::validate_transactions(transactions)?,
        })
    }

    /// Create a repository from a JSON array of transactions.
    ///
    /// # Errors
    /// Returns an error from [import::parse_json].
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(Self {
            transactions: import::parse_json(json)?,
        })
    }

    /// Create a repository from CSV text.
    ///
    /// # Errors
    /// Returns an error from [import::parse_csv].
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(Self {
            transactions: import::parse_csv(reader)?,
        })
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the repository holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn list(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        Ok(self
            .transactions
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .cloned()
            .collect())
    }
}
