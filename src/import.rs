//! Reads transactions from JSON and CSV documents.
//!
//! Both formats use the fields of [Transaction]: `id`, `type`, `amount`,
//! `category`, `description` (optional) and `date` (`YYYY-MM-DD`).

use std::{collections::HashSet, io::Read};

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder},
};

/// Parse a JSON array of transactions.
///
/// # Errors
/// This function will return a:
/// - [Error::JSONSerializationError] if `json` is not an array of transactions,
/// - or any error from [validate_transactions].
pub fn parse_json(json: &str) -> Result<Vec<Transaction>, Error> {
    let transactions: Vec<Transaction> = serde_json::from_str(json)?;

    validate_transactions(transactions)
}

/// Parse CSV text with a header row naming the transaction fields.
///
/// An empty `description` cell is read as no description.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCSV] if a row cannot be read as a transaction,
/// - or any error from [validate_transactions].
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>, Error> {
    let transactions = csv::Reader::from_reader(reader)
        .deserialize::<Transaction>()
        .collect::<Result<Vec<_>, _>>()?;

    validate_transactions(transactions)
}

/// Check that every transaction has a unique, non-empty ID and a valid amount.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyTransactionId] or [Error::InvalidAmount] for a malformed transaction,
/// - or [Error::DuplicateTransactionId] if two transactions share an ID.
pub fn validate_transactions(transactions: Vec<Transaction>) -> Result<Vec<Transaction>, Error> {
    let mut seen = HashSet::new();

    transactions
        .into_iter()
        .map(|transaction| {
            if !seen.insert(transaction.id.clone()) {
                return Err(Error::DuplicateTransactionId(transaction.id));
            }

            TransactionBuilder {
                id: transaction.id,
                kind: transaction.kind,
                amount: transaction.amount,
                category: transaction.category,
                description: transaction.description,
                date: transaction.date,
            }
            .finalize()
        })
        .collect()
}
