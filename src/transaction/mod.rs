//! Transactions and the operations that build views of them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Stable sorting by a transaction field
//! - Free-text search across category, description and date
//! - Filter criteria for text, kind, category and date range

mod filter;
mod models;
mod search;
mod sort;

#[cfg(test)]
pub(crate) mod test_utils;

pub use filter::{
    ALL_CATEGORIES, CategoryFilter, FilterCriteria, KindFilter, TransactionFilter, filter,
};
pub use models::{
    SUGGESTED_CATEGORIES, Transaction, TransactionBuilder, TransactionId, TransactionKind,
};
pub use search::search;
pub use sort::{SortDirection, SortKey, sort};
