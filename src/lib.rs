//! The transaction view engine of a personal expense tracker.
//!
//! Given a user's income and expense transactions and a [ViewQuery], this
//! library filters, searches, sorts and pages them into a [Projection]. It
//! also computes the summary totals shown alongside the report. The `report`
//! binary runs these queries over a JSON or CSV file from the command line.
//!
//! Every operation is a pure function of its inputs. Callers own the
//! transactions and pass the query state in explicitly on each call.
//!
//! ```
//! use time::macros::date;
//!
//! use expense_tracker::{SortDirection, SortKey, Transaction, ViewQuery, project};
//!
//! let transactions = vec![
//!     Transaction::build("1", 50.0, date!(2024 - 01 - 05), "Food").finalize().unwrap(),
//!     Transaction::build("2", 10.0, date!(2024 - 01 - 01), "Food").finalize().unwrap(),
//! ];
//! let query = ViewQuery::default().with_sort(SortKey::Date, SortDirection::Ascending);
//!
//! let projection = project(&transactions, &query, date!(2024 - 02 - 01)).unwrap();
//!
//! assert_eq!(projection.items[0].id, "2");
//! assert_eq!(projection.total_pages, 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod import;
mod pagination;
mod projection;
mod repository;
mod summary;
mod timezone;
mod transaction;

pub use config::ViewConfig;
pub use error::Error;
pub use import::{parse_csv, parse_json, validate_transactions};
pub use pagination::{Page, paginate};
pub use projection::{Projection, ViewEngine, ViewQuery, project};
pub use repository::{InMemoryTransactionRepository, TransactionRepository};
pub use summary::{
    CategoryTotal, DailyTotal, Summary, category_totals, daily_totals, summarize,
};
pub use timezone::today_in;
pub use transaction::{
    ALL_CATEGORIES, CategoryFilter, FilterCriteria, KindFilter, SUGGESTED_CATEGORIES,
    SortDirection, SortKey, Transaction, TransactionBuilder, TransactionFilter, TransactionId,
    TransactionKind, filter, search, sort,
};
