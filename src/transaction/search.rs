//! Free-text search over the category, description and date of transactions.

use std::collections::HashSet;

use super::{Transaction, sort::merge_sort_by};

/// The fields a search term is matched against, in the order they are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchField {
    Category,
    Description,
    Date,
}

const SEARCH_FIELDS: [SearchField; 3] = [
    SearchField::Category,
    SearchField::Description,
    SearchField::Date,
];

impl SearchField {
    /// The lowercased text of this field for `transaction`.
    fn text(self, transaction: &Transaction) -> String {
        match self {
            SearchField::Category => transaction.category.to_lowercase(),
            SearchField::Description => transaction
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            SearchField::Date => transaction.rendered_date(),
        }
    }
}

/// Find the transactions whose category, description or date contains `term`.
///
/// Matching is a case-insensitive substring match. A blank `term` matches
/// everything and returns `records` as is.
///
/// Each field is scanned in turn over the records ordered by that field, so
/// the result is in order of discovery: category matches first, then
/// description matches, then date matches. A transaction that matches on
/// several fields appears once, at its first discovery. Re-sort the result if
/// a particular display order is needed.
pub fn search(records: &[Transaction], term: &str) -> Vec<Transaction> {
    if term.trim().is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for field in SEARCH_FIELDS {
        let keyed: Vec<(String, &Transaction)> = records
            .iter()
            .map(|transaction| (field.text(transaction), transaction))
            .collect();
        let ordered = merge_sort_by(keyed, |a, b| a.0.cmp(&b.0));

        for (text, transaction) in ordered {
            if text.contains(&needle) && seen.insert(transaction.id.as_str()) {
                found.push(transaction.clone());
            }
        }
    }

    tracing::debug!(
        "Search for {term:?} matched {} of {} transactions",
        found.len(),
        records.len()
    );

    found
}
