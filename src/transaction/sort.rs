//! Stable ordering of transactions by a single field.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use crate::Error;

use super::Transaction;

/// The transaction field to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Order by the date of the transaction.
    Date,
    /// Order by the amount of the transaction.
    Amount,
    /// Order by the category label, compared byte-wise.
    Category,
    /// Order by the description. Transactions without one come first.
    Description,
    /// Order by kind, income before expense.
    Kind,
}

impl SortKey {
    /// Compare two transactions by this key, in ascending order.
    pub fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortKey::Date => a.date.cmp(&b.date),
            // Amounts are never NaN, and -0.0 must tie with 0.0.
            SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Kind => a.kind.cmp(&b.kind),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "category" => Ok(SortKey::Category),
            "description" => Ok(SortKey::Description),
            "kind" | "type" => Ok(SortKey::Kind),
            _ => Err(Error::InvalidSortKey(s.to_owned())),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Category => "category",
            SortKey::Description => "description",
            SortKey::Kind => "kind",
        };

        write!(f, "{name}")
    }
}

/// The order to sort transactions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortDirection {
    /// The direction after the user clicks on the column header for `clicked`
    /// while the table is sorted by `current` in this direction.
    ///
    /// Clicking the active column while it is descending switches it to
    /// ascending, every other click sorts descending.
    pub fn toggled(self, current: SortKey, clicked: SortKey) -> SortDirection {
        if current == clicked && self == SortDirection::Descending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(Error::InvalidSortDirection(s.to_owned())),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Sort `records` by `key` in `direction`.
///
/// The sort is stable in both directions: transactions with equal keys keep
/// the order they had in `records`. Runs in O(n log n) time and O(n) extra
/// space.
pub fn sort(records: &[Transaction], key: SortKey, direction: SortDirection) -> Vec<Transaction> {
    merge_sort_by(records.to_vec(), |a, b| direction.apply(key.compare(a, b)))
}

/// Top-down merge sort.
///
/// Only takes from the right half when its head is strictly less than the
/// head of the left half, which keeps equal elements in input order.
pub(crate) fn merge_sort_by<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    split_and_merge(items, &compare)
}

fn split_and_merge<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = split_and_merge(items, compare);
    let right = split_and_merge(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}
