//! Defaults for building views of transactions.

use crate::transaction::{SortDirection, SortKey};

/// The config for transaction views.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum transactions to display per page when not specified in a request.
    pub default_page_size: u64,
    /// The field to sort by when not specified in a request, or when the
    /// requested sort key is invalid.
    pub default_sort_key: SortKey,
    /// The direction to sort in when not specified in a request.
    pub default_sort_direction: SortDirection,
    /// The canonical timezone, e.g. "Pacific/Auckland", used to decide what
    /// "today" is. `None` uses UTC.
    pub timezone: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
            default_sort_key: SortKey::Amount,
            default_sort_direction: SortDirection::Descending,
            timezone: None,
        }
    }
}

impl ViewConfig {
    /// Parse `sort_key`, falling back to [ViewConfig::default_sort_key] if it
    /// is missing or invalid.
    pub fn sort_key_or_default(&self, sort_key: Option<&str>) -> SortKey {
        match sort_key.map(str::parse::<SortKey>) {
            Some(Ok(key)) => key,
            Some(Err(error)) => {
                tracing::warn!("{error}, sorting by {}", self.default_sort_key);
                self.default_sort_key
            }
            None => self.default_sort_key,
        }
    }
}
