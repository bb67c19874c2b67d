//! Composable filter criteria for transactions.

use std::{ops::RangeInclusive, str::FromStr};

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

use super::{Transaction, TransactionKind};

/// The category value that selects every category.
pub const ALL_CATEGORIES: &str = "All";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Restricts transactions to one kind, or lets every kind through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    /// Income and expenses.
    #[default]
    All,
    /// Only transactions of the given kind.
    Only(TransactionKind),
}

impl FromStr for KindFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(KindFilter::All)
        } else {
            s.parse().map(KindFilter::Only)
        }
    }
}

/// Restricts transactions to one category, or lets every category through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only transactions whose category is exactly this label.
    Exact(String),
}

impl From<&str> for CategoryFilter {
    /// [ALL_CATEGORIES] and the empty string select every category.
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_owned())
        }
    }
}

/// The filter criteria captured from the user.
///
/// Every criterion that is set must hold for a transaction to pass, unset
/// criteria let everything through. Date bounds are kept as the text the user
/// entered, bounds that do not parse as `YYYY-MM-DD` are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive text that must appear in the description or category.
    pub text: Option<String>,
    /// The kind of transaction to keep.
    pub kind: KindFilter,
    /// The category to keep.
    pub category: CategoryFilter,
    /// The earliest date to keep (inclusive).
    pub date_from: Option<String>,
    /// The latest date to keep (inclusive).
    pub date_to: Option<String>,
}

impl FilterCriteria {
    /// Parse the criteria into a [TransactionFilter].
    ///
    /// An unset lower date bound becomes the earliest representable date and
    /// an unset upper date bound becomes `today`.
    pub fn resolve(&self, today: Date) -> TransactionFilter {
        let text = self
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_lowercase);

        let start = parse_bound(self.date_from.as_deref()).unwrap_or(Date::MIN);
        let end = parse_bound(self.date_to.as_deref()).unwrap_or(today);

        TransactionFilter {
            text,
            kind: self.kind,
            category: self.category.clone(),
            date_range: start..=end,
        }
    }
}

fn parse_bound(bound: Option<&str>) -> Option<Date> {
    let bound = bound?.trim();

    if bound.is_empty() {
        return None;
    }

    match Date::parse(bound, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!("Ignoring malformed date bound {bound:?}: {error}");
            None
        }
    }
}

/// Filter criteria with parsed date bounds, ready to test transactions against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Lowercased search text, `None` when no text was given.
    pub text: Option<String>,
    /// The kind of transaction to keep.
    pub kind: KindFilter,
    /// The category to keep.
    pub category: CategoryFilter,
    /// Include transactions within `date_range` (inclusive).
    pub date_range: RangeInclusive<Date>,
}

impl TransactionFilter {
    /// Whether `transaction` satisfies every criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_text(transaction)
            && self.matches_kind(transaction)
            && self.matches_category(transaction)
            && self.date_range.contains(&transaction.date)
    }

    fn matches_text(&self, transaction: &Transaction) -> bool {
        let Some(text) = &self.text else {
            return true;
        };

        let in_description = transaction
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(text.as_str()));

        in_description || transaction.category.to_lowercase().contains(text.as_str())
    }

    fn matches_kind(&self, transaction: &Transaction) -> bool {
        match self.kind {
            KindFilter::All => true,
            KindFilter::Only(kind) => transaction.kind == kind,
        }
    }

    fn matches_category(&self, transaction: &Transaction) -> bool {
        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Exact(category) => &transaction.category == category,
        }
    }
}

/// Keep the transactions in `records` that satisfy `criteria`.
///
/// `today` is the upper date bound used when `criteria` does not set one.
/// The output keeps the order of `records`.
pub fn filter(records: &[Transaction], criteria: &FilterCriteria, today: Date) -> Vec<Transaction> {
    let transaction_filter = criteria.resolve(today);

    records
        .iter()
        .filter(|transaction| transaction_filter.matches(transaction))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{
            Transaction, TransactionKind,
            test_utils::{assert_ids, food_and_salary, transaction},
        },
    };

    use super::{CategoryFilter, FilterCriteria, KindFilter, filter};

    const TODAY: time::Date = date!(2024 - 02 - 01);

    fn records() -> Vec<Transaction> {
        let mut records = food_and_salary();
        records[0].description = Some("Lunch with Sam".to_owned());
        records.push(
            Transaction::build("4", 30.0, date!(2024 - 01 - 20), "Transportation")
                .description("Train to the coast")
                .finalize()
                .unwrap(),
        );
        records
    }

    #[test]
    fn default_criteria_pass_everything_up_to_today() {
        let got = filter(&records(), &FilterCriteria::default(), TODAY);

        assert_ids(&got, &["1", "2", "3", "4"]);
    }

    #[test]
    fn default_upper_bound_excludes_future_dates() {
        let mut records = records();
        records.push(transaction(
            "5",
            TransactionKind::Expense,
            1.0,
            "Food",
            date!(2024 - 02 - 02),
        ));

        let got = filter(&records, &FilterCriteria::default(), TODAY);

        assert_ids(&got, &["1", "2", "3", "4"]);
    }

    #[test]
    fn text_matches_description_or_category() {
        let criteria = FilterCriteria {
            text: Some("SAM".to_owned()),
            ..Default::default()
        };
        assert_ids(&filter(&records(), &criteria, TODAY), &["1"]);

        let criteria = FilterCriteria {
            text: Some("port".to_owned()),
            ..Default::default()
        };
        assert_ids(&filter(&records(), &criteria, TODAY), &["4"]);
    }

    #[test]
    fn text_does_not_match_date() {
        let criteria = FilterCriteria {
            text: Some("2024".to_owned()),
            ..Default::default()
        };

        assert!(filter(&records(), &criteria, TODAY).is_empty());
    }

    #[test]
    fn blank_text_is_pass_through() {
        let criteria = FilterCriteria {
            text: Some("  ".to_owned()),
            ..Default::default()
        };

        assert_eq!(filter(&records(), &criteria, TODAY).len(), 4);
    }

    #[test]
    fn filters_by_kind() {
        let criteria = FilterCriteria {
            kind: KindFilter::Only(TransactionKind::Income),
            ..Default::default()
        };

        assert_ids(&filter(&records(), &criteria, TODAY), &["2"]);
    }

    #[test]
    fn filters_by_exact_category() {
        let criteria = FilterCriteria {
            category: CategoryFilter::from("Food"),
            ..Default::default()
        };
        assert_ids(&filter(&records(), &criteria, TODAY), &["1", "3"]);

        let criteria = FilterCriteria {
            category: CategoryFilter::from("food"),
            ..Default::default()
        };
        assert!(filter(&records(), &criteria, TODAY).is_empty());
    }

    #[test]
    fn all_category_sentinel_is_pass_through() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("all"),
            CategoryFilter::Exact("all".to_owned())
        );
    }

    #[test]
    fn date_range_is_inclusive() {
        let criteria = FilterCriteria {
            date_from: Some("2024-01-05".to_owned()),
            date_to: Some("2024-01-20".to_owned()),
            ..Default::default()
        };

        assert_ids(&filter(&records(), &criteria, TODAY), &["1", "3", "4"]);
    }

    #[test]
    fn malformed_date_bounds_are_ignored() {
        let criteria = FilterCriteria {
            date_from: Some("last tuesday".to_owned()),
            date_to: Some("2024-13-45".to_owned()),
            ..Default::default()
        };

        assert_ids(&filter(&records(), &criteria, TODAY), &["1", "2", "3", "4"]);
    }

    #[test]
    fn criteria_are_combined() {
        let criteria = FilterCriteria {
            text: Some("food".to_owned()),
            kind: KindFilter::Only(TransactionKind::Expense),
            category: CategoryFilter::from("Food"),
            date_from: Some("2024-01-02".to_owned()),
            date_to: None,
        };

        let got = filter(&records(), &criteria, TODAY);

        assert_ids(&got, &["1", "3"]);
        let transaction_filter = criteria.resolve(TODAY);
        assert!(got.iter().all(|t| transaction_filter.matches(t)));
    }

    #[test]
    fn output_is_subset_and_complete() {
        let records = records();
        let criteria = FilterCriteria {
            kind: KindFilter::Only(TransactionKind::Expense),
            date_to: Some("2024-01-10".to_owned()),
            ..Default::default()
        };
        let transaction_filter = criteria.resolve(TODAY);

        let got = filter(&records, &criteria, TODAY);

        let want: Vec<Transaction> = records
            .iter()
            .filter(|t| transaction_filter.matches(t))
            .cloned()
            .collect();
        assert_eq!(got, want);
        assert_ids(&got, &["1", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        assert!(filter(&[], &FilterCriteria::default(), TODAY).is_empty());
    }

    #[test]
    fn parses_kind_filter() {
        assert_eq!("All".parse::<KindFilter>(), Ok(KindFilter::All));
        assert_eq!(
            "income".parse::<KindFilter>(),
            Ok(KindFilter::Only(TransactionKind::Income))
        );
        assert_eq!(
            "transfer".parse::<KindFilter>(),
            Err(Error::InvalidKind("transfer".to_owned()))
        );
    }
}
