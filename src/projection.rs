//! Builds the filtered, searched, sorted and paged view of transactions shown
//! on the report page.

use serde::Serialize;
use time::Date;

use crate::{
    Error, ViewConfig,
    pagination::paginate,
    repository::TransactionRepository,
    summary::{CategoryTotal, DailyTotal, Summary, category_totals, daily_totals, summarize},
    timezone::today_in,
    transaction::{
        FilterCriteria, SortDirection, SortKey, Transaction, TransactionKind, filter, search, sort,
    },
};

/// Everything needed to build one page of the transaction view.
///
/// The query is passed explicitly to each call, nothing is remembered between
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery {
    /// Criteria every transaction in the view must satisfy.
    pub criteria: FilterCriteria,
    /// Free text matched against category, description and date.
    pub search: String,
    /// The field to order the view by.
    pub sort_key: SortKey,
    /// The direction to order the view in.
    pub sort_direction: SortDirection,
    /// The page to show, starting from 1.
    pub page: u64,
    /// The number of transactions per page.
    pub page_size: u64,
}

impl ViewQuery {
    /// A query for the first page using the defaults in `config`.
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            search: String::new(),
            sort_key: config.default_sort_key,
            sort_direction: config.default_sort_direction,
            page: config.default_page,
            page_size: config.default_page_size,
        }
    }

    /// Replace the filter criteria and go back to the first page.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.page = 1;
        self
    }

    /// Replace the search term and go back to the first page.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_owned();
        self.page = 1;
        self
    }

    /// Order the view by `key` in `direction`.
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    /// Show page `page`.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

/// One page of the transaction view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// The transactions on the requested page.
    pub items: Vec<Transaction>,
    /// The number of transactions that passed the filter and search.
    pub total_count: u64,
    /// The number of pages needed to show every matching transaction.
    pub total_pages: u64,
}

/// Build the view of `records` described by `query`.
///
/// Transactions are filtered, then searched, then sorted, then paged.
/// `today` is the upper date bound when the criteria do not set one.
///
/// # Errors
/// Returns [Error::InvalidPageSize] if the query's page size is zero.
pub fn project(
    records: &[Transaction],
    query: &ViewQuery,
    today: Date,
) -> Result<Projection, Error> {
    let filtered = filter(records, &query.criteria, today);
    tracing::debug!(
        "Filter kept {} of {} transactions",
        filtered.len(),
        records.len()
    );

    finish(&filtered, query)
}

fn finish(filtered: &[Transaction], query: &ViewQuery) -> Result<Projection, Error> {
    let matched = search(filtered, &query.search);
    let sorted = sort(&matched, query.sort_key, query.sort_direction);
    let page = paginate(&sorted, query.page_size, query.page)?;

    tracing::debug!(
        "Showing page {} of {} ({} transactions sorted by {} {})",
        query.page,
        page.total_pages,
        sorted.len(),
        query.sort_key,
        query.sort_direction
    );

    Ok(Projection {
        items: page.items,
        total_count: sorted.len() as u64,
        total_pages: page.total_pages,
    })
}

/// Builds views of the transactions held in a [TransactionRepository].
#[derive(Debug, Clone)]
pub struct ViewEngine<R> {
    repository: R,
    config: ViewConfig,
}

impl<R: TransactionRepository> ViewEngine<R> {
    /// Create an engine reading from `repository`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidPageSize] if the default page size is zero,
    /// - or [Error::InvalidTimezoneError] if the configured timezone is unknown.
    pub fn new(repository: R, config: ViewConfig) -> Result<Self, Error> {
        if config.default_page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        today_in(config.timezone.as_deref())?;

        Ok(Self { repository, config })
    }

    /// The config the engine was created with.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// A query for the first page using the engine's defaults.
    pub fn default_query(&self) -> ViewQuery {
        ViewQuery::new(&self.config)
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> Result<Date, Error> {
        today_in(self.config.timezone.as_deref())
    }

    /// Build the view described by `query`.
    pub fn query(&self, query: &ViewQuery) -> Result<Projection, Error> {
        self.query_as_of(query, self.today()?)
    }

    /// Build the view described by `query`, treating `today` as the current date.
    pub fn query_as_of(&self, query: &ViewQuery, today: Date) -> Result<Projection, Error> {
        let filtered = self.repository.list(&query.criteria.resolve(today))?;
        tracing::debug!("Repository returned {} transactions", filtered.len());

        finish(&filtered, query)
    }

    /// Income and expense totals of the transactions that satisfy `criteria`.
    pub fn summary(&self, criteria: &FilterCriteria, today: Date) -> Result<Summary, Error> {
        let transactions = self.repository.list(&criteria.resolve(today))?;

        Ok(summarize(&transactions))
    }

    /// Per-category totals of the `kind` transactions that satisfy `criteria`.
    pub fn category_totals(
        &self,
        criteria: &FilterCriteria,
        kind: TransactionKind,
        today: Date,
    ) -> Result<Vec<CategoryTotal>, Error> {
        let transactions = self.repository.list(&criteria.resolve(today))?;

        Ok(category_totals(&transactions, kind))
    }

    /// Daily income and expense totals for the `days` days ending on `today`,
    /// over the transactions that satisfy `criteria`.
    pub fn daily_totals(
        &self,
        criteria: &FilterCriteria,
        days: u16,
        today: Date,
    ) -> Result<Vec<DailyTotal>, Error> {
        let transactions = self.repository.list(&criteria.resolve(today))?;

        Ok(daily_totals(&transactions, today, days))
    }
}
