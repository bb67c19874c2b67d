use std::{error::Error, fs::File, io, path::Path};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    CategoryFilter, CategoryTotal, DailyTotal, FilterCriteria, InMemoryTransactionRepository,
    KindFilter, SortDirection, Summary, TransactionKind, ViewConfig, ViewEngine,
};

/// Print a page of the transaction report for a JSON or CSV file of transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the transactions. Files ending in `.csv` are read as CSV,
    /// anything else as a JSON array.
    #[arg(long, short)]
    file: String,

    /// Free text matched against category, description and date.
    #[arg(long, short, default_value = "")]
    search: String,

    /// Text that must appear in the description or category.
    #[arg(long)]
    text: Option<String>,

    /// Only show "income" or "expense" transactions, or "all".
    #[arg(long, default_value = "all")]
    kind: KindFilter,

    /// Only show transactions in this category. "All" shows every category.
    #[arg(long, default_value = expense_tracker::ALL_CATEGORIES)]
    category: String,

    /// The earliest date to show, as YYYY-MM-DD.
    #[arg(long)]
    from: Option<String>,

    /// The latest date to show, as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    to: Option<String>,

    /// The field to sort by: date, amount, category, description or kind.
    #[arg(long)]
    sort: Option<String>,

    /// The sort direction: asc or desc.
    #[arg(long)]
    direction: Option<SortDirection>,

    /// The page to show, starting from 1.
    #[arg(long, short)]
    page: Option<u64>,

    /// The number of transactions per page.
    #[arg(long)]
    page_size: Option<u64>,

    /// The canonical timezone used to decide what today is, e.g. "Pacific/Auckland".
    #[arg(long)]
    timezone: Option<String>,

    /// Print totals instead of a page of transactions.
    #[arg(long, value_enum)]
    summary: Option<SummaryKind>,

    /// The number of days, ending today, covered by the daily summary.
    #[arg(long, default_value_t = 7)]
    days: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryKind {
    /// Total income, expenses and net balance.
    Totals,
    /// Expense totals per category, largest first.
    Expenses,
    /// Income totals per category, largest first.
    Income,
    /// Income and expense totals for each of the last `--days` days.
    Daily,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SummaryOutput {
    Totals(Summary),
    Categories(Vec<CategoryTotal>),
    Daily(Vec<DailyTotal>),
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let path = Path::new(&args.file);
    let repository = match path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case("csv") => {
            InMemoryTransactionRepository::from_csv(File::open(path)?)?
        }
        _ => InMemoryTransactionRepository::from_json(&std::fs::read_to_string(path)?)?,
    };
    tracing::info!("Loaded {} transactions from {path:?}", repository.len());

    let defaults = ViewConfig::default();
    let config = ViewConfig {
        default_page_size: args.page_size.unwrap_or(defaults.default_page_size),
        timezone: args.timezone.clone(),
        ..defaults
    };

    let criteria = FilterCriteria {
        text: args.text.clone(),
        kind: args.kind,
        category: CategoryFilter::from(args.category.as_str()),
        date_from: args.from.clone(),
        date_to: args.to.clone(),
    };
    let sort_key = config.sort_key_or_default(args.sort.as_deref());
    let sort_direction = args.direction.unwrap_or(config.default_sort_direction);

    let engine = ViewEngine::new(repository, config)?;
    let today = engine.today()?;

    let stdout = io::stdout().lock();
    match args.summary {
        Some(kind) => {
            let output = match kind {
                SummaryKind::Totals => SummaryOutput::Totals(engine.summary(&criteria, today)?),
                SummaryKind::Expenses => SummaryOutput::Categories(engine.category_totals(
                    &criteria,
                    TransactionKind::Expense,
                    today,
                )?),
                SummaryKind::Income => SummaryOutput::Categories(engine.category_totals(
                    &criteria,
                    TransactionKind::Income,
                    today,
                )?),
                SummaryKind::Daily => {
                    SummaryOutput::Daily(engine.daily_totals(&criteria, args.days, today)?)
                }
            };
            serde_json::to_writer_pretty(stdout, &output)?;
        }
        None => {
            let query = engine
                .default_query()
                .with_criteria(criteria)
                .with_search(&args.search)
                .with_sort(sort_key, sort_direction)
                .with_page(args.page.unwrap_or(engine.config().default_page));
            let projection = engine.query_as_of(&query, today)?;
            serde_json::to_writer_pretty(stdout, &projection)?;
        }
    }
    println!();

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Log to stderr so that stdout only holds the JSON output.
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_log)
        .init();
}
