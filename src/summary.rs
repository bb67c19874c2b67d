//! Aggregate statistics over a set of transactions.
//!
//! Provides the income/expense totals and daily series shown on the
//! dashboard and the per-category totals plotted on the report page.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Duration};

use crate::transaction::{Transaction, TransactionKind};

/// Totals of income and expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub net_balance: f64,
}

/// Sum the income and expenses in `records`.
pub fn summarize(records: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in records {
        match transaction.kind {
            TransactionKind::Income => summary.total_income += transaction.amount,
            TransactionKind::Expense => summary.total_expenses += transaction.amount,
        }
    }

    summary.net_balance = summary.total_income - summary.total_expenses;
    summary
}

/// The total amount recorded against one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category label.
    pub category: String,
    /// The sum of the amounts in the category.
    pub amount: f64,
}

/// Total the amounts of `kind` transactions by category.
///
/// # Returns
/// One entry per category, largest total first. Categories with equal totals
/// are ordered by name.
pub fn category_totals(records: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in records.iter().filter(|t| t.kind == kind) {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut totals: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_owned(),
            amount,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    totals
}

/// The income and expenses recorded on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotal {
    /// The day the totals cover.
    pub date: Date,
    /// The sum of income on `date`.
    pub income: f64,
    /// The sum of expenses on `date`.
    pub expense: f64,
}

/// Total income and expenses per day for the `days` days ending on `end`.
///
/// # Returns
/// One entry per day, oldest first, `end` last. Days without transactions
/// have zero totals. Transactions outside the window are ignored.
pub fn daily_totals(records: &[Transaction], end: Date, days: u16) -> Vec<DailyTotal> {
    if days == 0 {
        return Vec::new();
    }

    let start = end
        .checked_sub(Duration::days(i64::from(days) - 1))
        .unwrap_or(Date::MIN);

    let mut totals = Vec::with_capacity(usize::from(days));
    let mut date = Some(start);
    while let Some(day) = date.filter(|&day| day <= end) {
        totals.push(DailyTotal {
            date: day,
            income: 0.0,
            expense: 0.0,
        });
        date = day.next_day();
    }

    for transaction in records.iter().filter(|t| (start..=end).contains(&t.date)) {
        let offset = (transaction.date - start).whole_days();
        let Some(total) = usize::try_from(offset).ok().and_then(|i| totals.get_mut(i)) else {
            continue;
        };

        match transaction.kind {
            TransactionKind::Income => total.income += transaction.amount,
            TransactionKind::Expense => total.expense += transaction.amount,
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{
        TransactionKind,
        test_utils::{food_and_salary, transaction},
    };

    use super::{CategoryTotal, DailyTotal, Summary, category_totals, daily_totals, summarize};

    #[test]
    fn sums_by_kind() {
        let got = summarize(&food_and_salary());

        assert_eq!(
            got,
            Summary {
                total_income: 200.0,
                total_expenses: 60.0,
                net_balance: 140.0,
            }
        );
    }

    #[test]
    fn empty_summary_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn category_totals_are_largest_first() {
        let mut records = food_and_salary();
        records.push(transaction(
            "4",
            TransactionKind::Expense,
            120.0,
            "Housing",
            date!(2024 - 01 - 02),
        ));
        records.push(transaction(
            "5",
            TransactionKind::Expense,
            60.0,
            "Entertainment",
            date!(2024 - 01 - 03),
        ));

        let got = category_totals(&records, TransactionKind::Expense);

        assert_eq!(
            got,
            vec![
                CategoryTotal {
                    category: "Housing".to_owned(),
                    amount: 120.0
                },
                CategoryTotal {
                    category: "Entertainment".to_owned(),
                    amount: 60.0
                },
                CategoryTotal {
                    category: "Food".to_owned(),
                    amount: 60.0
                },
            ]
        );
    }

    #[test]
    fn category_totals_only_include_kind() {
        let got = category_totals(&food_and_salary(), TransactionKind::Income);

        assert_eq!(
            got,
            vec![CategoryTotal {
                category: "Salary".to_owned(),
                amount: 200.0
            }]
        );
    }

    #[test]
    fn daily_totals_cover_the_window_ending_today() {
        let got = daily_totals(&food_and_salary(), date!(2024 - 01 - 07), 7);

        let dates: Vec<_> = got.iter().map(|total| total.date).collect();
        assert_eq!(dates.first(), Some(&date!(2024 - 01 - 01)));
        assert_eq!(dates.last(), Some(&date!(2024 - 01 - 07)));
        assert_eq!(dates.len(), 7);

        assert_eq!(
            got[0],
            DailyTotal {
                date: date!(2024 - 01 - 01),
                income: 200.0,
                expense: 0.0
            }
        );
        assert_eq!(
            got[4],
            DailyTotal {
                date: date!(2024 - 01 - 05),
                income: 0.0,
                expense: 60.0
            }
        );
    }

    #[test]
    fn days_without_transactions_are_zero() {
        let got = daily_totals(&food_and_salary(), date!(2024 - 01 - 07), 7);

        assert_eq!(
            got[1],
            DailyTotal {
                date: date!(2024 - 01 - 02),
                income: 0.0,
                expense: 0.0
            }
        );

        let got = daily_totals(&[], date!(2024 - 01 - 07), 3);
        assert_eq!(got.len(), 3);
        assert!(got.iter().all(|t| t.income == 0.0 && t.expense == 0.0));
    }

    #[test]
    fn daily_totals_ignore_transactions_outside_window() {
        // The window is the 2nd to the 5th, so the salary on the 1st is left out.
        let got = daily_totals(&food_and_salary(), date!(2024 - 01 - 05), 4);

        assert_eq!(got.len(), 4);
        assert_eq!(got[0].date, date!(2024 - 01 - 02));
        assert!(got.iter().all(|total| total.income == 0.0));
        assert_eq!(got[3].expense, 60.0);

        // Nothing after `end` is counted either.
        let got = daily_totals(&food_and_salary(), date!(2024 - 01 - 04), 4);
        assert!(got.iter().all(|total| total.expense == 0.0));
        assert_eq!(got[0].income, 200.0);
    }

    #[test]
    fn zero_days_is_empty() {
        assert!(daily_totals(&food_and_salary(), date!(2024 - 01 - 07), 0).is_empty());
    }
}
