use time::{Date, macros::date};

use super::{Transaction, TransactionKind};

#[track_caller]
pub fn transaction(
    id: &str,
    kind: TransactionKind,
    amount: f64,
    category: &str,
    date: Date,
) -> Transaction {
    Transaction::build(id, amount, date, category)
        .kind(kind)
        .finalize()
        .expect("Could not build test transaction")
}

/// Three transactions: two "Food" expenses sharing a date and one salary.
pub fn food_and_salary() -> Vec<Transaction> {
    vec![
        transaction(
            "1",
            TransactionKind::Expense,
            50.0,
            "Food",
            date!(2024 - 01 - 05),
        ),
        transaction(
            "2",
            TransactionKind::Income,
            200.0,
            "Salary",
            date!(2024 - 01 - 01),
        ),
        transaction(
            "3",
            TransactionKind::Expense,
            10.0,
            "Food",
            date!(2024 - 01 - 05),
        ),
    ]
}

#[track_caller]
pub fn assert_ids(transactions: &[Transaction], want: &[&str]) {
    let got: Vec<&str> = transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(got, want, "want transaction IDs {want:?}, got {got:?}");
}
