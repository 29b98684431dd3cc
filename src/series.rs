//! Monthly time-series bucketing for trend charts.
//!
//! Transactions are bucketed by the (year, month) of their date, represented
//! as the first day of the month. Buckets are sorted by that date value and
//! only then formatted into "MMM YYYY" labels; sorting the labels themselves
//! would order "Jan 2025" before "Dec 2024".

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::{
    model::{Transaction, TransactionKind},
    money::Money,
};

/// One month's total for a single-series trend chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySeriesPoint {
    /// The month label, e.g. "Jan 2025".
    pub month: String,
    /// The summed amount for the month.
    pub amount: Money,
}

/// One month's income, expenses, and net savings for the trends chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyTrendPoint {
    /// The month label, e.g. "Jan 2025".
    pub month: String,
    /// Income earned during the month.
    pub income: Money,
    /// Money spent during the month.
    pub expenses: Money,
    /// Net savings: income minus expenses, signed.
    pub savings: Money,
}

/// Buckets transactions of `kind` by calendar month, chronologically
/// ascending.
pub fn monthly_series(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<MonthlySeriesPoint> {
    let mut totals: HashMap<Date, Money> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        *totals
            .entry(month_bucket(transaction.date))
            .or_insert(Money::ZERO) += transaction.amount;
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| MonthlySeriesPoint {
            amount: totals[&month],
            month: month_label(month),
        })
        .collect()
}

/// Buckets income and expenses per calendar month in one pass,
/// chronologically ascending, with net savings derived per month.
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyTrendPoint> {
    let mut totals: HashMap<Date, (Money, Money)> = HashMap::new();

    for transaction in transactions {
        let entry = totals
            .entry(month_bucket(transaction.date))
            .or_insert((Money::ZERO, Money::ZERO));

        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| {
            let (income, expenses) = totals[&month];
            MonthlyTrendPoint {
                month: month_label(month),
                income,
                expenses,
                savings: income - expenses,
            }
        })
        .collect()
}

/// Formats a month bucket as "MMM YYYY", e.g. "Jan 2025".
pub fn month_label(month: Date) -> String {
    let name = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", month.year())
}

/// The first day of the transaction's month. Day 1 is valid in every month.
fn month_bucket(date: Date) -> Date {
    date.replace_day(1).unwrap()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{month_label, monthly_series, monthly_trend};
    use crate::{
        model::{Transaction, TransactionKind},
        money::Money,
    };

    fn transaction(kind: TransactionKind, cents: i64, date: time::Date) -> Transaction {
        Transaction::new(kind, Money::from_cents(cents), "Food", date)
    }

    #[test]
    fn sums_amounts_within_a_month() {
        let transactions = vec![
            transaction(TransactionKind::Expense, 100_00, date!(2024 - 01 - 15)),
            transaction(TransactionKind::Expense, 50_00, date!(2024 - 01 - 20)),
            transaction(TransactionKind::Expense, 30_00, date!(2024 - 02 - 10)),
        ];

        let series = monthly_series(&transactions, TransactionKind::Expense);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "Jan 2024");
        assert_eq!(series[0].amount, Money::from_cents(150_00));
        assert_eq!(series[1].month, "Feb 2024");
        assert_eq!(series[1].amount, Money::from_cents(30_00));
    }

    #[test]
    fn sorts_chronologically_across_year_boundaries() {
        let transactions = vec![
            transaction(TransactionKind::Expense, 10_00, date!(2024 - 12 - 15)),
            transaction(TransactionKind::Expense, 10_00, date!(2025 - 01 - 10)),
            transaction(TransactionKind::Expense, 10_00, date!(2024 - 11 - 01)),
        ];

        let series = monthly_series(&transactions, TransactionKind::Expense);

        let labels: Vec<&str> = series.iter().map(|point| point.month.as_str()).collect();
        assert_eq!(labels, vec!["Nov 2024", "Dec 2024", "Jan 2025"]);
    }

    #[test]
    fn ignores_transactions_of_the_other_kind() {
        let transactions = vec![
            transaction(TransactionKind::Income, 500_00, date!(2024 - 01 - 05)),
            transaction(TransactionKind::Expense, 80_00, date!(2024 - 01 - 15)),
        ];

        let series = monthly_series(&transactions, TransactionKind::Income);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].amount, Money::from_cents(500_00));
    }

    #[test]
    fn empty_input_produces_an_empty_series() {
        assert!(monthly_series(&[], TransactionKind::Expense).is_empty());
        assert!(monthly_trend(&[]).is_empty());
    }

    #[test]
    fn trend_derives_savings_per_month() {
        let transactions = vec![
            transaction(TransactionKind::Income, 1000_00, date!(2024 - 01 - 01)),
            transaction(TransactionKind::Expense, 400_00, date!(2024 - 01 - 15)),
            transaction(TransactionKind::Expense, 700_00, date!(2024 - 02 - 10)),
        ];

        let trend = monthly_trend(&transactions);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].month, "Jan 2024");
        assert_eq!(trend[0].savings, Money::from_cents(600_00));
        assert_eq!(trend[1].month, "Feb 2024");
        assert_eq!(trend[1].income, Money::ZERO);
        assert_eq!(trend[1].savings, Money::from_cents(-700_00));
    }

    #[test]
    fn month_labels_use_three_letter_abbreviations() {
        assert_eq!(month_label(date!(2024 - 01 - 01)), "Jan 2024");
        assert_eq!(month_label(date!(2025 - 12 - 01)), "Dec 2025");
    }
}
