//! Command-line report viewer.
//!
//! Loads a JSON records document (the shape the tracker's API returns) and
//! prints one of the tracker's views to stdout.

use std::{fs, ops::RangeInclusive, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use time::{Date, OffsetDateTime};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use fintrack::{
    BudgetStore, DashboardReport, Error, ExpensesReport, GoalStore, IncomeReport, JsonStore,
    SavingsReport, SortOrder, TransactionKind, TransactionQuery, TransactionStore, TrendsReport,
    format_currency,
};

/// Prints finance tracker reports from a JSON records document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the JSON records document.
    records_path: PathBuf,

    /// The view to print.
    #[arg(short, long, value_enum, default_value = "dashboard")]
    view: View,

    /// Only include transactions on or after this date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<String>,

    /// Only include transactions on or before this date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<String>,
}

/// The views the tracker can print.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum View {
    /// Headline totals, budgets, goals, and the expense breakdown.
    Dashboard,
    /// Expense distribution by category and by month.
    Expenses,
    /// Income sources by category and by month.
    Income,
    /// Savings goal progress.
    Savings,
    /// Month-on-month cash flow and budget adherence.
    Trends,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let json = fs::read_to_string(&args.records_path)?;
    let store = JsonStore::from_json(&json)?;

    let date_range = parse_date_range(args.from.as_deref(), args.to.as_deref())?;
    let transactions = store.transactions(TransactionQuery {
        date_range,
        ..TransactionQuery::default()
    })?;
    let budgets = store.budgets()?;
    let goals = store.goals()?;
    let today = OffsetDateTime::now_utc().date();

    match args.view {
        View::Dashboard => {
            let report = DashboardReport::generate(&transactions, &budgets, &goals, today);
            print_dashboard(&report);

            let recent = store.transactions(TransactionQuery {
                sort_date: Some(SortOrder::Descending),
                limit: Some(5),
                ..TransactionQuery::default()
            })?;
            print_recent_transactions(&recent);
        }
        View::Expenses => {
            let report = ExpensesReport::generate(&transactions);
            print_breakdown("Expense Distribution by Category", &report.by_category);
            print_series("Monthly Expense Trend", &report.monthly);
        }
        View::Income => {
            let report = IncomeReport::generate(&transactions);
            print_breakdown("Income Sources", &report.by_category);
            print_series("Monthly Income Trend", &report.monthly);
        }
        View::Savings => {
            let report = SavingsReport::generate(&goals, today);

            println!("Savings Goals Progress");
            for goal in &report.goals {
                println!(
                    "  {:<20} {:>3}%  saved {} of {}, {}",
                    goal.name,
                    goal.percentage,
                    format_currency(goal.current),
                    format_currency(goal.current + goal.remaining),
                    goal.time_remaining,
                );
            }
            println!("  Overall progress: {}%", report.overall_progress);
        }
        View::Trends => {
            let report = TrendsReport::generate(&transactions, &budgets);

            println!("Income vs Expenses vs Savings");
            for point in &report.monthly {
                println!(
                    "  {:<9} income {:>12}  expenses {:>12}  savings {:>12}",
                    point.month,
                    format_currency(point.income),
                    format_currency(point.expenses),
                    format_currency(point.savings),
                );
            }

            println!();
            println!("Budget vs Actual Spending");
            for entry in &report.budget_comparison {
                println!(
                    "  {:<20} budget {:>12}  actual {:>12}",
                    entry.category,
                    format_currency(entry.budget_limit),
                    format_currency(entry.actual_spent),
                );
            }
        }
    }

    Ok(())
}

fn print_dashboard(report: &DashboardReport) {
    println!("Dashboard");
    println!("  Total Balance: {}", format_currency(report.total_balance));
    println!("  Income:        {}", format_currency(report.total_income));
    println!("  Expenses:      {}", format_currency(report.total_expenses));
    println!("  Total Budget:  {}", format_currency(report.total_budget));

    println!();
    println!("Budget Status ({}% of total spent)", report.overall_budget_spending);
    for budget in &report.budgets {
        println!(
            "  {:<20} {} / {}  {:>3}% [{}]",
            budget.category,
            format_currency(budget.spent),
            format_currency(budget.limit),
            budget.percentage,
            budget.status,
        );
    }

    println!();
    println!("Financial Goals ({}% overall)", report.overall_goal_progress);
    for goal in &report.goals {
        println!(
            "  {:<20} {:>3}%  {} remaining ({})",
            goal.name,
            goal.percentage,
            format_currency(goal.remaining),
            goal.time_remaining,
        );
    }

    println!();
    println!("Expense Breakdown");
    for entry in &report.expense_breakdown {
        println!(
            "  {:<20} {:>12}  {:>3}%",
            entry.category,
            format_currency(entry.amount),
            entry.percentage,
        );
    }
}

fn print_recent_transactions(transactions: &[fintrack::Transaction]) {
    println!();
    println!("Recent Transactions");
    for transaction in transactions {
        let sign = match transaction.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        println!(
            "  {} {:<30} {:<15} {}{}",
            transaction.date,
            transaction.description,
            transaction.category,
            sign,
            format_currency(transaction.amount),
        );
    }
}

fn print_breakdown(title: &str, entries: &[fintrack::CategoryBreakdownEntry]) {
    println!("{title}");
    for entry in entries {
        println!(
            "  {:<20} {:>12}  {:>3}%",
            entry.category,
            format_currency(entry.amount),
            entry.percentage,
        );
    }
    println!();
}

fn print_series(title: &str, series: &[fintrack::MonthlySeriesPoint]) {
    println!("{title}");
    for point in series {
        println!("  {:<9} {:>12}", point.month, format_currency(point.amount));
    }
}

/// Builds the inclusive date range for the transaction query, if either end
/// was given.
fn parse_date_range(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Option<RangeInclusive<Date>>, Error> {
    let from = from.map(parse_date).transpose()?;
    let to = to.map(parse_date).transpose()?;

    match (from, to) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) if start > end => Err(Error::EmptyDateRange(start, end)),
        (start, end) => Ok(Some(
            start.unwrap_or(Date::MIN)..=end.unwrap_or(Date::MAX),
        )),
    }
}

fn parse_date(value: &str) -> Result<Date, Error> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value, format).map_err(|_| Error::InvalidDate(value.to_owned()))
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
