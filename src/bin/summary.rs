use std::error::Error;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use time::OffsetDateTime;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use kharcha_rs::{
    SqliteAppState,
    dashboard::dashboard_summary,
    db,
    format::{self, DateStyle},
    goal::goal_progress,
    report::{ReportPeriod, build_report},
    stores::{BudgetStore, GoalStore, TransactionStore},
};

/// Prints a financial summary for a kharcha_rs database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The reporting window: 1month, 3months, 6months or 1year.
    #[arg(long, default_value = "6months")]
    period: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let period = match args.period.as_str() {
        "1month" => ReportPeriod::OneMonth,
        "3months" => ReportPeriod::ThreeMonths,
        "6months" => ReportPeriod::SixMonths,
        "1year" => ReportPeriod::OneYear,
        other => {
            eprintln!("Unknown period \"{other}\": use 1month, 3months, 6months or 1year.");
            exit(1);
        }
    };

    tracing::info!("Opening database at {}", args.db_path);
    let connection = db::open(&args.db_path)?;
    let state = SqliteAppState::with_connection(Arc::new(Mutex::new(connection)));

    let transactions = state.transaction_store.get_all()?;
    let budgets = state.budget_store.get_all()?;
    let goals = state.goal_store.get_all()?;

    let today = OffsetDateTime::now_utc().date();
    let summary = dashboard_summary(&transactions, &budgets, &goals, today);

    println!(
        "Overview for {}",
        format::format_date(today, DateStyle::MonthYear)
    );
    println!(
        "  Income:       {}",
        format::currency(summary.monthly.income)
    );
    println!(
        "  Expenses:     {}",
        format::currency(summary.monthly.expenses)
    );
    println!(
        "  Net savings:  {} ({} of income)",
        format::currency(summary.monthly.net_savings()),
        format::percentage(summary.monthly.savings_rate())
    );
    println!("  Active goals: {}", summary.active_goals);

    if !summary.budgets.is_empty() {
        println!("\nBudgets");
        for overview in &summary.budgets {
            println!(
                "  {} ({}): {} of {} ({})",
                overview.budget.category,
                overview.budget.period,
                format::currency(overview.progress.spent),
                format::currency(overview.budget.amount),
                format::percentage(overview.progress.percentage)
            );
        }

        let over_budget = summary.over_budget();
        if !over_budget.is_empty() {
            println!("\n  Over budget:");
            for overview in over_budget {
                println!(
                    "    {} ({})",
                    overview.budget.category,
                    format::percentage(overview.progress.percentage)
                );
            }
        }
    }

    if !goals.is_empty() {
        println!("\nGoals");
        for goal in &goals {
            let progress = goal_progress(goal, today);
            println!(
                "  {}: {} of {} ({}) due {} ({})",
                goal.name,
                format::currency(goal.current_amount),
                format::currency(goal.target_amount),
                format::percentage(progress.progress),
                format::format_date(goal.target_date, DateStyle::Short),
                format::duration_phrase(progress.days_remaining)
            );
        }
    }

    let report = build_report(&transactions, period, None, today);

    println!("\nReport ({})", args.period);
    println!("  Total income:   {}", format::currency(report.total_income));
    println!(
        "  Total expenses: {}",
        format::currency(report.total_expenses)
    );
    println!(
        "  Net savings:    {} (savings rate {})",
        format::currency(report.net_savings()),
        format::percentage(report.savings_rate())
    );

    if let Some(category) = report.largest_expense_category() {
        println!("  Largest expense category: {category}");
    }

    if !report.monthly_trend.is_empty() {
        println!("\n  Monthly trend");
        for totals in &report.monthly_trend {
            println!(
                "    {}: income {}, expenses {}",
                format::format_date(totals.month, DateStyle::MonthYear),
                format::currency(totals.income),
                format::currency(totals.expense)
            );
        }
    }

    Ok(())
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
