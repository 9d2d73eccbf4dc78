use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use time::{Duration, OffsetDateTime};

use kharcha_rs::{
    SqliteAppState,
    category::{Category, GoalCategory, PaymentMethod},
    db,
    goal::NewGoal,
    budget::{BudgetPeriod, NewBudget},
    stores::{BudgetStore, GoalStore, TransactionStore},
    transaction::{Transaction, TransactionKind},
};

/// A utility for creating a test database for kharcha_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = db::open(output_path)?;
    let mut state = SqliteAppState::with_connection(Arc::new(Mutex::new(connection)));

    println!("Creating test transactions...");

    let today = OffsetDateTime::now_utc().date();
    let last_month = today - Duration::days(31);

    let transactions = [
        Transaction::build(TransactionKind::Income, 52000.0, Category::Salary)
            .payment_method(PaymentMethod::BankTransfer)
            .date(today - Duration::days(3))
            .description("Monthly salary")
            .recurring(true),
        Transaction::build(TransactionKind::Income, 8000.0, Category::Freelance)
            .payment_method(PaymentMethod::Upi)
            .date(today - Duration::days(6))
            .description("Logo design"),
        Transaction::build(TransactionKind::Expense, 15000.0, Category::RentEmi)
            .payment_method(PaymentMethod::BankTransfer)
            .date(today - Duration::days(2))
            .description("Flat rent")
            .recurring(true),
        Transaction::build(TransactionKind::Expense, 2350.0, Category::Groceries)
            .payment_method(PaymentMethod::Upi)
            .date(today - Duration::days(1))
            .description("Weekly vegetables and staples"),
        Transaction::build(TransactionKind::Expense, 1800.0, Category::Utilities)
            .payment_method(PaymentMethod::Upi)
            .date(today - Duration::days(4))
            .description("Electricity bill"),
        Transaction::build(TransactionKind::Expense, 650.0, Category::Transport)
            .payment_method(PaymentMethod::Cash)
            .date(today - Duration::days(5))
            .description("Auto and metro"),
        Transaction::build(TransactionKind::Expense, 1200.0, Category::Entertainment)
            .payment_method(PaymentMethod::CreditCard)
            .date(today - Duration::days(7))
            .description("Dinner and a film"),
        Transaction::build(TransactionKind::Income, 52000.0, Category::Salary)
            .payment_method(PaymentMethod::BankTransfer)
            .date(last_month)
            .description("Monthly salary")
            .recurring(true),
        Transaction::build(TransactionKind::Expense, 15000.0, Category::RentEmi)
            .payment_method(PaymentMethod::BankTransfer)
            .date(last_month + Duration::days(1))
            .description("Flat rent")
            .recurring(true),
        Transaction::build(TransactionKind::Expense, 9400.0, Category::Groceries)
            .payment_method(PaymentMethod::Upi)
            .date(last_month + Duration::days(2))
            .description("Monthly groceries"),
    ];

    for builder in transactions {
        state.transaction_store.create(builder)?;
    }

    println!("Creating test budgets...");

    let budgets = [
        (Category::Groceries, 8000.0, BudgetPeriod::Monthly),
        (Category::Transport, 2000.0, BudgetPeriod::Monthly),
        (Category::Entertainment, 3000.0, BudgetPeriod::Monthly),
        (Category::Festivals, 30000.0, BudgetPeriod::Annual),
    ];

    for (category, amount, period) in budgets {
        state.budget_store.create(NewBudget {
            category,
            amount,
            period,
            start_date: None,
        })?;
    }

    println!("Creating test goals...");

    let goals = [
        ("Emergency Fund", GoalCategory::EmergencyFund, 300000.0, 120000.0, 540),
        ("Goa Trip", GoalCategory::Vacation, 50000.0, 41000.0, 25),
        ("New Scooter", GoalCategory::Vehicle, 95000.0, 12000.0, 365),
    ];

    for (name, category, target_amount, current_amount, days) in goals {
        state.goal_store.create(NewGoal {
            name: name.to_string(),
            category,
            target_amount,
            current_amount: Some(current_amount),
            target_date: today + Duration::days(days),
        })?;
    }

    println!("Success!");

    Ok(())
}
