//! Report aggregation over a preset date window.

use std::collections::HashMap;

use time::{Date, Month};

use crate::{
    category::{Category, PaymentMethod},
    transaction::{Transaction, TransactionKind},
};

/// The preset reporting windows offered by the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// The current calendar month.
    OneMonth,
    /// The current month and the two before it.
    ThreeMonths,
    /// The current month and the five before it.
    SixMonths,
    /// The current month and the eleven before it.
    OneYear,
}

impl ReportPeriod {
    /// The first day of the window ending at `today`.
    pub fn start_date(&self, today: Date) -> Date {
        let months_back = match self {
            ReportPeriod::OneMonth => 0,
            ReportPeriod::ThreeMonths => 2,
            ReportPeriod::SixMonths => 5,
            ReportPeriod::OneYear => 11,
        };

        first_of_month_before(today, months_back)
    }
}

/// The first day of the month `months` before the month `date` is in.
fn first_of_month_before(date: Date, months: i32) -> Date {
    let total = date.year() * 12 + date.month() as i32 - 1 - months;
    let year = total.div_euclid(12);
    let month = Month::try_from((total.rem_euclid(12) + 1) as u8).unwrap();

    Date::from_calendar_date(year, month, 1).unwrap()
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotals {
    /// The first day of the month.
    pub month: Date,
    /// Income recorded in the month.
    pub income: f64,
    /// Expenses recorded in the month.
    pub expense: f64,
}

/// Spend attributed to one expense category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    /// The category.
    pub category: Category,
    /// The total spent in the window.
    pub total: f64,
    /// How many transactions contributed.
    pub count: usize,
}

impl CategorySpend {
    /// The mean transaction amount.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// The derived views and metrics for one reporting window.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Per-month income and expense sums, oldest month first.
    pub monthly_trend: Vec<MonthlyTotals>,
    /// Expense totals per category, in the order categories first appear.
    pub category_breakdown: Vec<CategorySpend>,
    /// The amount handled per payment method, income and expenses included.
    pub payment_methods: Vec<(PaymentMethod, f64)>,
    /// Income recorded in the window.
    pub total_income: f64,
    /// Expenses recorded in the window.
    pub total_expenses: f64,
    /// How many transactions fell in the window.
    pub transaction_count: usize,
}

impl Report {
    /// Income minus expenses.
    pub fn net_savings(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Net savings as a percentage of income, 0 when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.total_income > 0.0 {
            self.net_savings() / self.total_income * 100.0
        } else {
            0.0
        }
    }

    /// The category with the highest spend. Earlier entries win ties.
    pub fn largest_expense_category(&self) -> Option<&Category> {
        let mut best: Option<&CategorySpend> = None;

        for spend in &self.category_breakdown {
            match best {
                Some(current) if spend.total <= current.total => {}
                _ => best = Some(spend),
            }
        }

        best.map(|spend| &spend.category)
    }

    /// A category's spend as a percentage of the window's total expenses.
    pub fn category_share(&self, spend: &CategorySpend) -> f64 {
        if self.total_expenses > 0.0 {
            spend.total / self.total_expenses * 100.0
        } else {
            0.0
        }
    }
}

/// Build the report for the window `[period start, today]`, optionally
/// narrowed to one category.
pub fn build_report(
    transactions: &[Transaction],
    period: ReportPeriod,
    category: Option<&Category>,
    today: Date,
) -> Report {
    let start = period.start_date(today);

    let in_window: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.date >= start && transaction.date <= today)
        .filter(|transaction| category.is_none_or(|wanted| *wanted == transaction.category))
        .collect();

    let mut by_month: HashMap<Date, MonthlyTotals> = HashMap::new();
    let mut category_breakdown: Vec<CategorySpend> = Vec::new();
    let mut payment_methods: Vec<(PaymentMethod, f64)> = Vec::new();
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;

    for transaction in &in_window {
        let month = transaction.date.replace_day(1).unwrap();
        let entry = by_month.entry(month).or_insert(MonthlyTotals {
            month,
            income: 0.0,
            expense: 0.0,
        });

        match transaction.kind {
            TransactionKind::Income => {
                entry.income += transaction.amount;
                total_income += transaction.amount;
            }
            TransactionKind::Expense => {
                entry.expense += transaction.amount;
                total_expenses += transaction.amount;

                match category_breakdown
                    .iter_mut()
                    .find(|spend| spend.category == transaction.category)
                {
                    Some(spend) => {
                        spend.total += transaction.amount;
                        spend.count += 1;
                    }
                    None => category_breakdown.push(CategorySpend {
                        category: transaction.category.clone(),
                        total: transaction.amount,
                        count: 1,
                    }),
                }
            }
        }

        match payment_methods
            .iter_mut()
            .find(|(method, _)| *method == transaction.payment_method)
        {
            Some((_, total)) => *total += transaction.amount,
            None => payment_methods.push((transaction.payment_method.clone(), transaction.amount)),
        }
    }

    let mut monthly_trend: Vec<MonthlyTotals> = by_month.into_values().collect();
    monthly_trend.sort_by_key(|totals| totals.month);

    Report {
        monthly_trend,
        category_breakdown,
        payment_methods,
        total_income,
        total_expenses,
        transaction_count: in_window.len(),
    }
}
