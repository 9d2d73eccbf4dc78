//! Month-to-date statistics for the overview page.

use time::Date;

use crate::{
    budget::{AlertLevel, Budget, BudgetPeriod, BudgetProgress},
    goal::Goal,
    transaction::{Transaction, TransactionKind},
};

/// Income, spend and savings for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlySummary {
    /// Income recorded this month.
    pub income: f64,
    /// Expenses recorded this month.
    pub expenses: f64,
}

impl MonthlySummary {
    /// Income minus expenses.
    pub fn net_savings(&self) -> f64 {
        self.income - self.expenses
    }

    /// Net savings as a percentage of income, 0 when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.income > 0.0 {
            self.net_savings() / self.income * 100.0
        } else {
            0.0
        }
    }
}

/// Sum the income and expenses recorded in the month containing `today`.
pub fn monthly_summary(transactions: &[Transaction], today: Date) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for transaction in transactions {
        if transaction.date.year() != today.year() || transaction.date.month() != today.month() {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => summary.income += transaction.amount,
            TransactionKind::Expense => summary.expenses += transaction.amount,
        }
    }

    summary
}

/// One budget with its month-to-date progress.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    /// The budget.
    pub budget: Budget,
    /// Spend against it for the current calendar month.
    pub progress: BudgetProgress,
}

/// Everything the overview page needs, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// This month's income and spend.
    pub monthly: MonthlySummary,
    /// Every budget with its month-to-date progress, in store order.
    pub budgets: Vec<BudgetOverview>,
    /// How many goals are being tracked.
    pub active_goals: usize,
}

impl DashboardSummary {
    /// The budgets whose spend has passed their ceiling.
    pub fn over_budget(&self) -> Vec<&BudgetOverview> {
        self.budgets
            .iter()
            .filter(|overview| overview.progress.alert_level() == AlertLevel::OverBudget)
            .collect()
    }
}

/// Compute the dashboard statistics for the month containing `today`.
///
/// Budget progress here covers the current calendar month for every budget,
/// regardless of its declared period: the dashboard answers "how is this
/// month going", while the budget page scopes by the declared period via
/// [budget_progress](crate::budget::budget_progress).
pub fn dashboard_summary(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[Goal],
    today: Date,
) -> DashboardSummary {
    let overviews = budgets
        .iter()
        .map(|budget| BudgetOverview {
            budget: budget.clone(),
            progress: month_scoped_progress(budget, transactions, today),
        })
        .collect();

    DashboardSummary {
        monthly: monthly_summary(transactions, today),
        budgets: overviews,
        active_goals: goals.len(),
    }
}

// The dashboard's simplified view: always the reference month, never the
// budget's declared period.
fn month_scoped_progress(
    budget: &Budget,
    transactions: &[Transaction],
    today: Date,
) -> BudgetProgress {
    let spent: f64 = transactions
        .iter()
        .filter(|transaction| {
            transaction.kind == TransactionKind::Expense
                && transaction.category == budget.category
                && BudgetPeriod::Monthly.contains(today, transaction.date)
        })
        .map(|transaction| transaction.amount)
        .sum();

    let percentage = if budget.amount > 0.0 {
        spent / budget.amount * 100.0
    } else {
        0.0
    };

    BudgetProgress { spent, percentage }
}
