//! Budget progress computation and alert classification.

use time::Date;

use crate::transaction::{Transaction, TransactionKind};

use super::core::Budget;

/// The percentage above which a budget is flagged for attention.
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Period-to-date spend against a budget's ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    /// The sum of matching expense amounts in the current period.
    pub spent: f64,
    /// `spent` as a percentage of the ceiling.
    ///
    /// Not clamped; values over 100 mean the ceiling has been blown, and
    /// display code that wants a full bar must clamp for itself.
    pub percentage: f64,
}

/// How urgently a budget needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Spending is comfortably inside the ceiling.
    Ok,
    /// Spending has passed the warning threshold.
    Warning,
    /// Spending has passed the ceiling.
    OverBudget,
}

impl BudgetProgress {
    /// Classify this progress for alerting.
    pub fn alert_level(&self) -> AlertLevel {
        if self.percentage > 100.0 {
            AlertLevel::OverBudget
        } else if self.percentage > WARNING_THRESHOLD {
            AlertLevel::Warning
        } else {
            AlertLevel::Ok
        }
    }
}

/// Compute the spend against `budget` for the period containing `today`.
///
/// Only expense transactions in the budget's category count, scoped by
/// [BudgetPeriod::contains](super::BudgetPeriod::contains). A ceiling of
/// zero reports 0% rather than dividing by zero.
pub fn budget_progress(
    budget: &Budget,
    transactions: &[Transaction],
    today: Date,
) -> BudgetProgress {
    let spent: f64 = transactions
        .iter()
        .filter(|transaction| {
            transaction.kind == TransactionKind::Expense
                && transaction.category == budget.category
                && budget.period.contains(today, transaction.date)
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

/// Ceiling and spend sums across every budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTotals {
    /// The sum of all ceilings.
    pub total_budget: f64,
    /// The sum of every budget's period-to-date spend.
    pub total_spent: f64,
}

impl BudgetTotals {
    /// How much of the combined ceilings is left. Negative when overspent.
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }
}

/// Sum ceilings and period-to-date spend over all `budgets`.
pub fn budget_totals(budgets: &[Budget], transactions: &[Transaction], today: Date) -> BudgetTotals {
    let mut totals = BudgetTotals {
        total_budget: 0.0,
        total_spent: 0.0,
    };

    for budget in budgets {
        totals.total_budget += budget.amount;
        totals.total_spent += budget_progress(budget, transactions, today).spent;
    }

    totals
}

/// The budgets past the warning threshold, paired with their progress.
///
/// Includes over-budget entries; callers that only want blown ceilings can
/// check [BudgetProgress::alert_level] on each pair.
pub fn alert_budgets<'a>(
    budgets: &'a [Budget],
    transactions: &[Transaction],
    today: Date,
) -> Vec<(&'a Budget, BudgetProgress)> {
    budgets
        .iter()
        .map(|budget| (budget, budget_progress(budget, transactions, today)))
        .filter(|(_, progress)| progress.alert_level() != AlertLevel::Ok)
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        budget::{Budget, BudgetPeriod},
        category::Category,
        transaction::{Transaction, TransactionKind},
    };

    use super::{AlertLevel, BudgetProgress, alert_budgets, budget_progress, budget_totals};

    fn groceries_budget(amount: f64, period: BudgetPeriod) -> Budget {
        Budget {
            id: 1,
            category: Category::Groceries,
            amount,
            period,
            start_date: date!(2025 - 01 - 01),
        }
    }

    fn expense(id: i64, amount: f64, category: Category, date: time::Date) -> Transaction {
        Transaction::build(TransactionKind::Expense, amount, category)
            .date(date)
            .finalise(id, date)
    }

    #[test]
    fn monthly_budget_only_counts_the_current_month() {
        let budget = groceries_budget(1000.0, BudgetPeriod::Monthly);
        let today = date!(2025 - 06 - 15);
        let transactions = vec![
            expense(1, 300.0, Category::Groceries, date!(2025 - 06 - 10)),
            expense(2, 900.0, Category::Groceries, date!(2025 - 05 - 10)),
        ];

        let progress = budget_progress(&budget, &transactions, today);

        assert_eq!(
            progress,
            BudgetProgress {
                spent: 300.0,
                percentage: 30.0
            }
        );
    }

    #[test]
    fn annual_budget_counts_the_whole_year() {
        let budget = groceries_budget(10000.0, BudgetPeriod::Annual);
        let today = date!(2025 - 06 - 15);
        let transactions = vec![
            expense(1, 300.0, Category::Groceries, date!(2025 - 01 - 10)),
            expense(2, 900.0, Category::Groceries, date!(2025 - 11 - 10)),
            expense(3, 400.0, Category::Groceries, date!(2024 - 12 - 31)),
        ];

        let progress = budget_progress(&budget, &transactions, today);

        assert_eq!(progress.spent, 1200.0);
    }

    #[test]
    fn income_and_other_categories_are_ignored() {
        let budget = groceries_budget(1000.0, BudgetPeriod::Monthly);
        let today = date!(2025 - 06 - 15);
        let transactions = vec![
            Transaction::build(TransactionKind::Income, 5000.0, Category::Groceries)
                .date(date!(2025 - 06 - 05))
                .finalise(1, today),
            expense(2, 250.0, Category::Transport, date!(2025 - 06 - 06)),
            expense(3, 100.0, Category::Groceries, date!(2025 - 06 - 07)),
        ];

        let progress = budget_progress(&budget, &transactions, today);

        assert_eq!(progress.spent, 100.0);
    }

    #[test]
    fn zero_ceiling_reports_zero_percent() {
        let budget = groceries_budget(0.0, BudgetPeriod::Monthly);
        let today = date!(2025 - 06 - 15);
        let transactions = vec![expense(1, 300.0, Category::Groceries, date!(2025 - 06 - 10))];

        let progress = budget_progress(&budget, &transactions, today);

        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn percentage_is_not_clamped_past_the_ceiling() {
        let budget = groceries_budget(100.0, BudgetPeriod::Monthly);
        let today = date!(2025 - 06 - 15);
        let transactions = vec![expense(1, 150.0, Category::Groceries, date!(2025 - 06 - 10))];

        let progress = budget_progress(&budget, &transactions, today);

        assert_eq!(progress.percentage, 150.0);
    }

    #[test]
    fn alert_level_thresholds() {
        let level = |percentage| BudgetProgress {
            spent: 0.0,
            percentage,
        }
        .alert_level();

        assert_eq!(level(80.0), AlertLevel::Ok);
        assert_eq!(level(80.5), AlertLevel::Warning);
        assert_eq!(level(100.0), AlertLevel::Warning);
        assert_eq!(level(100.5), AlertLevel::OverBudget);
    }

    #[test]
    fn alert_budgets_skips_comfortable_budgets() {
        let today = date!(2025 - 06 - 15);
        let budgets = vec![
            Budget {
                id: 1,
                category: Category::Groceries,
                amount: 1000.0,
                period: BudgetPeriod::Monthly,
                start_date: date!(2025 - 01 - 01),
            },
            Budget {
                id: 2,
                category: Category::Transport,
                amount: 100.0,
                period: BudgetPeriod::Monthly,
                start_date: date!(2025 - 01 - 01),
            },
        ];
        let transactions = vec![
            expense(1, 100.0, Category::Groceries, date!(2025 - 06 - 05)),
            expense(2, 90.0, Category::Transport, date!(2025 - 06 - 06)),
        ];

        let alerts = alert_budgets(&budgets, &transactions, today);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0.id, 2);
        assert_eq!(alerts[0].1.alert_level(), AlertLevel::Warning);
    }

    #[test]
    fn totals_sum_every_budget() {
        let today = date!(2025 - 06 - 15);
        let budgets = vec![
            groceries_budget(1000.0, BudgetPeriod::Monthly),
            Budget {
                id: 2,
                category: Category::Transport,
                amount: 500.0,
                period: BudgetPeriod::Monthly,
                start_date: date!(2025 - 01 - 01),
            },
        ];
        let transactions = vec![
            expense(1, 300.0, Category::Groceries, date!(2025 - 06 - 05)),
            expense(2, 100.0, Category::Transport, date!(2025 - 06 - 06)),
        ];

        let totals = budget_totals(&budgets, &transactions, today);

        assert_eq!(totals.total_budget, 1500.0);
        assert_eq!(totals.total_spent, 400.0);
        assert_eq!(totals.remaining(), 1100.0);
    }
}
