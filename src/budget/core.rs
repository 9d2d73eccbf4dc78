//! Defines the budget model and its period scoping.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::Category};

/// The ID of a budget record.
pub type BudgetId = i64;

/// The recurrence window over which a spending ceiling applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The ceiling applies to one calendar month.
    Monthly,
    /// The ceiling applies to one quarter.
    Quarterly,
    /// The ceiling applies to one year.
    Annual,
}

impl BudgetPeriod {
    /// Whether `date` falls in the period window that `reference` is in.
    ///
    /// Monthly budgets cover the reference calendar month; quarterly and
    /// annual budgets cover the reference calendar year, not a rolling
    /// window. Every period check in the crate goes through here.
    pub fn contains(&self, reference: Date, date: Date) -> bool {
        match self {
            BudgetPeriod::Monthly => {
                date.year() == reference.year() && date.month() == reference.month()
            }
            BudgetPeriod::Quarterly | BudgetPeriod::Annual => date.year() == reference.year(),
        }
    }
}

impl Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Monthly => write!(f, "monthly"),
            BudgetPeriod::Quarterly => write!(f, "quarterly"),
            BudgetPeriod::Annual => write!(f, "annual"),
        }
    }
}

/// A spending ceiling for one expense category.
///
/// There should be one budget per (category, period) pair, though the stores
/// do not enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,
    /// The expense category the ceiling applies to.
    pub category: Category,
    /// The spending ceiling for one period. Always positive.
    pub amount: f64,
    /// How often the budget resets.
    pub period: BudgetPeriod,
    /// When the budget was put in place.
    pub start_date: Date,
}

/// The fields needed to create a [Budget].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    /// The expense category the ceiling applies to.
    pub category: Category,
    /// The spending ceiling for one period.
    pub amount: f64,
    /// How often the budget resets.
    pub period: BudgetPeriod,
    /// When the budget takes effect. `None` means today.
    pub start_date: Option<Date>,
}

impl NewBudget {
    /// Check the fields against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.amount <= 0.0 || !self.amount.is_finite() {
            return Err(Error::InvalidBudgetAmount(self.amount));
        }

        if self.category.label().is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(())
    }

    /// Turn the fields into a budget with the given ID, defaulting the start
    /// date to `today`.
    pub(crate) fn into_budget(self, id: BudgetId, today: Date) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            period: self.period,
            start_date: self.start_date.unwrap_or(today),
        }
    }
}

/// A partial update for a budget.
///
/// Fields left as `None` keep their stored value; the ID never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetUpdate {
    /// Replace the category.
    pub category: Option<Category>,
    /// Replace the ceiling.
    pub amount: Option<f64>,
    /// Replace the period.
    pub period: Option<BudgetPeriod>,
    /// Replace the start date.
    pub start_date: Option<Date>,
}

impl BudgetUpdate {
    /// Check the supplied fields against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(amount) = self.amount {
            if amount <= 0.0 || !amount.is_finite() {
                return Err(Error::InvalidBudgetAmount(amount));
            }
        }

        if let Some(category) = &self.category {
            if category.label().is_empty() {
                return Err(Error::EmptyCategory);
            }
        }

        Ok(())
    }

    /// Merge the supplied fields over `budget`.
    pub(crate) fn apply(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(amount) = self.amount {
            budget.amount = amount;
        }
        if let Some(period) = self.period {
            budget.period = period;
        }
        if let Some(start_date) = self.start_date {
            budget.start_date = start_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, category::Category};

    use super::{BudgetPeriod, NewBudget};

    #[test]
    fn monthly_period_covers_the_reference_month_only() {
        let reference = date!(2025 - 06 - 15);

        assert!(BudgetPeriod::Monthly.contains(reference, date!(2025 - 06 - 01)));
        assert!(BudgetPeriod::Monthly.contains(reference, date!(2025 - 06 - 30)));
        assert!(!BudgetPeriod::Monthly.contains(reference, date!(2025 - 05 - 31)));
        assert!(!BudgetPeriod::Monthly.contains(reference, date!(2024 - 06 - 15)));
    }

    #[test]
    fn non_monthly_periods_cover_the_reference_year() {
        let reference = date!(2025 - 06 - 15);

        assert!(BudgetPeriod::Quarterly.contains(reference, date!(2025 - 01 - 01)));
        assert!(BudgetPeriod::Annual.contains(reference, date!(2025 - 12 - 31)));
        assert!(!BudgetPeriod::Annual.contains(reference, date!(2024 - 12 - 31)));
    }

    #[test]
    fn new_budget_rejects_non_positive_amount() {
        let new_budget = NewBudget {
            category: Category::Groceries,
            amount: 0.0,
            period: BudgetPeriod::Monthly,
            start_date: None,
        };

        assert_eq!(new_budget.validate(), Err(Error::InvalidBudgetAmount(0.0)));
    }

    #[test]
    fn new_budget_defaults_start_date_to_today() {
        let today = date!(2025 - 06 - 15);
        let budget = NewBudget {
            category: Category::Groceries,
            amount: 1000.0,
            period: BudgetPeriod::Monthly,
            start_date: None,
        }
        .into_budget(1, today);

        assert_eq!(budget.start_date, today);
    }
}
