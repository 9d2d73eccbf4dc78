//! Defines the savings goal model.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::GoalCategory};

/// The ID of a goal record.
pub type GoalId = i64;

/// A savings target to be reached by a certain date.
///
/// The saved amount grows through contributions and may pass the target; an
/// over-funded goal simply counts as completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: GoalId,
    /// A short name for the goal, e.g. "Emergency Fund".
    pub name: String,
    /// What the goal is for.
    pub category: GoalCategory,
    /// The amount to save. Always positive.
    pub target_amount: f64,
    /// The amount saved so far.
    pub current_amount: f64,
    /// When the target should be reached.
    pub target_date: Date,
}

/// The fields needed to create a [Goal].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// A short name for the goal.
    pub name: String,
    /// What the goal is for.
    pub category: GoalCategory,
    /// The amount to save.
    pub target_amount: f64,
    /// The amount already saved. `None` means zero.
    pub current_amount: Option<f64>,
    /// When the target should be reached.
    pub target_date: Date,
}

impl NewGoal {
    /// Check the fields against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyGoalName);
        }

        if self.target_amount <= 0.0 || !self.target_amount.is_finite() {
            return Err(Error::InvalidTargetAmount(self.target_amount));
        }

        if let Some(current) = self.current_amount {
            if current < 0.0 || !current.is_finite() {
                return Err(Error::NegativeAmount(current));
            }
        }

        Ok(())
    }

    /// Turn the fields into a goal with the given ID.
    pub(crate) fn into_goal(self, id: GoalId) -> Goal {
        Goal {
            id,
            name: self.name,
            category: self.category,
            target_amount: self.target_amount,
            current_amount: self.current_amount.unwrap_or(0.0),
            target_date: self.target_date,
        }
    }
}

/// A partial update for a goal.
///
/// Fields left as `None` keep their stored value; the ID never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdate {
    /// Replace the name.
    pub name: Option<String>,
    /// Replace the category.
    pub category: Option<GoalCategory>,
    /// Replace the target amount.
    pub target_amount: Option<f64>,
    /// Replace the saved amount.
    pub current_amount: Option<f64>,
    /// Replace the target date.
    pub target_date: Option<Date>,
}

impl GoalUpdate {
    /// Check the supplied fields against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyGoalName);
            }
        }

        if let Some(target) = self.target_amount {
            if target <= 0.0 || !target.is_finite() {
                return Err(Error::InvalidTargetAmount(target));
            }
        }

        if let Some(current) = self.current_amount {
            if current < 0.0 || !current.is_finite() {
                return Err(Error::NegativeAmount(current));
            }
        }

        Ok(())
    }

    /// Merge the supplied fields over `goal`.
    pub(crate) fn apply(self, goal: &mut Goal) {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(category) = self.category {
            goal.category = category;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, category::GoalCategory};

    use super::NewGoal;

    fn new_goal() -> NewGoal {
        NewGoal {
            name: "Emergency Fund".to_string(),
            category: GoalCategory::EmergencyFund,
            target_amount: 100000.0,
            current_amount: None,
            target_date: date!(2026 - 01 - 01),
        }
    }

    #[test]
    fn saved_amount_defaults_to_zero() {
        let goal = new_goal().into_goal(1);

        assert_eq!(goal.current_amount, 0.0);
    }

    #[test]
    fn rejects_blank_name() {
        let goal = NewGoal {
            name: "  ".to_string(),
            ..new_goal()
        };

        assert_eq!(goal.validate(), Err(Error::EmptyGoalName));
    }

    #[test]
    fn rejects_non_positive_target() {
        let goal = NewGoal {
            target_amount: -10.0,
            ..new_goal()
        };

        assert_eq!(goal.validate(), Err(Error::InvalidTargetAmount(-10.0)));
    }
}
