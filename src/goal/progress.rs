//! Goal status computation and contributions.

use time::Date;

use crate::Error;

use super::core::Goal;

/// How close a goal's target date must be before it counts as urgent.
pub const URGENT_WINDOW_DAYS: i64 = 30;

/// Where a goal stands relative to its target and deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    /// The saved amount has reached (or passed) the target.
    Completed,
    /// The target date has passed without the target being reached.
    Overdue,
    /// The target date is close.
    Urgent,
    /// There is still comfortable time to save.
    OnTrack,
}

/// A snapshot of progress toward a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// The saved amount as a percentage of the target. Not clamped.
    pub progress: f64,
    /// Whole days until the target date; negative once it has passed.
    pub days_remaining: i64,
    /// How much is still to be saved. Negative when over-funded.
    pub amount_remaining: f64,
    /// The goal's status.
    pub status: GoalStatus,
}

/// Compute where `goal` stands as of `today`.
///
/// The status checks run in order: a finished goal is completed even when
/// its target date has passed, an overdue goal is never merely urgent, and
/// reaching exactly 100% counts as completed. A target of zero reports 0%
/// rather than dividing by zero.
pub fn goal_progress(goal: &Goal, today: Date) -> GoalProgress {
    let progress = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        0.0
    };

    let days_remaining = (goal.target_date - today).whole_days();

    let status = if progress >= 100.0 {
        GoalStatus::Completed
    } else if days_remaining < 0 {
        GoalStatus::Overdue
    } else if days_remaining <= URGENT_WINDOW_DAYS {
        GoalStatus::Urgent
    } else {
        GoalStatus::OnTrack
    };

    GoalProgress {
        progress,
        days_remaining,
        amount_remaining: goal.target_amount - goal.current_amount,
        status,
    }
}

/// Return a copy of `goal` with `amount` added to its saved total.
///
/// The caller persists the result through
/// [GoalStore::update](crate::stores::GoalStore::update).
///
/// # Errors
/// Returns [Error::InvalidAmount] unless `amount` is a positive, finite
/// number.
pub fn apply_contribution(goal: &Goal, amount: f64) -> Result<Goal, Error> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount(amount));
    }

    let mut updated = goal.clone();
    updated.current_amount += amount;

    Ok(updated)
}

/// Headline numbers across every goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSummary {
    /// How many goals are being tracked.
    pub total_goals: usize,
    /// How many goals have reached their target.
    pub completed: usize,
    /// The sum of all targets.
    pub total_target: f64,
    /// The sum of all saved amounts.
    pub total_saved: f64,
    /// Total saved as a percentage of total target, 0 when there are no
    /// targets.
    pub overall_progress: f64,
}

/// Sum targets and savings over all `goals`.
pub fn summarise_goals(goals: &[Goal]) -> GoalSummary {
    let total_target: f64 = goals.iter().map(|goal| goal.target_amount).sum();
    let total_saved: f64 = goals.iter().map(|goal| goal.current_amount).sum();
    let completed = goals
        .iter()
        .filter(|goal| goal.current_amount >= goal.target_amount)
        .count();

    let overall_progress = if total_target > 0.0 {
        total_saved / total_target * 100.0
    } else {
        0.0
    };

    GoalSummary {
        total_goals: goals.len(),
        completed,
        total_target,
        total_saved,
        overall_progress,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::GoalCategory,
        goal::{Goal, GoalStatus},
    };

    use super::{apply_contribution, goal_progress, summarise_goals};

    fn goal(target_amount: f64, current_amount: f64, target_date: time::Date) -> Goal {
        Goal {
            id: 1,
            name: "Vacation".to_string(),
            category: GoalCategory::Vacation,
            target_amount,
            current_amount,
            target_date,
        }
    }

    #[test]
    fn goal_with_time_left_is_urgent_inside_the_window() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(1000.0, 250.0, date!(2025 - 06 - 25)), today);

        assert_eq!(progress.progress, 25.0);
        assert_eq!(progress.days_remaining, 10);
        assert_eq!(progress.amount_remaining, 750.0);
        assert_eq!(progress.status, GoalStatus::Urgent);
    }

    #[test]
    fn completed_takes_precedence_over_overdue() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(500.0, 500.0, date!(2025 - 06 - 14)), today);

        assert_eq!(progress.status, GoalStatus::Completed);
    }

    #[test]
    fn exactly_one_hundred_percent_is_completed_not_urgent() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(1000.0, 1000.0, date!(2025 - 06 - 20)), today);

        assert_eq!(progress.status, GoalStatus::Completed);
    }

    #[test]
    fn past_target_date_is_overdue() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(1000.0, 100.0, date!(2025 - 06 - 01)), today);

        assert_eq!(progress.days_remaining, -14);
        assert_eq!(progress.status, GoalStatus::Overdue);
    }

    #[test]
    fn distant_target_date_is_on_track() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(1000.0, 100.0, date!(2026 - 06 - 15)), today);

        assert_eq!(progress.status, GoalStatus::OnTrack);
    }

    #[test]
    fn zero_target_reports_zero_progress() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(0.0, 100.0, date!(2025 - 12 - 31)), today);

        assert_eq!(progress.progress, 0.0);
    }

    #[test]
    fn over_funded_goal_has_negative_amount_remaining() {
        let today = date!(2025 - 06 - 15);

        let progress = goal_progress(&goal(1000.0, 1200.0, date!(2025 - 12 - 31)), today);

        assert_eq!(progress.amount_remaining, -200.0);
        assert_eq!(progress.status, GoalStatus::Completed);
    }

    #[test]
    fn contribution_increases_the_saved_amount() {
        let goal = goal(1000.0, 250.0, date!(2025 - 12 - 31));

        let updated = apply_contribution(&goal, 100.0).unwrap();

        assert_eq!(updated.current_amount, 350.0);
        // The original is untouched; the caller persists the copy.
        assert_eq!(goal.current_amount, 250.0);
    }

    #[test]
    fn contribution_must_be_positive_and_finite() {
        let goal = goal(1000.0, 250.0, date!(2025 - 12 - 31));

        assert_eq!(
            apply_contribution(&goal, 0.0),
            Err(Error::InvalidAmount(0.0))
        );
        assert_eq!(
            apply_contribution(&goal, -50.0),
            Err(Error::InvalidAmount(-50.0))
        );
        assert!(apply_contribution(&goal, f64::NAN).is_err());
        assert!(apply_contribution(&goal, f64::INFINITY).is_err());
    }

    #[test]
    fn summary_counts_completed_goals() {
        let goals = vec![
            goal(1000.0, 1000.0, date!(2025 - 12 - 31)),
            goal(2000.0, 500.0, date!(2025 - 12 - 31)),
        ];

        let summary = summarise_goals(&goals);

        assert_eq!(summary.total_goals, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total_target, 3000.0);
        assert_eq!(summary.total_saved, 1500.0);
        assert_eq!(summary.overall_progress, 50.0);
    }

    #[test]
    fn summary_of_no_goals_is_all_zero() {
        let summary = summarise_goals(&[]);

        assert_eq!(summary.total_goals, 0);
        assert_eq!(summary.overall_progress, 0.0);
    }
}
