//! The savings goal model, status computation, and contributions.

mod core;
mod progress;

pub use core::{Goal, GoalId, GoalUpdate, NewGoal};
pub use progress::{
    GoalProgress, GoalStatus, GoalSummary, URGENT_WINDOW_DAYS, apply_contribution, goal_progress,
    summarise_goals,
};
