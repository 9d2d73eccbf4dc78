//! Defines the goal store trait.

use crate::{
    Error,
    goal::{Goal, GoalId, GoalUpdate, NewGoal},
};

/// Handles the storage and retrieval of savings goals.
pub trait GoalStore {
    /// Retrieve every goal, in the order they were created.
    fn get_all(&self) -> Result<Vec<Goal>, Error>;

    /// Retrieve the goal with `id`.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no goal has that ID.
    fn get(&self, id: GoalId) -> Result<Goal, Error>;

    /// Create a new goal, assigning it the next free ID.
    ///
    /// A missing saved amount defaults to zero.
    ///
    /// # Errors
    /// Returns an [Error::EmptyGoalName] if the name is blank, or an
    /// [Error::InvalidTargetAmount] if the target is not a positive number.
    fn create(&mut self, new_goal: NewGoal) -> Result<Goal, Error>;

    /// Merge the supplied fields of `changes` over the stored goal.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no goal has that ID, or the same
    /// validation errors as [GoalStore::create].
    fn update(&mut self, id: GoalId, changes: GoalUpdate) -> Result<Goal, Error>;

    /// Remove the goal with `id`, returning the removed record.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no goal has that ID.
    fn delete(&mut self, id: GoalId) -> Result<Goal, Error>;
}
