//! An in-memory goal store.

use crate::{
    Error,
    goal::{Goal, GoalId, GoalUpdate, NewGoal},
    stores::GoalStore,
};

/// Stores goals in a plain vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryGoalStore {
    goals: Vec<Goal>,
}

impl MemoryGoalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `goals`.
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Create a store from a JSON array of goals.
    ///
    /// # Errors
    /// Returns an [Error::InvalidSeedData] if the document does not parse.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let goals =
            serde_json::from_str(json).map_err(|error| Error::InvalidSeedData(error.to_string()))?;

        Ok(Self { goals })
    }

    fn next_id(&self) -> GoalId {
        self.goals.iter().map(|goal| goal.id).max().unwrap_or(0) + 1
    }
}

impl GoalStore for MemoryGoalStore {
    fn get_all(&self) -> Result<Vec<Goal>, Error> {
        Ok(self.goals.clone())
    }

    fn get(&self, id: GoalId) -> Result<Goal, Error> {
        self.goals
            .iter()
            .find(|goal| goal.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn create(&mut self, new_goal: NewGoal) -> Result<Goal, Error> {
        new_goal.validate()?;

        let goal = new_goal.into_goal(self.next_id());
        self.goals.push(goal.clone());

        Ok(goal)
    }

    fn update(&mut self, id: GoalId, changes: GoalUpdate) -> Result<Goal, Error> {
        changes.validate()?;

        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(Error::NotFound)?;
        changes.apply(goal);

        Ok(goal.clone())
    }

    fn delete(&mut self, id: GoalId) -> Result<Goal, Error> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(Error::NotFound)?;

        Ok(self.goals.remove(index))
    }
}
