//! An in-memory budget store.

use time::OffsetDateTime;

use crate::{
    Error,
    budget::{Budget, BudgetId, BudgetUpdate, NewBudget},
    stores::BudgetStore,
};

/// Stores budgets in a plain vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryBudgetStore {
    budgets: Vec<Budget>,
}

impl MemoryBudgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `budgets`.
    pub fn with_budgets(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    /// Create a store from a JSON array of budgets.
    ///
    /// # Errors
    /// Returns an [Error::InvalidSeedData] if the document does not parse.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let budgets =
            serde_json::from_str(json).map_err(|error| Error::InvalidSeedData(error.to_string()))?;

        Ok(Self { budgets })
    }

    fn next_id(&self) -> BudgetId {
        self.budgets.iter().map(|budget| budget.id).max().unwrap_or(0) + 1
    }
}

impl BudgetStore for MemoryBudgetStore {
    fn get_all(&self) -> Result<Vec<Budget>, Error> {
        Ok(self.budgets.clone())
    }

    fn get(&self, id: BudgetId) -> Result<Budget, Error> {
        self.budgets
            .iter()
            .find(|budget| budget.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn create(&mut self, new_budget: NewBudget) -> Result<Budget, Error> {
        new_budget.validate()?;

        let today = OffsetDateTime::now_utc().date();
        let budget = new_budget.into_budget(self.next_id(), today);
        self.budgets.push(budget.clone());

        Ok(budget)
    }

    fn update(&mut self, id: BudgetId, changes: BudgetUpdate) -> Result<Budget, Error> {
        changes.validate()?;

        let budget = self
            .budgets
            .iter_mut()
            .find(|budget| budget.id == id)
            .ok_or(Error::NotFound)?;
        changes.apply(budget);

        Ok(budget.clone())
    }

    fn delete(&mut self, id: BudgetId) -> Result<Budget, Error> {
        let index = self
            .budgets
            .iter()
            .position(|budget| budget.id == id)
            .ok_or(Error::NotFound)?;

        Ok(self.budgets.remove(index))
    }
}
