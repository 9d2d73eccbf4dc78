//! Defines the budget store trait.

use crate::{
    Error,
    budget::{Budget, BudgetId, BudgetUpdate, NewBudget},
};

/// Handles the storage and retrieval of budgets.
pub trait BudgetStore {
    /// Retrieve every budget, in the order they were created.
    fn get_all(&self) -> Result<Vec<Budget>, Error>;

    /// Retrieve the budget with `id`.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no budget has that ID.
    fn get(&self, id: BudgetId) -> Result<Budget, Error>;

    /// Create a new budget, assigning it the next free ID.
    ///
    /// A missing start date defaults to today.
    ///
    /// # Errors
    /// Returns an [Error::InvalidBudgetAmount] if the ceiling is not a
    /// positive number.
    fn create(&mut self, new_budget: NewBudget) -> Result<Budget, Error>;

    /// Merge the supplied fields of `changes` over the stored budget.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no budget has that ID, or the same
    /// validation errors as [BudgetStore::create].
    fn update(&mut self, id: BudgetId, changes: BudgetUpdate) -> Result<Budget, Error>;

    /// Remove the budget with `id`, returning the removed record.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no budget has that ID.
    fn delete(&mut self, id: BudgetId) -> Result<Budget, Error>;
}
