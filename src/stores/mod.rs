//! Traits and implementations for the objects that store the domain models.
//!
//! Every store hands out independent copies of its records; mutations are
//! only observable through subsequent reads on the same store instance, so
//! callers reload after a create, update or delete. The [memory] backend is
//! the injectable fake for tests and seed data; the [sqlite] backend is the
//! production medium.

mod budget;
mod goal;
mod transaction;

pub mod memory;
pub mod sqlite;

pub use budget::BudgetStore;
pub use goal::GoalStore;
pub use transaction::TransactionStore;
