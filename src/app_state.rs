//! Implements a struct that bundles the application's data stores.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::stores::{
    BudgetStore, GoalStore, TransactionStore,
    sqlite::{SQLiteBudgetStore, SQLiteGoalStore, SQLiteTransactionStore},
};

/// The data stores behind the application.
///
/// Which backend runs underneath is decided where the state is built:
/// binaries wire in the SQLite stores, tests inject the in-memory ones, and
/// the rest of the code only sees the traits.
#[derive(Debug, Clone)]
pub struct AppState<T, B, G>
where
    T: TransactionStore,
    B: BudgetStore,
    G: GoalStore,
{
    /// The store for transactions.
    pub transaction_store: T,
    /// The store for budgets.
    pub budget_store: B,
    /// The store for goals.
    pub goal_store: G,
}

impl<T, B, G> AppState<T, B, G>
where
    T: TransactionStore,
    B: BudgetStore,
    G: GoalStore,
{
    /// Create a new [AppState] from the given stores.
    pub fn new(transaction_store: T, budget_store: B, goal_store: G) -> Self {
        Self {
            transaction_store,
            budget_store,
            goal_store,
        }
    }
}

/// The production configuration: every store backed by SQLite.
pub type SqliteAppState = AppState<SQLiteTransactionStore, SQLiteBudgetStore, SQLiteGoalStore>;

impl SqliteAppState {
    /// Create an [AppState] whose stores all share `connection`.
    pub fn with_connection(connection: Arc<Mutex<Connection>>) -> Self {
        Self::new(
            SQLiteTransactionStore::new(connection.clone()),
            SQLiteBudgetStore::new(connection.clone()),
            SQLiteGoalStore::new(connection),
        )
    }
}
