//! Implements a SQLite backed budget store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    budget::{Budget, BudgetId, BudgetUpdate, NewBudget},
    stores::BudgetStore,
};

const BUDGET_COLUMNS: &str = "id, category, amount, period, start_date";

/// Stores budgets in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteBudgetStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBudgetStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// Create the budget table.
pub(crate) fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
                id INTEGER PRIMARY KEY,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                period TEXT NOT NULL,
                start_date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
        period: row.get(3)?,
        start_date: row.get(4)?,
    })
}

impl BudgetStore for SQLiteBudgetStore {
    fn get_all(&self) -> Result<Vec<Budget>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!("SELECT {BUDGET_COLUMNS} FROM budget ORDER BY id ASC"))?
            .query_map([], map_budget_row)?
            .map(|result| result.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: BudgetId) -> Result<Budget, Error> {
        let budget = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!("SELECT {BUDGET_COLUMNS} FROM budget WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_budget_row)?;

        Ok(budget)
    }

    fn create(&mut self, new_budget: NewBudget) -> Result<Budget, Error> {
        new_budget.validate()?;

        let start_date = new_budget
            .start_date
            .unwrap_or(OffsetDateTime::now_utc().date());

        let budget = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "INSERT INTO budget (category, amount, period, start_date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {BUDGET_COLUMNS}"
            ))?
            .query_row(
                (
                    &new_budget.category,
                    new_budget.amount,
                    &new_budget.period,
                    start_date,
                ),
                map_budget_row,
            )?;

        Ok(budget)
    }

    fn update(&mut self, id: BudgetId, changes: BudgetUpdate) -> Result<Budget, Error> {
        changes.validate()?;

        let connection = self.connection.lock().unwrap();

        let mut budget = connection
            .prepare(&format!("SELECT {BUDGET_COLUMNS} FROM budget WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_budget_row)?;

        changes.apply(&mut budget);

        connection.execute(
            "UPDATE budget SET category = ?1, amount = ?2, period = ?3, start_date = ?4
             WHERE id = ?5",
            (
                &budget.category,
                budget.amount,
                &budget.period,
                budget.start_date,
                id,
            ),
        )?;

        Ok(budget)
    }

    fn delete(&mut self, id: BudgetId) -> Result<Budget, Error> {
        let connection = self.connection.lock().unwrap();

        let budget = connection
            .prepare(&format!("SELECT {BUDGET_COLUMNS} FROM budget WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_budget_row)?;

        connection.execute("DELETE FROM budget WHERE id = ?1", (id,))?;

        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        budget::{BudgetPeriod, BudgetUpdate, NewBudget},
        category::Category,
        db::initialize,
        stores::BudgetStore,
    };

    use super::SQLiteBudgetStore;

    fn get_test_store() -> SQLiteBudgetStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteBudgetStore::new(Arc::new(Mutex::new(connection)))
    }

    fn new_budget(category: Category, amount: f64) -> NewBudget {
        NewBudget {
            category,
            amount,
            period: BudgetPeriod::Monthly,
            start_date: Some(date!(2025 - 06 - 01)),
        }
    }

    #[test]
    fn create_and_get_round_trip() {
        let mut store = get_test_store();

        let created = store.create(new_budget(Category::Groceries, 1000.0)).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn create_rejects_non_positive_ceiling() {
        let mut store = get_test_store();

        let result = store.create(new_budget(Category::Groceries, -1.0));

        assert_eq!(result, Err(Error::InvalidBudgetAmount(-1.0)));
    }

    #[test]
    fn update_changes_the_period() {
        let mut store = get_test_store();
        let created = store.create(new_budget(Category::Groceries, 1000.0)).unwrap();

        let updated = store
            .update(
                created.id,
                BudgetUpdate {
                    period: Some(BudgetPeriod::Annual),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.period, BudgetPeriod::Annual);
        assert_eq!(updated.amount, 1000.0);
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn delete_fails_for_missing_id() {
        let mut store = get_test_store();

        assert_eq!(store.delete(42), Err(Error::NotFound));
    }

    #[test]
    fn get_all_keeps_creation_order() {
        let mut store = get_test_store();
        store.create(new_budget(Category::Groceries, 1000.0)).unwrap();
        store.create(new_budget(Category::Transport, 500.0)).unwrap();

        let budgets = store.get_all().unwrap();

        let categories: Vec<_> = budgets.iter().map(|budget| budget.category.clone()).collect();
        assert_eq!(categories, vec![Category::Groceries, Category::Transport]);
    }
}
