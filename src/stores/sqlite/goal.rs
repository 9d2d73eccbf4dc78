//! Implements a SQLite backed goal store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    goal::{Goal, GoalId, GoalUpdate, NewGoal},
    stores::GoalStore,
};

const GOAL_COLUMNS: &str = "id, name, category, target_amount, current_amount, target_date";

/// Stores savings goals in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteGoalStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteGoalStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// Create the goal table.
pub(crate) fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goal (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                target_amount REAL NOT NULL,
                current_amount REAL NOT NULL,
                target_date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_goal_row(row: &Row) -> Result<Goal, rusqlite::Error> {
    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        target_amount: row.get(3)?,
        current_amount: row.get(4)?,
        target_date: row.get(5)?,
    })
}

impl GoalStore for SQLiteGoalStore {
    fn get_all(&self) -> Result<Vec<Goal>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goal ORDER BY id ASC"))?
            .query_map([], map_goal_row)?
            .map(|result| result.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: GoalId) -> Result<Goal, Error> {
        let goal = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goal WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_goal_row)?;

        Ok(goal)
    }

    fn create(&mut self, new_goal: NewGoal) -> Result<Goal, Error> {
        new_goal.validate()?;

        let goal = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "INSERT INTO goal (name, category, target_amount, current_amount, target_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING {GOAL_COLUMNS}"
            ))?
            .query_row(
                (
                    &new_goal.name,
                    &new_goal.category,
                    new_goal.target_amount,
                    new_goal.current_amount.unwrap_or(0.0),
                    new_goal.target_date,
                ),
                map_goal_row,
            )?;

        Ok(goal)
    }

    fn update(&mut self, id: GoalId, changes: GoalUpdate) -> Result<Goal, Error> {
        changes.validate()?;

        let connection = self.connection.lock().unwrap();

        let mut goal = connection
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goal WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_goal_row)?;

        changes.apply(&mut goal);

        connection.execute(
            "UPDATE goal
             SET name = ?1, category = ?2, target_amount = ?3, current_amount = ?4, target_date = ?5
             WHERE id = ?6",
            (
                &goal.name,
                &goal.category,
                goal.target_amount,
                goal.current_amount,
                goal.target_date,
                id,
            ),
        )?;

        Ok(goal)
    }

    fn delete(&mut self, id: GoalId) -> Result<Goal, Error> {
        let connection = self.connection.lock().unwrap();

        let goal = connection
            .prepare(&format!("SELECT {GOAL_COLUMNS} FROM goal WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_goal_row)?;

        connection.execute("DELETE FROM goal WHERE id = ?1", (id,))?;

        Ok(goal)
    }
}
