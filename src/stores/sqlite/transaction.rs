//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionId, TransactionUpdate},
};

const TRANSACTION_COLUMNS: &str =
    "id, kind, amount, category, payment_method, date, description, is_recurring";

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// Create the transaction table.
///
/// The plain `INTEGER PRIMARY KEY` gives new rows `max(id) + 1`, which is the
/// ID assignment the store contract asks for.
pub(crate) fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY,
                kind TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                payment_method TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                is_recurring INTEGER NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        kind: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        payment_method: row.get(4)?,
        date: row.get(5)?,
        description: row.get(6)?,
        is_recurring: row.get(7)?,
    })
}

impl TransactionStore for SQLiteTransactionStore {
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        // Sort by date, and then ID to keep the order stable after updates.
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" ORDER BY date DESC, id ASC"
            ))?
            .query_map([], map_transaction_row)?
            .map(|result| result.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        builder.validate()?;

        let date = builder.date.unwrap_or(OffsetDateTime::now_utc().date());

        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "INSERT INTO \"transaction\" (kind, amount, category, payment_method, date, description, is_recurring)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {TRANSACTION_COLUMNS}"
            ))?
            .query_row(
                (
                    &builder.kind,
                    builder.amount,
                    &builder.category,
                    &builder.payment_method,
                    date,
                    &builder.description,
                    builder.is_recurring,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    fn update(
        &mut self,
        id: TransactionId,
        changes: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        changes.validate()?;

        let connection = self.connection.lock().unwrap();

        let mut transaction = connection
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        changes.apply(&mut transaction);

        connection.execute(
            "UPDATE \"transaction\"
             SET kind = ?1, amount = ?2, category = ?3, payment_method = ?4,
                 date = ?5, description = ?6, is_recurring = ?7
             WHERE id = ?8",
            (
                &transaction.kind,
                transaction.amount,
                &transaction.category,
                &transaction.payment_method,
                transaction.date,
                &transaction.description,
                transaction.is_recurring,
                id,
            ),
        )?;

        Ok(transaction)
    }

    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", (id,))?;

        Ok(transaction)
    }
}
