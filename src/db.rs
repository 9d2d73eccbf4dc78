//! Opens and initialises the application's SQLite database.

use std::path::Path;

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    stores::sqlite::{create_budget_table, create_goal_table, create_transaction_table},
};

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or there is some other SQL
/// error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_budget_table(&transaction)?;
    create_goal_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Open (or create) the database at `path` and make sure the schema exists.
///
/// # Errors
/// Returns an [Error::StoreUnavailable] if the file cannot be opened.
pub fn open(path: impl AsRef<Path>) -> Result<Connection, Error> {
    let connection = Connection::open(path)
        .map_err(|error| Error::StoreUnavailable(error.to_string()))?;

    initialize(&connection)?;

    Ok(connection)
}
