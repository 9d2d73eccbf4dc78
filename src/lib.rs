//! Kharcha is a library for tracking personal income and expenses, category
//! budgets, and savings goals.
//!
//! The crate is organised in three layers:
//!
//! - [stores] holds the CRUD traits for each entity along with an in-memory
//!   backend (tests, seed data) and a SQLite backend (production).
//! - The aggregation engine ([budget], [goal], [dashboard], [report]) is made
//!   of pure functions that work on snapshots the caller passes in, together
//!   with a reference date, so the same inputs always produce the same views.
//! - [transaction] defines the transaction model and the
//!   [filter engine](transaction::filter_transactions).
//!
//! Formatting helpers for Indian-locale output (rupee amounts, date presets,
//! day-count phrases) live in [format].

#![warn(missing_docs)]

mod app_state;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod db;
pub mod format;
pub mod goal;
pub mod report;
pub mod stores;
pub mod transaction;

pub use app_state::{AppState, SqliteAppState};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested record was not found.
    ///
    /// Callers should check that the ID is correct and that the record has
    /// not been deleted by an earlier operation.
    #[error("the requested record could not be found")]
    NotFound,

    /// A negative or non-numeric amount was used to create a transaction.
    ///
    /// Transactions record how much money moved; the direction is carried by
    /// the transaction kind, so the amount itself is never negative.
    #[error("transaction amounts must be non-negative numbers, got {0}")]
    NegativeAmount(f64),

    /// A goal contribution was not a positive, finite number.
    #[error("expected a positive amount, got {0}")]
    InvalidAmount(f64),

    /// An empty string was used as a category.
    #[error("category cannot be empty")]
    EmptyCategory,

    /// An empty string was used as a goal name.
    #[error("goal name cannot be empty")]
    EmptyGoalName,

    /// A budget was given a ceiling of zero or less.
    #[error("a budget ceiling must be greater than zero, got {0}")]
    InvalidBudgetAmount(f64),

    /// A goal was given a target of zero or less.
    #[error("a goal target must be greater than zero, got {0}")]
    InvalidTargetAmount(f64),

    /// A seed document could not be parsed.
    #[error("could not parse seed data: {0}")]
    InvalidSeedData(String),

    /// The underlying storage medium could not be reached.
    #[error("the data store is unavailable: {0}")]
    StoreUnavailable(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
