//! SQLite-backed store implementations.
//!
//! Each store shares one connection behind an `Arc<Mutex<_>>`, so the three
//! stores of an application instance can point at the same database file.

mod budget;
mod goal;
mod transaction;

pub use budget::SQLiteBudgetStore;
pub use goal::SQLiteGoalStore;
pub use transaction::SQLiteTransactionStore;

pub(crate) use budget::create_budget_table;
pub(crate) use goal::create_goal_table;
pub(crate) use transaction::create_transaction_table;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};

use crate::{
    budget::BudgetPeriod,
    category::{Category, GoalCategory, PaymentMethod},
    transaction::TransactionKind,
};

// The enums live in the database as their wire labels.

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(Category::from)
    }
}

impl ToSql for PaymentMethod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for PaymentMethod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(PaymentMethod::from)
    }
}

impl ToSql for GoalCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for GoalCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(GoalCategory::from)
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };

        Ok(ToSqlOutput::from(label))
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for BudgetPeriod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let label = match self {
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Quarterly => "quarterly",
            BudgetPeriod::Annual => "annual",
        };

        Ok(ToSqlOutput::from(label))
    }
}

impl FromSql for BudgetPeriod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "monthly" => Ok(BudgetPeriod::Monthly),
            "quarterly" => Ok(BudgetPeriod::Quarterly),
            "annual" => Ok(BudgetPeriod::Annual),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
