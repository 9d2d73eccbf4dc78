//! The transaction model and the filtering engine.

mod core;
mod filter;

pub use core::{
    Totals, Transaction, TransactionBuilder, TransactionId, TransactionKind, TransactionUpdate,
    totals,
};
pub use filter::{
    TransactionFilter, distinct_categories, distinct_payment_methods, filter_transactions,
};
