//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder, TransactionId, TransactionUpdate},
};

/// Handles the storage and retrieval of transactions.
pub trait TransactionStore {
    /// Retrieve every transaction, newest first.
    ///
    /// Transactions on the same date come back in ascending ID order so the
    /// list stays stable across updates.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] or [Error::StoreUnavailable] if the
    /// underlying medium cannot be read.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve the transaction with `id`.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no transaction has that ID.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Create a new transaction, assigning it the next free ID.
    ///
    /// A builder without a date gets today's date.
    ///
    /// # Errors
    /// Returns an [Error::NegativeAmount] if the amount is negative or not a
    /// number, or an [Error::EmptyCategory] if the category label is empty.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Merge the supplied fields of `changes` over the stored transaction.
    ///
    /// The ID never changes.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no transaction has that ID, or the
    /// same validation errors as [TransactionStore::create].
    fn update(
        &mut self,
        id: TransactionId,
        changes: TransactionUpdate,
    ) -> Result<Transaction, Error>;

    /// Remove the transaction with `id`, returning the removed record.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no transaction has that ID.
    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error>;
}
