//! An in-memory transaction store.

use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionId, TransactionUpdate},
};

/// Stores transactions in a plain vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    transactions: Vec<Transaction>,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions`.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Create a store from a JSON array of transactions.
    ///
    /// # Errors
    /// Returns an [Error::InvalidSeedData] if the document does not parse.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let transactions = serde_json::from_str(json)
            .map_err(|error| Error::InvalidSeedData(error.to_string()))?;

        Ok(Self { transactions })
    }

    fn next_id(&self) -> TransactionId {
        self.transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self.transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

        Ok(transactions)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        builder.validate()?;

        let today = OffsetDateTime::now_utc().date();
        let transaction = builder.finalise(self.next_id(), today);
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn update(
        &mut self,
        id: TransactionId,
        changes: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        changes.validate()?;

        let transaction = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;
        changes.apply(transaction);

        Ok(transaction.clone())
    }

    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        Ok(self.transactions.remove(index))
    }
}
