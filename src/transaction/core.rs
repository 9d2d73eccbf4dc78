//! Defines the core transaction model.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    category::{Category, PaymentMethod},
};

/// The ID of a transaction record.
pub type TransactionId = i64;

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// builder to a [TransactionStore](crate::stores::TransactionStore), which
/// assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money earned or spent. Never negative.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// How the money was paid or received.
    pub payment_method: PaymentMethod,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction repeats every period, e.g. rent.
    pub is_recurring: bool,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(kind: TransactionKind, amount: f64, category: Category) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            category,
            payment_method: PaymentMethod::Cash,
            date: None,
            description: String::new(),
            is_recurring: false,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Optional fields default to a cash payment, today's date, an empty
/// description and a one-off (non-recurring) transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBuilder {
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// How the money was paid or received.
    pub payment_method: PaymentMethod,
    /// When the transaction happened. `None` means today.
    pub date: Option<Date>,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction repeats every period.
    pub is_recurring: bool,
}

impl TransactionBuilder {
    /// Set the payment method for the transaction.
    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Mark the transaction as recurring.
    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    /// Check the builder against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.amount < 0.0 || !self.amount.is_finite() {
            return Err(Error::NegativeAmount(self.amount));
        }

        if self.category.label().is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(())
    }

    /// Turn the builder into a transaction with the given ID, defaulting the
    /// date to `today`.
    pub(crate) fn finalise(self, id: TransactionId, today: Date) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            payment_method: self.payment_method,
            date: self.date.unwrap_or(today),
            description: self.description,
            is_recurring: self.is_recurring,
        }
    }
}

/// A partial update for a transaction.
///
/// Fields left as `None` keep their stored value; the ID never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    /// Replace the transaction kind.
    pub kind: Option<TransactionKind>,
    /// Replace the amount.
    pub amount: Option<f64>,
    /// Replace the category.
    pub category: Option<Category>,
    /// Replace the payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Replace the date.
    pub date: Option<Date>,
    /// Replace the description.
    pub description: Option<String>,
    /// Replace the recurring flag.
    pub is_recurring: Option<bool>,
}

impl TransactionUpdate {
    /// Check the supplied fields against the model invariants.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(amount) = self.amount {
            if amount < 0.0 || !amount.is_finite() {
                return Err(Error::NegativeAmount(amount));
            }
        }

        if let Some(category) = &self.category {
            if category.label().is_empty() {
                return Err(Error::EmptyCategory);
            }
        }

        Ok(())
    }

    /// Merge the supplied fields over `transaction`.
    pub(crate) fn apply(self, transaction: &mut Transaction) {
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(payment_method) = self.payment_method {
            transaction.payment_method = payment_method;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(is_recurring) = self.is_recurring {
            transaction.is_recurring = is_recurring;
        }
    }
}

/// Income and expense sums over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of income amounts.
    pub income: f64,
    /// The sum of expense amounts.
    pub expense: f64,
}

impl Totals {
    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Sum income and expense amounts separately over `transactions`.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut result = Totals::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => result.income += transaction.amount,
            TransactionKind::Expense => result.expense += transaction.amount,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::{Category, PaymentMethod},
    };

    use super::{Totals, Transaction, TransactionKind, TransactionUpdate, totals};

    #[test]
    fn builder_applies_defaults() {
        let transaction = Transaction::build(TransactionKind::Expense, 250.0, Category::Groceries)
            .finalise(1, date!(2025 - 06 - 15));

        assert_eq!(transaction.payment_method, PaymentMethod::Cash);
        assert_eq!(transaction.date, date!(2025 - 06 - 15));
        assert_eq!(transaction.description, "");
        assert!(!transaction.is_recurring);
    }

    #[test]
    fn builder_keeps_explicit_date() {
        let transaction = Transaction::build(TransactionKind::Expense, 250.0, Category::Groceries)
            .date(date!(2025 - 01 - 02))
            .finalise(1, date!(2025 - 06 - 15));

        assert_eq!(transaction.date, date!(2025 - 01 - 02));
    }

    #[test]
    fn builder_rejects_negative_amount() {
        let result = Transaction::build(TransactionKind::Expense, -5.0, Category::Groceries)
            .validate();

        assert_eq!(result, Err(Error::NegativeAmount(-5.0)));
    }

    #[test]
    fn builder_rejects_empty_category() {
        let result = Transaction::build(
            TransactionKind::Expense,
            5.0,
            Category::Unrecognized(String::new()),
        )
        .validate();

        assert_eq!(result, Err(Error::EmptyCategory));
    }

    #[test]
    fn update_only_replaces_supplied_fields() {
        let mut transaction =
            Transaction::build(TransactionKind::Expense, 250.0, Category::Groceries)
                .description("vegetables")
                .finalise(7, date!(2025 - 06 - 15));

        TransactionUpdate {
            amount: Some(300.0),
            ..Default::default()
        }
        .apply(&mut transaction);

        assert_eq!(transaction.id, 7);
        assert_eq!(transaction.amount, 300.0);
        assert_eq!(transaction.category, Category::Groceries);
        assert_eq!(transaction.description, "vegetables");
    }

    #[test]
    fn totals_sum_by_kind() {
        let transactions = vec![
            Transaction::build(TransactionKind::Income, 1000.0, Category::Salary)
                .finalise(1, date!(2025 - 06 - 01)),
            Transaction::build(TransactionKind::Expense, 300.0, Category::Groceries)
                .finalise(2, date!(2025 - 06 - 02)),
            Transaction::build(TransactionKind::Expense, 200.0, Category::Transport)
                .finalise(3, date!(2025 - 06 - 03)),
        ];

        let result = totals(&transactions);

        assert_eq!(
            result,
            Totals {
                income: 1000.0,
                expense: 500.0
            }
        );
        assert_eq!(result.net(), 500.0);
    }
}
