//! Predicate-based filtering for transaction lists.

use time::Date;

use crate::category::{Category, PaymentMethod};

use super::core::{Transaction, TransactionKind};

/// The criteria used to narrow down a transaction list.
///
/// Every field is optional; `None` (or an empty search string) leaves that
/// predicate inactive. Active predicates must all match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring match against the description or the
    /// category label.
    pub search: Option<String>,
    /// Keep only transactions of this kind.
    pub kind: Option<TransactionKind>,
    /// Keep only transactions in this category.
    pub category: Option<Category>,
    /// Keep only transactions paid with this method.
    pub payment_method: Option<PaymentMethod>,
    /// Inclusive lower bound on the transaction date.
    pub date_from: Option<Date>,
    /// Inclusive upper bound on the transaction date.
    pub date_to: Option<Date>,
}

impl TransactionFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();

            if !needle.is_empty()
                && !transaction.description.to_lowercase().contains(&needle)
                && !transaction.category.label().to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if self.kind.is_some_and(|kind| kind != transaction.kind) {
            return false;
        }

        if self
            .category
            .as_ref()
            .is_some_and(|category| *category != transaction.category)
        {
            return false;
        }

        if self
            .payment_method
            .as_ref()
            .is_some_and(|method| *method != transaction.payment_method)
        {
            return false;
        }

        if self.date_from.is_some_and(|from| transaction.date < from) {
            return false;
        }

        if self.date_to.is_some_and(|to| transaction.date > to) {
            return false;
        }

        true
    }
}

/// Apply `filter` to `transactions` and sort the result by date, newest
/// first.
///
/// The sort is stable, so transactions on the same date keep their input
/// order. Filtering an already-filtered list with the same filter returns
/// the same transactions.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    filtered
}

/// The categories present in `transactions`, in the order they first appear.
///
/// Used to offer filter options that match the data instead of the full
/// fixed lists.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<Category> {
    let mut categories = Vec::new();

    for transaction in transactions {
        if !categories.contains(&transaction.category) {
            categories.push(transaction.category.clone());
        }
    }

    categories
}

/// The payment methods present in `transactions`, in the order they first
/// appear.
pub fn distinct_payment_methods(transactions: &[Transaction]) -> Vec<PaymentMethod> {
    let mut methods = Vec::new();

    for transaction in transactions {
        if !methods.contains(&transaction.payment_method) {
            methods.push(transaction.payment_method.clone());
        }
    }

    methods
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::category::{Category, PaymentMethod};
    use crate::transaction::{Transaction, TransactionKind};

    use super::{
        TransactionFilter, distinct_categories, distinct_payment_methods, filter_transactions,
    };

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::build(TransactionKind::Expense, 300.0, Category::Groceries)
                .description("Weekly vegetables")
                .date(date!(2025 - 06 - 02))
                .finalise(1, date!(2025 - 06 - 30)),
            Transaction::build(TransactionKind::Income, 50000.0, Category::Salary)
                .payment_method(PaymentMethod::BankTransfer)
                .description("June salary")
                .date(date!(2025 - 06 - 01))
                .finalise(2, date!(2025 - 06 - 30)),
            Transaction::build(TransactionKind::Expense, 1200.0, Category::Transport)
                .payment_method(PaymentMethod::Upi)
                .description("Train tickets")
                .date(date!(2025 - 06 - 20))
                .finalise(3, date!(2025 - 06 - 30)),
            Transaction::build(TransactionKind::Expense, 450.0, Category::Groceries)
                .payment_method(PaymentMethod::Upi)
                .date(date!(2025 - 05 - 28))
                .finalise(4, date!(2025 - 06 - 30)),
        ]
    }

    #[test]
    fn no_filters_returns_everything_newest_first() {
        let transactions = sample_transactions();

        let result = filter_transactions(&transactions, &TransactionFilter::default());

        let ids: Vec<_> = result.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn output_is_non_increasing_by_date() {
        let transactions = sample_transactions();

        let result = filter_transactions(&transactions, &TransactionFilter::default());

        for window in result.windows(2) {
            assert!(window[0].date >= window[1].date);
        }
    }

    #[test]
    fn search_matches_description_and_category_case_insensitively() {
        let transactions = sample_transactions();

        let by_description = filter_transactions(
            &transactions,
            &TransactionFilter {
                search: Some("train".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 3);

        let by_category = filter_transactions(
            &transactions,
            &TransactionFilter {
                search: Some("grocer".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn empty_search_matches_everything() {
        let transactions = sample_transactions();

        let result = filter_transactions(
            &transactions,
            &TransactionFilter {
                search: Some(String::new()),
                ..Default::default()
            },
        );

        assert_eq!(result.len(), transactions.len());
    }

    #[test]
    fn predicates_are_combined_with_and() {
        let transactions = sample_transactions();

        let result = filter_transactions(
            &transactions,
            &TransactionFilter {
                kind: Some(TransactionKind::Expense),
                category: Some(Category::Groceries),
                payment_method: Some(PaymentMethod::Upi),
                ..Default::default()
            },
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 4);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let transactions = sample_transactions();

        let result = filter_transactions(
            &transactions,
            &TransactionFilter {
                date_from: Some(date!(2025 - 06 - 01)),
                date_to: Some(date!(2025 - 06 - 02)),
                ..Default::default()
            },
        );

        let ids: Vec<_> = result.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            ..Default::default()
        };

        let once = filter_transactions(&transactions, &filter);
        let twice = filter_transactions(&once, &filter);

        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_lists_keep_first_seen_order() {
        let transactions = sample_transactions();

        assert_eq!(
            distinct_categories(&transactions),
            vec![Category::Groceries, Category::Salary, Category::Transport]
        );
        assert_eq!(
            distinct_payment_methods(&transactions),
            vec![
                PaymentMethod::Cash,
                PaymentMethod::BankTransfer,
                PaymentMethod::Upi
            ]
        );
    }
}
