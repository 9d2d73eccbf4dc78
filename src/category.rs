//! The fixed category and payment-method enumerations.
//!
//! On the wire these are plain strings, so each enum keeps an `Unrecognized`
//! variant that preserves labels this crate does not know about (e.g. data
//! imported from elsewhere) instead of folding them into a real category.
//! Parsing never fails; unknown labels survive a round trip unchanged.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A transaction category.
///
/// Covers both the expense and income category lists. [Category::EXPENSE]
/// and [Category::INCOME] give the ordered lists offered when creating a
/// transaction; `Other` appears in both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    /// Groceries.
    Groceries,
    /// Utilities.
    Utilities,
    /// Rent or EMI payments.
    RentEmi,
    /// Education.
    Education,
    /// Healthcare.
    Healthcare,
    /// Entertainment.
    Entertainment,
    /// Festivals and cultural events.
    Festivals,
    /// Donations and charity.
    Donations,
    /// Gold and jewellery.
    GoldJewellery,
    /// Home maintenance.
    HomeMaintenance,
    /// Domestic help.
    DomesticHelp,
    /// Transport.
    Transport,
    /// Informal loans and repayments.
    InformalLoans,
    /// Clothing.
    Clothing,
    /// Personal care.
    PersonalCare,
    /// Salary income.
    Salary,
    /// Business income.
    Business,
    /// Rental income.
    RentIncome,
    /// Interest income.
    Interest,
    /// Investment income.
    Investments,
    /// Freelance income.
    Freelance,
    /// Gifts received.
    Gifts,
    /// Bonus income.
    Bonus,
    /// Anything that does not fit the other categories.
    Other,
    /// A label this crate does not recognise, preserved as-is.
    Unrecognized(String),
}

impl Category {
    /// The ordered expense category list.
    pub const EXPENSE: [Category; 16] = [
        Category::Groceries,
        Category::Utilities,
        Category::RentEmi,
        Category::Education,
        Category::Healthcare,
        Category::Entertainment,
        Category::Festivals,
        Category::Donations,
        Category::GoldJewellery,
        Category::HomeMaintenance,
        Category::DomesticHelp,
        Category::Transport,
        Category::InformalLoans,
        Category::Clothing,
        Category::PersonalCare,
        Category::Other,
    ];

    /// The ordered income category list.
    pub const INCOME: [Category; 9] = [
        Category::Salary,
        Category::Business,
        Category::RentIncome,
        Category::Interest,
        Category::Investments,
        Category::Freelance,
        Category::Gifts,
        Category::Bonus,
        Category::Other,
    ];

    /// The label shown in the UI and stored on the wire.
    pub fn label(&self) -> &str {
        match self {
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::RentEmi => "Rent/EMI",
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
            Category::Entertainment => "Entertainment",
            Category::Festivals => "Festivals/Cultural Events",
            Category::Donations => "Donations/Charity",
            Category::GoldJewellery => "Gold/Jewellery",
            Category::HomeMaintenance => "Home Maintenance",
            Category::DomesticHelp => "Domestic Help",
            Category::Transport => "Transport",
            Category::InformalLoans => "Informal Loans/Repayments",
            Category::Clothing => "Clothing",
            Category::PersonalCare => "Personal Care",
            Category::Salary => "Salary",
            Category::Business => "Business",
            Category::RentIncome => "Rent Income",
            Category::Interest => "Interest",
            Category::Investments => "Investments",
            Category::Freelance => "Freelance",
            Category::Gifts => "Gifts",
            Category::Bonus => "Bonus",
            Category::Other => "Other",
            Category::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        let label = label.trim();

        Category::EXPENSE
            .iter()
            .chain(Category::INCOME.iter())
            .find(|category| category.label() == label)
            .cloned()
            .unwrap_or_else(|| Category::Unrecognized(label.to_string()))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How money changed hands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// UPI transfer.
    Upi,
    /// An unspecified card.
    Card,
    /// Bank transfer.
    BankTransfer,
    /// A digital wallet.
    DigitalWallet,
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// A label this crate does not recognise, preserved as-is.
    Unrecognized(String),
}

impl PaymentMethod {
    /// The ordered payment method list.
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::Cash,
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::DigitalWallet,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
    ];

    /// The label shown in the UI and stored on the wire.
    pub fn label(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::DigitalWallet => "Digital Wallet",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(label: &str) -> Self {
        let label = label.trim();

        PaymentMethod::ALL
            .iter()
            .find(|method| method.label() == label)
            .cloned()
            .unwrap_or_else(|| PaymentMethod::Unrecognized(label.to_string()))
    }
}

impl From<String> for PaymentMethod {
    fn from(label: String) -> Self {
        PaymentMethod::from(label.as_str())
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.label().to_string()
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a savings goal is for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum GoalCategory {
    /// An emergency fund.
    EmergencyFund,
    /// A child's education.
    ChildEducation,
    /// A wedding.
    Wedding,
    /// Buying a home.
    HomePurchase,
    /// Retirement savings.
    Retirement,
    /// A vacation.
    Vacation,
    /// Buying a vehicle.
    Vehicle,
    /// Starting or growing a business.
    Business,
    /// An investment.
    Investment,
    /// Anything that does not fit the other categories.
    Other,
    /// A label this crate does not recognise, preserved as-is.
    Unrecognized(String),
}

impl GoalCategory {
    /// The ordered goal category list.
    pub const ALL: [GoalCategory; 10] = [
        GoalCategory::EmergencyFund,
        GoalCategory::ChildEducation,
        GoalCategory::Wedding,
        GoalCategory::HomePurchase,
        GoalCategory::Retirement,
        GoalCategory::Vacation,
        GoalCategory::Vehicle,
        GoalCategory::Business,
        GoalCategory::Investment,
        GoalCategory::Other,
    ];

    /// The label shown in the UI and stored on the wire.
    pub fn label(&self) -> &str {
        match self {
            GoalCategory::EmergencyFund => "Emergency Fund",
            GoalCategory::ChildEducation => "Child Education",
            GoalCategory::Wedding => "Wedding",
            GoalCategory::HomePurchase => "Home Purchase",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::Vacation => "Vacation",
            GoalCategory::Vehicle => "Vehicle",
            GoalCategory::Business => "Business",
            GoalCategory::Investment => "Investment",
            GoalCategory::Other => "Other",
            GoalCategory::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for GoalCategory {
    fn from(label: &str) -> Self {
        let label = label.trim();

        GoalCategory::ALL
            .iter()
            .find(|category| category.label() == label)
            .cloned()
            .unwrap_or_else(|| GoalCategory::Unrecognized(label.to_string()))
    }
}

impl From<String> for GoalCategory {
    fn from(label: String) -> Self {
        GoalCategory::from(label.as_str())
    }
}

impl From<GoalCategory> for String {
    fn from(category: GoalCategory) -> Self {
        category.label().to_string()
    }
}

impl Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, GoalCategory, PaymentMethod};

    #[test]
    fn known_labels_round_trip() {
        for category in Category::EXPENSE.iter().chain(Category::INCOME.iter()) {
            assert_eq!(&Category::from(category.label()), category);
        }

        for method in &PaymentMethod::ALL {
            assert_eq!(&PaymentMethod::from(method.label()), method);
        }

        for category in &GoalCategory::ALL {
            assert_eq!(&GoalCategory::from(category.label()), category);
        }
    }

    #[test]
    fn unknown_label_is_preserved() {
        let category = Category::from("Chai Stall");

        assert_eq!(category, Category::Unrecognized("Chai Stall".to_string()));
        assert_eq!(category.label(), "Chai Stall");
    }

    #[test]
    fn labels_are_trimmed_before_matching() {
        assert_eq!(Category::from("  Groceries "), Category::Groceries);
        assert_eq!(PaymentMethod::from("UPI "), PaymentMethod::Upi);
    }

    #[test]
    fn other_is_in_both_transaction_lists() {
        assert!(Category::EXPENSE.contains(&Category::Other));
        assert!(Category::INCOME.contains(&Category::Other));
    }
}
