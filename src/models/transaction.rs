//! Transaction model
//!
//! Transactions arrive already enriched with account and category display
//! data. The amount is always a non-negative magnitude; whether it is money
//! coming in or going out is carried by the transaction type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::{is_currency_code, Money};

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
    /// Movement between the user's own accounts
    Transfer,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Account name, for display
    #[serde(default)]
    pub account_name: String,

    /// Category, absent for uncategorized transactions and transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Category name, for display and breakdown grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Category color, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,

    /// Category icon, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_icon: Option<String>,

    /// Non-negative magnitude
    pub amount: Money,

    /// Three-letter currency code
    pub currency: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Income, expense or transfer
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction with no category or description
    pub fn new(
        id: impl Into<TransactionId>,
        account_id: impl Into<AccountId>,
        transaction_type: TransactionType,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            account_name: String::new(),
            category_id: None,
            category_name: None,
            category_color: None,
            category_icon: None,
            amount,
            currency: "USD".to_string(),
            description: None,
            date,
            transaction_type,
        }
    }

    /// Attach a category reference and its display name
    pub fn with_category(
        mut self,
        category_id: impl Into<CategoryId>,
        category_name: impl Into<String>,
    ) -> Self {
        self.category_id = Some(category_id.into());
        self.category_name = Some(category_name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_transfer(&self) -> bool {
        self.transaction_type == TransactionType::Transfer
    }

    /// Category name if the transaction carries a non-empty one
    pub fn category_label(&self) -> Option<&str> {
        self.category_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Sign shown next to the amount in transaction lists
    pub fn display_sign(&self) -> char {
        if self.is_income() {
            '+'
        } else {
            '-'
        }
    }

    /// Description, falling back to the category name
    pub fn display_label(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.category_label())
            .unwrap_or("Transaction")
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount {
                transaction: self.id.clone(),
                amount: self.amount,
            });
        }

        if self.is_transfer() && self.category_id.is_some() {
            return Err(TransactionValidationError::TransferWithCategory(
                self.id.clone(),
            ));
        }

        if !is_currency_code(&self.currency) {
            return Err(TransactionValidationError::InvalidCurrency {
                transaction: self.id.clone(),
                currency: self.currency.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date,
            self.display_label(),
            self.display_sign(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount {
        transaction: TransactionId,
        amount: Money,
    },
    TransferWithCategory(TransactionId),
    InvalidCurrency {
        transaction: TransactionId,
        currency: String,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount {
                transaction,
                amount,
            } => write!(
                f,
                "Transaction {} has a negative amount ({}); the sign belongs in its type",
                transaction, amount
            ),
            Self::TransferWithCategory(id) => {
                write!(f, "Transfer {} must not have a category", id)
            }
            Self::InvalidCurrency {
                transaction,
                currency,
            } => write!(
                f,
                "Transaction {} has an invalid currency code '{}'",
                transaction, currency
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let txn = Transaction::new(
            "t1",
            "a1",
            TransactionType::Expense,
            Money::from_cents(-500),
            date(),
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_transfer_with_category_is_rejected() {
        let txn = Transaction::new(
            "t1",
            "a1",
            TransactionType::Transfer,
            Money::from_cents(500),
            date(),
        )
        .with_category("c1", "Savings");
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::TransferWithCategory(
                TransactionId::new("t1")
            ))
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let txn = Transaction::new("t1", "a1", TransactionType::Income, Money::zero(), date());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_display_label_fallbacks() {
        let plain = Transaction::new(
            "t1",
            "a1",
            TransactionType::Expense,
            Money::from_cents(500),
            date(),
        );
        assert_eq!(plain.display_label(), "Transaction");

        let categorized = plain.clone().with_category("c1", "Groceries");
        assert_eq!(categorized.display_label(), "Groceries");

        let described = categorized.with_description("Weekly shop");
        assert_eq!(described.display_label(), "Weekly shop");
    }

    #[test]
    fn test_display_sign() {
        let income = Transaction::new("t1", "a1", TransactionType::Income, Money::zero(), date());
        let transfer =
            Transaction::new("t2", "a1", TransactionType::Transfer, Money::zero(), date());
        assert_eq!(income.display_sign(), '+');
        assert_eq!(transfer.display_sign(), '-');
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "t1",
            "accountId": "a1",
            "accountName": "Checking",
            "categoryId": "c1",
            "categoryName": "Food",
            "amount": 50,
            "currency": "USD",
            "date": "2024-01-15",
            "type": "EXPENSE"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_expense());
        assert_eq!(txn.category_label(), Some("Food"));
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.date, date());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{"id":"t1","accountId":"a1","currency":"USD","date":"2024-01-15","type":"INCOME"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            "t1",
            "a1",
            TransactionType::Expense,
            Money::from_cents(5000),
            date(),
        )
        .with_description("Test Store");
        assert_eq!(format!("{}", txn), "2024-01-15 Test Store -$50.00");
    }
}
