//! Account model
//!
//! Represents financial accounts (checking, savings, credit cards, etc.) as
//! they are reported by the remote API.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::{is_currency_code, Money};

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    Credit,
    /// Cash
    Cash,
    /// Digital wallet
    Wallet,
    /// Investment account
    Investment,
}

impl AccountType {
    /// Returns true if this account type typically carries a negative balance
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
            Self::Wallet => write!(f, "Wallet"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Three-letter currency code
    pub currency: String,

    /// Balance as of the last sync; authoritative, never recomputed
    pub balance: Money,
}

impl Account {
    /// Create an account snapshot
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        account_type: AccountType,
        currency: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type,
            currency: currency.into(),
            balance,
        }
    }

    pub fn is_liability(&self) -> bool {
        self.account_type.is_liability()
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName(self.id.clone()));
        }

        if !is_currency_code(&self.currency) {
            return Err(AccountValidationError::InvalidCurrency {
                account: self.id.clone(),
                currency: self.currency.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName(AccountId),
    InvalidCurrency { account: AccountId, currency: String },
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(id) => write!(f, "Account {} has an empty name", id),
            Self::InvalidCurrency { account, currency } => write!(
                f,
                "Account {} has an invalid currency code '{}'",
                account, currency
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking() -> Account {
        Account::new(
            "acc-1",
            "Checking",
            AccountType::Checking,
            "USD",
            Money::from_cents(50000),
        )
    }

    #[test]
    fn test_validation() {
        let mut account = checking();
        assert!(account.validate().is_ok());

        account.currency = "usd".into();
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::InvalidCurrency { .. })
        ));

        account.currency = "USD".into();
        account.name = "  ".into();
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::EmptyName(AccountId::new("acc-1")))
        );
    }

    #[test]
    fn test_is_liability() {
        assert!(AccountType::Credit.is_liability());
        assert!(!AccountType::Checking.is_liability());
        assert!(!AccountType::Wallet.is_liability());

        let mut card = checking();
        card.account_type = AccountType::Credit;
        assert!(card.is_liability());
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{"id":"a1","name":"Visa","type":"CREDIT","currency":"USD","balance":-120.5}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.balance, Money::from_cents(-12050));
    }

    #[test]
    fn test_unknown_account_type_is_rejected() {
        let json = r#"{"id":"a1","name":"Loan","type":"MORTGAGE","currency":"USD","balance":0}"#;
        assert!(serde_json::from_str::<Account>(json).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", checking()), "Checking (Checking)");
    }
}
