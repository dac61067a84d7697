//! Point-in-time snapshot of the entities supplied by the remote API
//!
//! A snapshot is decoded from the API's JSON shape, validated once, and then
//! handed to the report engines by reference. Nothing here is ever written
//! back.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::{Account, Budget, Category, CategoryType, Transaction, TransactionType};
use crate::error::{FintrackError, FintrackResult};

/// Accounts, categories, transactions and budgets as of one fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Decode a snapshot from JSON text without validating it
    pub fn from_json(json: &str) -> FintrackResult<Self> {
        serde_json::from_str(json).map_err(|e| FintrackError::Snapshot(e.to_string()))
    }

    /// Read, decode and validate a snapshot file
    pub fn load(path: &Path) -> FintrackResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FintrackError::Io(format!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            ))
        })?;

        let snapshot = Self::from_json(&contents)?;
        snapshot.validate()?;

        tracing::info!(
            path = %path.display(),
            accounts = snapshot.accounts.len(),
            categories = snapshot.categories.len(),
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            "loaded snapshot"
        );

        Ok(snapshot)
    }

    /// Validate every entity and the references between them
    pub fn validate(&self) -> FintrackResult<()> {
        ensure_unique("Account", self.accounts.iter().map(|a| a.id.as_str()))?;
        ensure_unique("Category", self.categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique(
            "Transaction",
            self.transactions.iter().map(|t| t.id.as_str()),
        )?;

        for account in &self.accounts {
            account
                .validate()
                .map_err(|e| FintrackError::Validation(e.to_string()))?;
        }

        for category in &self.categories {
            category
                .validate()
                .map_err(|e| FintrackError::Validation(e.to_string()))?;
        }

        validate_transactions(&self.transactions)?;
        validate_budgets(&self.budgets)?;

        let category_types: HashMap<&str, CategoryType> = self
            .categories
            .iter()
            .map(|c| (c.id.as_str(), c.category_type))
            .collect();

        let account_ids: HashSet<&str> = self.accounts.iter().map(|a| a.id.as_str()).collect();

        // Snapshots may omit a collection entirely; references are only
        // checked against collections that were supplied.
        for txn in &self.transactions {
            if !account_ids.is_empty() && !account_ids.contains(txn.account_id.as_str()) {
                return Err(FintrackError::Validation(format!(
                    "Transaction {} references unknown account {}",
                    txn.id, txn.account_id
                )));
            }

            let Some(category_id) = &txn.category_id else {
                continue;
            };
            let Some(category_type) = category_types.get(category_id.as_str()) else {
                if category_types.is_empty() {
                    continue;
                }
                return Err(FintrackError::Validation(format!(
                    "Transaction {} references unknown category {}",
                    txn.id, category_id
                )));
            };
            let consistent = matches!(
                (txn.transaction_type, category_type),
                (TransactionType::Income, CategoryType::Income)
                    | (TransactionType::Expense, CategoryType::Expense)
            );
            if !consistent {
                return Err(FintrackError::Validation(format!(
                    "Transaction {} is {} but category {} is {}",
                    txn.id, txn.transaction_type, category_id, category_type
                )));
            }
        }

        for budget in &self.budgets {
            for item in &budget.items {
                match category_types.get(item.category_id.as_str()) {
                    Some(CategoryType::Income) => {
                        return Err(FintrackError::Validation(format!(
                            "Budget '{}' allocates income category {}",
                            budget.name, item.category_id
                        )));
                    }
                    None if !category_types.is_empty() => {
                        return Err(FintrackError::Validation(format!(
                            "Budget '{}' allocates unknown category {}",
                            budget.name, item.category_id
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

/// Validate transactions before aggregating them
pub fn validate_transactions(transactions: &[Transaction]) -> FintrackResult<()> {
    for txn in transactions {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
    }
    Ok(())
}

/// Validate budgets before evaluating them
pub fn validate_budgets(budgets: &[Budget]) -> FintrackResult<()> {
    for budget in budgets {
        budget
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
    }
    Ok(())
}

fn ensure_unique<'a>(
    entity_type: &str,
    ids: impl Iterator<Item = &'a str>,
) -> FintrackResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FintrackError::Validation(format!(
                "{} id {} appears more than once",
                entity_type, id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "accounts": [
            {"id": "a1", "name": "Checking", "type": "CHECKING", "currency": "USD", "balance": 500},
            {"id": "a2", "name": "Visa", "type": "CREDIT", "currency": "USD", "balance": -120}
        ],
        "categories": [
            {"id": "salary", "name": "Salary", "type": "INCOME"},
            {"id": "food", "name": "Food", "type": "EXPENSE"}
        ],
        "transactions": [
            {"id": "t1", "accountId": "a1", "accountName": "Checking", "categoryId": "salary",
             "categoryName": "Salary", "amount": 1000, "currency": "USD", "date": "2024-01-01", "type": "INCOME"},
            {"id": "t2", "accountId": "a1", "accountName": "Checking", "categoryId": "food",
             "categoryName": "Food", "amount": 400, "currency": "USD", "date": "2024-01-03", "type": "EXPENSE"}
        ],
        "budgets": [
            {"name": "January", "month": 1, "year": 2024, "totalAmount": 500, "currency": "USD",
             "items": [{"categoryId": "food", "amount": 200, "spent": 250}]}
        ]
    }"#;

    #[test]
    fn test_decode_and_validate() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(snapshot.transactions.len(), 2);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.accounts.is_empty());
        assert!(snapshot.budgets.is_empty());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_unknown_enum_value_is_a_snapshot_error() {
        let json = r#"{"transactions": [{"id": "t1", "accountId": "a1", "amount": 1,
            "currency": "USD", "date": "2024-01-01", "type": "REFUND"}]}"#;
        let err = Snapshot::from_json(json).unwrap_err();
        assert!(matches!(err, FintrackError::Snapshot(_)));
    }

    #[test]
    fn test_category_type_mismatch_is_rejected() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        snapshot.transactions[1].transaction_type = TransactionType::Income;
        let err = snapshot.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("category food"));
    }

    #[test]
    fn test_duplicate_transaction_ids_are_rejected() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let dup = snapshot.transactions[0].clone();
        snapshot.transactions.push(dup);
        assert!(snapshot.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_income_category_in_budget_is_rejected() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        snapshot.budgets[0].items[0].category_id = "salary".into();
        assert!(snapshot.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_dangling_references_are_rejected() {
        let mut unknown_account = Snapshot::from_json(SNAPSHOT).unwrap();
        unknown_account.transactions[0].account_id = "a9".into();
        let err = unknown_account.validate().unwrap_err();
        assert!(err.to_string().contains("unknown account a9"));

        let mut unknown_category = Snapshot::from_json(SNAPSHOT).unwrap();
        unknown_category.transactions[1].category_id = Some("travel".into());
        let err = unknown_category.validate().unwrap_err();
        assert!(err.to_string().contains("unknown category travel"));

        let mut unknown_item = Snapshot::from_json(SNAPSHOT).unwrap();
        unknown_item.budgets[0].items[0].category_id = "travel".into();
        assert!(unknown_item.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_references_are_unchecked_without_the_collection() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        snapshot.accounts.clear();
        snapshot.categories.clear();
        snapshot.transactions[0].account_id = "a9".into();
        snapshot.transactions[1].category_id = Some("travel".into());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = Snapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.budgets.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, FintrackError::Io(_)));
    }
}
