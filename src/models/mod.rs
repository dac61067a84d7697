//! Core data models for fintrack
//!
//! This module contains the snapshot entities the report engines consume:
//! accounts, categories, transactions and monthly budgets.

pub mod account;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod snapshot;
pub mod transaction;

pub use account::{Account, AccountType};
pub use budget::{Budget, BudgetItem};
pub use category::{Category, CategoryType};
pub use ids::{AccountId, BudgetId, BudgetItemId, CategoryId, TransactionId};
pub use money::Money;
pub use snapshot::Snapshot;
pub use transaction::{Transaction, TransactionType};
