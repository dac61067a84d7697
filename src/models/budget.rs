//! Budget model
//!
//! A budget covers one calendar month and holds one allocation item per
//! expense category.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::{BudgetId, BudgetItemId, CategoryId};
use super::money::{is_currency_code, Money};

/// Allocation for one expense category inside a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    /// Item identifier, absent for items not yet persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BudgetItemId>,

    /// The expense category this allocation is for
    pub category_id: CategoryId,

    /// Category name, for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Category color, passed through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,

    /// Allocated amount; zero or negative is a degenerate allocation
    pub amount: Money,

    /// Amount spent so far, as supplied by the API
    pub spent: Money,
}

impl BudgetItem {
    /// Create an item with an allocation and a supplied spent amount
    pub fn new(category_id: impl Into<CategoryId>, amount: Money, spent: Money) -> Self {
        Self {
            id: None,
            category_id: category_id.into(),
            category_name: None,
            category_color: None,
            amount,
            spent,
        }
    }

    /// Set the category display name
    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    /// Name to show for this item, falling back to the category id
    pub fn display_name(&self) -> &str {
        self.category_name
            .as_deref()
            .unwrap_or_else(|| self.category_id.as_str())
    }
}

/// A monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget identifier, absent for budgets not yet persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BudgetId>,

    /// Budget name (e.g., "Monthly Budget")
    pub name: String,

    /// Month number, 1 through 12
    pub month: u32,

    /// Calendar year
    pub year: i32,

    /// Headline total entered by the user
    pub total_amount: Money,

    /// Three-letter currency code
    pub currency: String,

    /// Per-category allocations, in display order
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl Budget {
    /// Create an empty budget for a month
    pub fn new(name: impl Into<String>, year: i32, month: u32, total_amount: Money) -> Self {
        Self {
            id: None,
            name: name.into(),
            month,
            year,
            total_amount,
            currency: "USD".to_string(),
            items: Vec::new(),
        }
    }

    /// Add an allocation item
    pub fn with_item(mut self, item: BudgetItem) -> Self {
        self.items.push(item);
        self
    }

    /// First day of the budget's month, if the month is valid
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Long month and year label (e.g., "January 2024")
    pub fn period_label(&self) -> String {
        match self.first_day() {
            Some(day) => day.format("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }

    /// Check if a date falls within the budget's month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Check whether this budget matches an id or a name
    pub fn matches(&self, key: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.as_str() == key) || self.name == key
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(BudgetValidationError::InvalidMonth {
                budget: self.name.clone(),
                month: self.month,
            });
        }

        if !is_currency_code(&self.currency) {
            return Err(BudgetValidationError::InvalidCurrency {
                budget: self.name.clone(),
                currency: self.currency.clone(),
            });
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(&item.category_id) {
                return Err(BudgetValidationError::DuplicateCategory {
                    budget: self.name.clone(),
                    category: item.category_id.clone(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.period_label())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    InvalidMonth { budget: String, month: u32 },
    InvalidCurrency { budget: String, currency: String },
    DuplicateCategory { budget: String, category: CategoryId },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth { budget, month } => {
                write!(f, "Budget '{}' has invalid month {} (expected 1-12)", budget, month)
            }
            Self::InvalidCurrency { budget, currency } => write!(
                f,
                "Budget '{}' has an invalid currency code '{}'",
                budget, currency
            ),
            Self::DuplicateCategory { budget, category } => write!(
                f,
                "Budget '{}' allocates category {} more than once",
                budget, category
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
