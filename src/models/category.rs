//! Category model
//!
//! A category is exclusively an income or an expense category. Color and icon
//! are display hints and are passed through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Whether a category classifies income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    Income,
    Expense,
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub category_type: CategoryType,

    /// Display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Display icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    /// Create a category without display hints
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        category_type: CategoryType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_type,
            color: None,
            icon: None,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName(self.id.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category_type)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName(CategoryId),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(id) => write!(f, "Category {} has an empty name", id),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let mut category = Category::new("c1", "Groceries", CategoryType::Expense);
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::EmptyName(_))
        ));
    }

    #[test]
    fn test_display_hints_pass_through() {
        let json = r##"{"id":"c1","name":"Rent","type":"EXPENSE","color":"#ff0000","icon":"home"}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.color.as_deref(), Some("#ff0000"));
        assert_eq!(category.icon.as_deref(), Some("home"));

        let out = serde_json::to_string(&category).unwrap();
        assert!(out.contains("\"color\":\"#ff0000\""));
    }

    #[test]
    fn test_transfer_is_not_a_category_type() {
        let json = r#"{"id":"c1","name":"Move","type":"TRANSFER"}"#;
        assert!(serde_json::from_str::<Category>(json).is_err());
    }
}
