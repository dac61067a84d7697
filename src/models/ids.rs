//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers come from the remote API and are opaque to the engine, so they
//! wrap a `String` rather than a parsed UUID. The newtypes still prevent
//! mixing up IDs from different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from its API representation
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(AccountId);
define_id!(TransactionId);
define_id!(CategoryId);
define_id!(BudgetId);
define_id!(BudgetItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = AccountId::new("acc-1");
        assert_eq!(format!("{}", id), "acc-1");
        assert_eq!(id.as_str(), "acc-1");
    }

    #[test]
    fn test_id_equality() {
        let id1 = CategoryId::from("groceries");
        let id2 = CategoryId::new(String::from("groceries"));
        assert_eq!(id1, id2);
        assert_ne!(id1, CategoryId::from("rent"));
    }

    #[test]
    fn test_id_serialization_is_a_plain_string() {
        let id = TransactionId::new("550e8400-e29b-41d4-a716-446655440000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
