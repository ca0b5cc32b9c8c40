//! Custom error types for SpendPace
//!
//! The analytics core never fails: degenerate numbers fall back to zero.
//! These errors belong to the layers around it (configuration, storage,
//! validation at the write boundary, and exports).

use thiserror::Error;

use crate::models::budget::BudgetValidationError;
use crate::models::category::CategoryValidationError;
use crate::models::expense::ExpenseValidationError;
use crate::models::savings_goal::GoalValidationError;

/// The main error type for SpendPace operations
#[derive(Error, Debug)]
pub enum SpendPaceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for records about to be written
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendPaceError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for savings goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendPaceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendPaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SpendPaceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SpendPaceError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<ExpenseValidationError> for SpendPaceError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryValidationError> for SpendPaceError {
    fn from(err: CategoryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BudgetValidationError> for SpendPaceError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<GoalValidationError> for SpendPaceError {
    fn from(err: GoalValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for SpendPace operations
pub type SpendPaceResult<T> = Result<T, SpendPaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendPaceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SpendPaceError::goal_not_found("emergency-fund");
        assert_eq!(err.to_string(), "Savings goal not found: emergency-fund");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendPaceError = io_err.into();
        assert!(matches!(err, SpendPaceError::Io(_)));
    }

    #[test]
    fn test_from_validation_error() {
        let err: SpendPaceError = ExpenseValidationError::NonPositiveAmount.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Please enter a valid amount");

        let err: SpendPaceError = BudgetValidationError::NegativeMonthly.into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpendPaceError = json_err.into();
        assert!(matches!(err, SpendPaceError::Json(_)));
    }
}
