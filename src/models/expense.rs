//! Expense model
//!
//! An expense is a single dated outflow tagged with a category reference.
//! The reference is not a foreign key: it may point at a deleted category.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, OwnerId};
use super::money::Money;
use super::timestamp;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Store identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Category reference
    pub category: CategoryId,

    /// When the expense happened
    #[serde(with = "timestamp::instant")]
    pub date: NaiveDateTime,

    /// Owner of the record
    #[serde(rename = "userId")]
    pub owner: OwnerId,

    /// When the record was created
    #[serde(
        default,
        with = "timestamp::option_instant",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

impl Expense {
    /// Create a new, not yet persisted expense
    pub fn new(
        owner: OwnerId,
        amount: Money,
        description: impl Into<String>,
        category: CategoryId,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            amount,
            description: description.into(),
            category,
            date,
            owner,
            created_at: None,
        }
    }

    /// Builder-style identifier assignment
    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Validate the expense before it is written
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Please enter a valid amount"),
            Self::EmptyDescription => write!(f, "Please enter a description"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            OwnerId::from("user-1"),
            Money::from_cents(1250),
            "Lunch",
            CategoryId::from("food"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut zero = sample();
        zero.amount = Money::zero();
        assert_eq!(zero.validate(), Err(ExpenseValidationError::NonPositiveAmount));

        let mut blank = sample();
        blank.description = "   ".into();
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyDescription));
    }

    #[test]
    fn test_deserialize_store_document() {
        let json = r#"{
            "id": "e1",
            "amount": 4999,
            "description": "Train pass",
            "category": "transport",
            "date": "2025-03-01",
            "userId": "user-1",
            "createdAt": "2025-03-01T08:15:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, Some(ExpenseId::from("e1")));
        assert_eq!(expense.amount.cents(), 4999);
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(expense.created_at.is_some());
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{
            "amount": 100,
            "description": "Gum",
            "category": "other",
            "date": "2025-03-01T10:00:00",
            "userId": "user-1"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.id.is_none());
        assert!(expense.created_at.is_none());

        let out = serde_json::to_value(&expense).unwrap();
        assert!(out.get("id").is_none());
        assert_eq!(out["userId"], "user-1");
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "2025-03-14 Lunch (12.50)");
    }
}
