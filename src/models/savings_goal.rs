//! Savings goal model
//!
//! A named target amount with an optional calendar deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{OwnerId, SavingsGoalId};
use super::money::Money;
use super::timestamp;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// Store identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SavingsGoalId>,

    /// Owner of the record
    #[serde(rename = "userId")]
    pub owner: OwnerId,

    /// Goal name
    #[serde(rename = "goalName")]
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far; may exceed the target
    #[serde(default)]
    pub current_amount: Money,

    /// Optional deadline (date only)
    #[serde(
        default,
        with = "timestamp::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<NaiveDate>,
}

impl SavingsGoal {
    /// Create a new, not yet persisted goal
    pub fn new(owner: OwnerId, name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: None,
            owner,
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
        }
    }

    /// Builder-style current amount
    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Builder-style deadline
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate the goal before it is written
    ///
    /// The evaluator itself accepts invalid goals; this check belongs to
    /// whoever persists them.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.current_amount, self.target_amount)
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeCurrent,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than zero"),
            Self::NegativeCurrent => write!(f, "Current amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
