//! Budget model
//!
//! One budget document per owner: a monthly ceiling plus optional
//! per-category ceilings. An absent ceiling is kept distinct from a stored
//! zero throughout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::{CategoryId, OwnerId};
use super::money::Money;

/// Monthly ceiling used when none has been set
pub const DEFAULT_MONTHLY_LIMIT: Money = Money::from_units(1000);

/// An owner's budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Owner of the budget
    #[serde(rename = "userId")]
    pub owner: OwnerId,

    /// Monthly ceiling, if one was set
    #[serde(
        default,
        rename = "monthlyBudget",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_limit: Option<Money>,

    /// Per-category ceilings keyed by category id
    #[serde(default, rename = "categories")]
    pub category_limits: BTreeMap<CategoryId, Money>,
}

impl Budget {
    /// Create an empty budget for an owner
    pub fn new(owner: OwnerId) -> Self {
        Self {
            owner,
            monthly_limit: None,
            category_limits: BTreeMap::new(),
        }
    }

    /// The monthly ceiling to evaluate against
    ///
    /// An unset or zero ceiling falls back to `fallback`.
    pub fn effective_monthly_limit(&self, fallback: Money) -> Money {
        match self.monthly_limit {
            Some(limit) if !limit.is_zero() => limit,
            _ => fallback,
        }
    }

    /// The stored ceiling for a category, if any
    pub fn category_limit(&self, category: &CategoryId) -> Option<Money> {
        self.category_limits.get(category).copied()
    }

    /// Set or replace a category ceiling
    pub fn set_category_limit(&mut self, category: CategoryId, limit: Money) {
        self.category_limits.insert(category, limit);
    }

    /// Remove a category ceiling
    pub fn clear_category_limit(&mut self, category: &CategoryId) -> Option<Money> {
        self.category_limits.remove(category)
    }

    /// Ceilings that take part in evaluation (strictly positive)
    pub fn active_category_limits(&self) -> impl Iterator<Item = (&CategoryId, Money)> {
        self.category_limits
            .iter()
            .filter(|(_, limit)| limit.is_positive())
            .map(|(id, limit)| (id, *limit))
    }

    /// Validate the budget before it is written
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.monthly_limit.map_or(false, |limit| limit.is_negative()) {
            return Err(BudgetValidationError::NegativeMonthly);
        }

        if let Some((id, _)) = self
            .category_limits
            .iter()
            .find(|(_, limit)| limit.is_negative())
        {
            return Err(BudgetValidationError::NegativeCategory(id.clone()));
        }

        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeMonthly,
    NegativeCategory(CategoryId),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMonthly => write!(f, "Monthly budget cannot be negative"),
            Self::NegativeCategory(id) => {
                write!(f, "Budget for category {} cannot be negative", id)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// Monthly ceiling for an optional budget
pub fn monthly_limit_or(budget: Option<&Budget>, fallback: Money) -> Money {
    budget
        .map(|b| b.effective_monthly_limit(fallback))
        .unwrap_or(fallback)
}
