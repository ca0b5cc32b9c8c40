//! Budget repository
//!
//! Holds at most one budget document per owner.

use std::path::PathBuf;

use crate::error::SpendPaceResult;
use crate::models::{Budget, OwnerId};

use super::collection::Collection;

/// Repository for budget persistence
pub struct BudgetRepository {
    collection: Collection<Budget>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: Collection::new(path),
        }
    }

    pub fn load(&self) -> SpendPaceResult<()> {
        self.collection.load()
    }

    pub fn save(&self) -> SpendPaceResult<()> {
        self.collection.save()
    }

    /// The owner's budget, if one was ever saved
    pub fn get(&self, owner: &OwnerId) -> SpendPaceResult<Option<Budget>> {
        Ok(self.collection.for_owner(owner)?.into_iter().next())
    }

    /// The owner's budget, or an empty one
    pub fn get_or_default(&self, owner: &OwnerId) -> SpendPaceResult<Budget> {
        Ok(self.get(owner)?.unwrap_or_else(|| Budget::new(owner.clone())))
    }

    /// Insert or replace the owner's budget
    pub fn upsert(&self, budget: Budget) -> SpendPaceResult<()> {
        budget.validate()?;

        let mut records = self.collection.write()?;
        tracing::info!(
            owner = %budget.owner,
            monthly = ?budget.monthly_limit.map(|m| m.to_string()),
            categories = budget.category_limits.len(),
            "budget saved"
        );

        match records.iter_mut().find(|b| b.owner == budget.owner) {
            Some(existing) => *existing = budget,
            None => records.push(budget),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use tempfile::TempDir;

    #[test]
    fn test_upsert_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        let owner = OwnerId::from("u1");

        assert!(repo.get(&owner).unwrap().is_none());
        assert_eq!(repo.get_or_default(&owner).unwrap(), Budget::new(owner.clone()));

        let mut budget = Budget::new(owner.clone());
        budget.monthly_limit = Some(Money::from_units(800));
        repo.upsert(budget.clone()).unwrap();

        budget.set_category_limit(CategoryId::from("food"), Money::from_units(200));
        repo.upsert(budget.clone()).unwrap();

        assert_eq!(repo.get(&owner).unwrap(), Some(budget));
        assert_eq!(repo.collection.len().unwrap(), 1);
    }

    #[test]
    fn test_negative_limits_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        let mut budget = Budget::new(OwnerId::from("u1"));
        budget.monthly_limit = Some(Money::from_units(-1));
        assert!(repo.upsert(budget).unwrap_err().is_validation());
    }
}
