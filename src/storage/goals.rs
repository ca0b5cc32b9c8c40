//! Savings goal repository

use std::path::PathBuf;

use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::{OwnerId, SavingsGoal, SavingsGoalId};

use super::collection::{find_by_id_prefix, Collection};

fn goal_id(goal: &SavingsGoal) -> Option<&str> {
    goal.id.as_ref().map(|id| id.as_str())
}

/// Repository for savings goal persistence
pub struct SavingsGoalRepository {
    collection: Collection<SavingsGoal>,
}

impl SavingsGoalRepository {
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

    pub fn for_owner(&self, owner: &OwnerId) -> SpendPaceResult<Vec<SavingsGoal>> {
        self.collection.for_owner(owner)
    }

    /// Validate and insert a goal, assigning an id if it has none
    pub fn add(&self, mut goal: SavingsGoal) -> SpendPaceResult<SavingsGoal> {
        goal.validate()?;

        if goal.id.is_none() {
            goal.id = Some(SavingsGoalId::generate());
        }

        tracing::info!(name = %goal.name, target = %goal.target_amount, "savings goal added");
        self.collection.push(goal.clone())?;
        Ok(goal)
    }

    /// Find an owner's goal by id or unique id prefix
    pub fn find(&self, owner: &OwnerId, id: &str) -> SpendPaceResult<SavingsGoal> {
        let records = self.collection.read()?;
        find_by_id_prefix(records.as_slice(), owner, id, goal_id)?
            .map(|index| records[index].clone())
            .ok_or_else(|| SpendPaceError::goal_not_found(id))
    }

    /// Validate and replace a stored goal, matched by owner and full id
    pub fn update(&self, goal: SavingsGoal) -> SpendPaceResult<SavingsGoal> {
        goal.validate()?;
        let id = goal
            .id
            .clone()
            .ok_or_else(|| SpendPaceError::Validation("Savings goal has no id".into()))?;

        let mut records = self.collection.write()?;
        let stored = records
            .iter_mut()
            .find(|g| g.owner == goal.owner && g.id.as_ref() == Some(&id))
            .ok_or_else(|| SpendPaceError::goal_not_found(id.as_str()))?;
        *stored = goal.clone();

        tracing::info!(
            id = %id,
            current = %goal.current_amount,
            target = %goal.target_amount,
            "savings goal updated"
        );
        Ok(goal)
    }

    /// Remove an owner's goal by id or unique id prefix
    pub fn delete(&self, owner: &OwnerId, id: &str) -> SpendPaceResult<SavingsGoal> {
        let mut records = self.collection.write()?;
        let index = find_by_id_prefix(records.as_slice(), owner, id, goal_id)?
            .ok_or_else(|| SpendPaceError::goal_not_found(id))?;

        let removed = records.remove(index);
        tracing::info!(id = %id, name = %removed.name, "savings goal deleted");
        Ok(removed)
    }
}
