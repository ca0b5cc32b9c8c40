//! Expense repository
//!
//! Manages loading and saving expenses to expenses.json

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::{Expense, ExpenseId, OwnerId};

use super::collection::{find_by_id_prefix, Collection};

fn expense_id(expense: &Expense) -> Option<&str> {
    expense.id.as_ref().map(|id| id.as_str())
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    collection: Collection<Expense>,
}

impl ExpenseRepository {
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

    /// All expenses of an owner, in insertion order
    pub fn for_owner(&self, owner: &OwnerId) -> SpendPaceResult<Vec<Expense>> {
        self.collection.for_owner(owner)
    }

    /// Validate and insert a new expense
    ///
    /// Assigns an id and creation time when the expense has none.
    pub fn add(&self, mut expense: Expense, now: NaiveDateTime) -> SpendPaceResult<Expense> {
        expense.validate()?;

        if expense.id.is_none() {
            expense.id = Some(ExpenseId::generate());
        }
        if expense.created_at.is_none() {
            expense.created_at = Some(now);
        }

        tracing::info!(
            id = %expense.id.as_ref().map(|id| id.as_str()).unwrap_or_default(),
            amount = %expense.amount,
            "expense added"
        );
        self.collection.push(expense.clone())?;
        Ok(expense)
    }

    /// Find an owner's expense by id or unique id prefix
    pub fn find(&self, owner: &OwnerId, id: &str) -> SpendPaceResult<Expense> {
        let records = self.collection.read()?;
        find_by_id_prefix(records.as_slice(), owner, id, expense_id)?
            .map(|index| records[index].clone())
            .ok_or_else(|| SpendPaceError::expense_not_found(id))
    }

    /// Validate and replace a stored expense
    ///
    /// Matched by owner and full id. A missing creation time is carried over
    /// from the stored record.
    pub fn update(&self, mut expense: Expense) -> SpendPaceResult<Expense> {
        expense.validate()?;
        let id = expense
            .id
            .clone()
            .ok_or_else(|| SpendPaceError::Validation("Expense has no id".into()))?;

        let mut records = self.collection.write()?;
        let stored = records
            .iter_mut()
            .find(|e| e.owner == expense.owner && e.id.as_ref() == Some(&id))
            .ok_or_else(|| SpendPaceError::expense_not_found(id.as_str()))?;

        if expense.created_at.is_none() {
            expense.created_at = stored.created_at;
        }
        *stored = expense.clone();

        tracing::info!(id = %id, amount = %expense.amount, "expense updated");
        Ok(expense)
    }

    /// Remove an owner's expense by id or unique id prefix
    pub fn delete(&self, owner: &OwnerId, id: &str) -> SpendPaceResult<Expense> {
        let mut records = self.collection.write()?;
        let index = find_by_id_prefix(records.as_slice(), owner, id, expense_id)?
            .ok_or_else(|| SpendPaceError::expense_not_found(id))?;

        let removed = records.remove(index);
        tracing::info!(id = %id, "expense deleted");
        Ok(removed)
    }

    pub fn count(&self) -> SpendPaceResult<usize> {
        self.collection.len()
    }
}
