//! Category repository
//!
//! Categories are per owner; names are unique per owner, ignoring case.

use std::path::PathBuf;

use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::{Category, OwnerId};

use super::collection::{find_by_id_prefix, Collection};

fn category_id(category: &Category) -> Option<&str> {
    Some(category.id.as_str())
}

/// Repository for category persistence
pub struct CategoryRepository {
    collection: Collection<Category>,
}

impl CategoryRepository {
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

    /// An owner's categories in creation order
    pub fn for_owner(&self, owner: &OwnerId) -> SpendPaceResult<Vec<Category>> {
        self.collection.for_owner(owner)
    }

    /// Get a category by exact name (case-insensitive)
    pub fn get_by_name(&self, owner: &OwnerId, name: &str) -> SpendPaceResult<Option<Category>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .collection
            .read()?
            .iter()
            .find(|c| &c.owner == owner && c.name.to_lowercase() == wanted)
            .cloned())
    }

    /// Resolve a category by name, falling back to id or id prefix
    pub fn resolve(&self, owner: &OwnerId, name_or_id: &str) -> SpendPaceResult<Category> {
        if let Some(category) = self.get_by_name(owner, name_or_id)? {
            return Ok(category);
        }

        let records = self.collection.read()?;
        find_by_id_prefix(records.as_slice(), owner, name_or_id, category_id)?
            .map(|index| records[index].clone())
            .ok_or_else(|| SpendPaceError::category_not_found(name_or_id))
    }

    /// Validate and insert a category
    pub fn add(&self, category: Category) -> SpendPaceResult<Category> {
        category.validate()?;

        if self.get_by_name(&category.owner, &category.name)?.is_some() {
            return Err(SpendPaceError::Validation(format!(
                "Category '{}' already exists",
                category.name.trim()
            )));
        }

        tracing::info!(id = %category.id, name = %category.name, "category added");
        self.collection.push(category.clone())?;
        Ok(category)
    }

    /// Validate and replace a stored category
    ///
    /// The new name may not collide with another of the owner's categories.
    pub fn update(&self, category: Category) -> SpendPaceResult<Category> {
        category.validate()?;

        if let Some(other) = self.get_by_name(&category.owner, &category.name)? {
            if other.id != category.id {
                return Err(SpendPaceError::Validation(format!(
                    "Category '{}' already exists",
                    category.name.trim()
                )));
            }
        }

        let mut records = self.collection.write()?;
        let stored = records
            .iter_mut()
            .find(|c| c.owner == category.owner && c.id == category.id)
            .ok_or_else(|| SpendPaceError::category_not_found(category.id.as_str()))?;
        *stored = category.clone();

        tracing::info!(id = %category.id, name = %category.name, "category updated");
        Ok(category)
    }

    /// Remove a category by name, id or unique id prefix
    ///
    /// Expenses keep pointing at the removed id and become uncategorized.
    pub fn delete(&self, owner: &OwnerId, name_or_id: &str) -> SpendPaceResult<Category> {
        let target = self.resolve(owner, name_or_id)?;

        let mut records = self.collection.write()?;
        let index = records
            .iter()
            .position(|c| &c.owner == owner && c.id == target.id)
            .ok_or_else(|| SpendPaceError::category_not_found(name_or_id))?;

        let removed = records.remove(index);
        tracing::info!(id = %removed.id, name = %removed.name, "category deleted");
        Ok(removed)
    }
}
