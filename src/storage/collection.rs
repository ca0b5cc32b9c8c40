//! In-memory collection backed by one JSON file
//!
//! Every record type is stored as a plain JSON array in file order. Order
//! is preserved on load and save since the reports depend on it.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::{Budget, Category, Expense, OwnerId, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

/// A stored record that belongs to one owner
pub trait OwnedRecord: Clone + Serialize + DeserializeOwned {
    fn owner(&self) -> &OwnerId;
}

impl OwnedRecord for Expense {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

impl OwnedRecord for Category {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

impl OwnedRecord for Budget {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

impl OwnedRecord for SavingsGoal {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

/// Records of one type, all owners mixed
pub struct Collection<T> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T: OwnedRecord> Collection<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub(crate) fn read(&self) -> SpendPaceResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|e| SpendPaceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub(crate) fn write(&self) -> SpendPaceResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|e| SpendPaceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Replace the in-memory records with the file's contents
    pub fn load(&self) -> SpendPaceResult<()> {
        let loaded: Vec<T> = read_json(&self.path)?;
        tracing::debug!(path = %self.path.display(), count = loaded.len(), "loaded collection");
        *self.write()? = loaded;
        Ok(())
    }

    pub fn save(&self) -> SpendPaceResult<()> {
        let records = self.read()?;
        write_json_atomic(&self.path, &*records)
    }

    /// Records belonging to `owner`, in stored order
    pub fn for_owner(&self, owner: &OwnerId) -> SpendPaceResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.owner() == owner)
            .cloned()
            .collect())
    }

    pub fn push(&self, record: T) -> SpendPaceResult<()> {
        self.write()?.push(record);
        Ok(())
    }

    pub fn len(&self) -> SpendPaceResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> SpendPaceResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

/// Index of the single record of `owner` whose id starts with `prefix`
///
/// Lists print shortened ids, so a unique prefix is accepted wherever an id
/// is. Returns `Ok(None)` when nothing matches.
pub(crate) fn find_by_id_prefix<T, F>(
    records: &[T],
    owner: &OwnerId,
    prefix: &str,
    id_of: F,
) -> SpendPaceResult<Option<usize>>
where
    T: OwnedRecord,
    F: Fn(&T) -> Option<&str>,
{
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Ok(None);
    }

    let matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.owner() == owner)
        .filter(|(_, r)| id_of(r).map_or(false, |id| id.starts_with(prefix)))
        .map(|(i, _)| i)
        .collect();

    // An exact id always wins over longer ids sharing it as a prefix
    if let Some(&exact) = matches.iter().find(|&&i| id_of(&records[i]) == Some(prefix)) {
        return Ok(Some(exact));
    }

    match matches.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(SpendPaceError::Validation(format!(
            "Id prefix '{}' is ambiguous ({} matches)",
            prefix,
            matches.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(owner: &str, id: &str) -> Expense {
        Expense::new(
            OwnerId::from(owner),
            Money::from_units(1),
            "x",
            CategoryId::from("c"),
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
        .with_id(id)
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let collection = Collection::new(path.clone());
        for id in ["c", "a", "b"] {
            collection.push(expense("u1", id)).unwrap();
        }
        collection.save().unwrap();

        let reloaded: Collection<Expense> = Collection::new(path);
        reloaded.load().unwrap();
        let ids: Vec<String> = reloaded
            .for_owner(&OwnerId::from("u1"))
            .unwrap()
            .iter()
            .map(|e| e.id.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_for_owner_filters() {
        let temp_dir = TempDir::new().unwrap();
        let collection = Collection::new(temp_dir.path().join("e.json"));
        collection.push(expense("u1", "a")).unwrap();
        collection.push(expense("u2", "b")).unwrap();

        assert_eq!(collection.len().unwrap(), 2);
        assert_eq!(collection.for_owner(&OwnerId::from("u2")).unwrap().len(), 1);
        assert!(collection.for_owner(&OwnerId::from("u3")).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_prefix() {
        let records = vec![
            expense("u1", "abc111"),
            expense("u1", "abc222"),
            expense("u2", "xyz999"),
            expense("u1", "abc"),
        ];
        let owner = OwnerId::from("u1");
        fn id_of(e: &Expense) -> Option<&str> {
            e.id.as_ref().map(|id| id.as_str())
        }

        assert_eq!(find_by_id_prefix(&records[..], &owner, "abc1", id_of).unwrap(), Some(0));
        assert_eq!(find_by_id_prefix(&records[..], &owner, "abc", id_of).unwrap(), Some(3));
        assert!(find_by_id_prefix(&records[..2], &owner, "abc", id_of).is_err());
        // Other owners' records are invisible
        assert_eq!(find_by_id_prefix(&records[..], &owner, "xyz", id_of).unwrap(), None);
        assert_eq!(find_by_id_prefix(&records[..], &owner, " ", id_of).unwrap(), None);
    }
}
