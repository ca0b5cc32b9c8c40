//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::SpendPacePaths;
use crate::config::Settings;
use crate::error::SpendPaceResult;
use crate::models::{DefaultCategory, OwnerId};

use super::Storage;

/// Initialize storage for an owner
///
/// Creates the directories, writes settings if none exist, and gives the
/// owner the default categories if they have none yet. Returns the number of
/// categories created.
pub fn initialize_storage(paths: &SpendPacePaths, settings: &Settings) -> SpendPaceResult<usize> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    let storage = Storage::new(paths.clone())?;
    storage.categories.load()?;
    let created = create_default_categories(&storage, &settings.owner_id)?;
    if created > 0 {
        storage.categories.save()?;
    }

    Ok(created)
}

/// Give an owner without categories the default set
fn create_default_categories(storage: &Storage, owner: &OwnerId) -> SpendPaceResult<usize> {
    if !storage.categories.for_owner(owner)?.is_empty() {
        return Ok(0);
    }

    for default in DefaultCategory::all() {
        storage.categories.add(default.to_category(owner))?;
    }

    tracing::info!(owner = %owner, count = DefaultCategory::all().len(), "default categories created");
    Ok(DefaultCategory::all().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPacePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        let created = initialize_storage(&paths, &Settings::default()).unwrap();

        assert_eq!(created, 7);
        assert!(paths.is_initialized());
        assert!(paths.categories_file().exists());
    }

    #[test]
    fn test_default_categories_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPacePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths, &Settings::default()).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let categories: Vec<Category> = serde_json::from_str(&content).unwrap();

        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Food", "Transportation", "Entertainment", "Education", "Shopping", "Bills", "Other"]
        );
        assert!(categories.iter().all(|c| c.owner == OwnerId::from("default")));
    }

    #[test]
    fn test_doesnt_duplicate_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPacePaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, &Settings::default()).unwrap();
        assert_eq!(initialize_storage(&paths, &Settings::default()).unwrap(), 0);

        // A second owner gets their own set
        let mut settings = Settings::default();
        settings.owner_id = OwnerId::from("bob");
        assert_eq!(initialize_storage(&paths, &settings).unwrap(), 7);

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let categories: Vec<Category> = serde_json::from_str(&content).unwrap();
        assert_eq!(categories.len(), 14);
    }
}
