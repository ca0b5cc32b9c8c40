//! Storage layer for SpendPace
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The reports never touch storage: callers load a [`Snapshot`]
//! for one owner and pass that along.

pub mod budgets;
pub mod categories;
pub mod collection;
pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod init;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::SavingsGoalRepository;
pub use init::initialize_storage;

use crate::config::paths::SpendPacePaths;
use crate::error::SpendPaceResult;
use crate::models::OwnerId;
use crate::snapshot::Snapshot;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendPacePaths,
    pub expenses: ExpenseRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    pub goals: SavingsGoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendPacePaths) -> SpendPaceResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: SavingsGoalRepository::new(paths.savings_goals_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendPacePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> SpendPaceResult<()> {
        self.expenses.load()?;
        self.categories.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> SpendPaceResult<()> {
        self.expenses.save()?;
        self.categories.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Everything one owner has, as currently loaded
    pub fn snapshot(&self, owner: &OwnerId) -> SpendPaceResult<Snapshot> {
        let snapshot = Snapshot::new(
            self.expenses.for_owner(owner)?,
            self.categories.for_owner(owner)?,
            self.budgets.get(owner)?,
            self.goals.for_owner(owner)?,
        );

        tracing::debug!(
            owner = %owner,
            expenses = snapshot.expenses.len(),
            categories = snapshot.categories.len(),
            goals = snapshot.savings_goals.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
