//! Core data models for SpendPace
//!
//! Plain record shapes for expenses, categories, budgets and savings goals,
//! plus the money, identifier and calendar types they are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod savings_goal;
pub mod timestamp;

pub use budget::{Budget, DEFAULT_MONTHLY_LIMIT};
pub use category::{Category, DefaultCategory, UNCATEGORIZED};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, OwnerId, SavingsGoalId};
pub use money::Money;
pub use period::{DayCounts, MonthPeriod, MonthWindow};
pub use savings_goal::SavingsGoal;
