//! Reports module for SpendPace
//!
//! Pure analytics over a snapshot of records and an explicit "now":
//! spending aggregation, budget pacing, per-category utilization, savings
//! goal progress, expense sorting and filtering, and the dashboard that
//! combines them.

pub mod category_budgets;
pub mod dashboard;
pub mod expense_list;
pub mod pacing;
pub mod savings;
pub mod spending;

pub use category_budgets::{evaluate_category_budgets, CategoryBudgetStatus, UtilizationBand};
pub use dashboard::DashboardReport;
pub use expense_list::{
    recent_expenses, sort_expenses, ExpenseFilter, SortConfig, SortDirection, SortKey,
};
pub use pacing::BudgetPacing;
pub use savings::{evaluate_goals, days_until, DeadlineStatus, GoalProgress, SavingsSummary};
pub use spending::{
    category_breakdown, monthly_trend, total_spent, uncategorized_total, CategorySpending,
    MonthlyTotal, SpendingReport,
};
