//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and reports for terminal
//! display, including tables, bars, and color mapping.

pub mod category;
pub mod colors;
pub mod expense;
pub mod goal;
pub mod report;

pub use category::format_category_list;
pub use expense::{format_expense_list, format_expense_row};
pub use goal::{format_goal, format_goal_list};
