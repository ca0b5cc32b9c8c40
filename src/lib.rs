//! SpendPace - expense tracking with budget pacing
//!
//! This library computes the figures behind a personal spending dashboard:
//! totals, per-category breakdowns, monthly trends, how fast the monthly
//! budget is being used, per-category limit utilization, and savings goal
//! progress. The analytics are pure functions over an in-memory
//! [`Snapshot`](snapshot::Snapshot) and an explicit "now"; they never read
//! the clock or touch storage.
//!
//! # Architecture
//!
//! - `models`: Core records (expenses, categories, budgets, savings goals)
//!   plus money and calendar-month types
//! - `snapshot`: One owner's records bundled for the reports
//! - `reports`: The analytics and the dashboard that combines them
//! - `config`: Path resolution and user settings
//! - `storage`: JSON file storage layer
//! - `display`, `export`: Terminal formatting and JSON/YAML output
//! - `cli`: Command handlers used by the `spendpace` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendpace::config::Settings;
//! use spendpace::reports::DashboardReport;
//!
//! let report = DashboardReport::generate(&snapshot, now, &Settings::default());
//! println!("{}", report.format_terminal("₹"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod snapshot;
pub mod storage;

pub use error::{SpendPaceError, SpendPaceResult};
pub use snapshot::Snapshot;
