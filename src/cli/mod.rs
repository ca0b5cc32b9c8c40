//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with storage and the reports.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod goal;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::handle_dashboard;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::timestamp::{parse_date, parse_instant};
use crate::models::{Money, OwnerId};

/// What every command runs against
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub owner: OwnerId,
    /// Reference instant for every date-relative figure
    pub now: NaiveDateTime,
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(settings: Settings, owner: Option<OwnerId>, now: NaiveDateTime) -> Self {
        Self {
            owner: owner.unwrap_or_else(|| settings.owner_id.clone()),
            now,
            settings,
        }
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> SpendPaceResult<Money> {
    Money::parse(input)
        .map_err(|e| SpendPaceError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Parse a user-supplied date or date-time
pub fn parse_instant_arg(input: &str) -> SpendPaceResult<NaiveDateTime> {
    parse_instant(input).ok_or_else(|| {
        SpendPaceError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM",
            input
        ))
    })
}

/// Resolve the `--today` override against the wall clock
///
/// A bare calendar date keeps the wall clock's time of day; a full date-time
/// is used as given.
pub fn reference_instant(today: Option<&str>, now: NaiveDateTime) -> SpendPaceResult<NaiveDateTime> {
    let Some(raw) = today else {
        return Ok(now);
    };

    if let Ok(day) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        return Ok(day.and_time(now.time()));
    }
    parse_instant(raw).ok_or_else(|| {
        SpendPaceError::Validation(format!(
            "Invalid --today '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM",
            raw
        ))
    })
}

/// Parse a user-supplied calendar date
pub fn parse_date_arg(input: &str) -> SpendPaceResult<NaiveDate> {
    parse_date(input).ok_or_else(|| {
        SpendPaceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_owner_defaults_to_settings() {
        let now = parse_instant_arg("2025-06-01").unwrap();
        let ctx = CommandContext::new(Settings::default(), None, now);
        assert_eq!(ctx.owner, OwnerId::from("default"));
        assert_eq!(ctx.currency(), "₹");

        let ctx = CommandContext::new(Settings::default(), Some(OwnerId::from("bob")), now);
        assert_eq!(ctx.owner, OwnerId::from("bob"));
    }

    #[test]
    fn test_reference_instant() {
        let wall = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        assert_eq!(reference_instant(None, wall).unwrap(), wall);

        // Bare dates keep the time of day, padded or not
        let expected = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(reference_instant(Some("2025-03-04"), wall).unwrap(), expected);
        assert_eq!(reference_instant(Some("2025-3-4"), wall).unwrap(), expected);

        assert_eq!(
            reference_instant(Some("2025-03-04T08:15"), wall).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap()
        );
        assert!(reference_instant(Some("soon"), wall).unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
        assert!(parse_instant_arg("2025-13-01").is_err());
        assert_eq!(
            parse_date_arg("2025-06-01T10:00:00").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }
}
