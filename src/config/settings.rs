//! User settings for SpendPace
//!
//! Display preferences plus the defaults the reports fall back to.

use serde::{Deserialize, Serialize};

use super::paths::SpendPacePaths;
use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::{Money, OwnerId, DEFAULT_MONTHLY_LIMIT};
use crate::reports::spending::DEFAULT_TREND_MONTHS;

/// User settings for SpendPace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Owner whose records the CLI works on
    #[serde(default = "default_owner")]
    pub owner_id: OwnerId,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Monthly ceiling used when an owner has none
    #[serde(default = "default_monthly_budget")]
    pub default_monthly_budget: Money,

    /// Months shown in the spending trend
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,

    /// Expenses listed under "recent" on the dashboard
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_owner() -> OwnerId {
    OwnerId::from("default")
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_monthly_budget() -> Money {
    DEFAULT_MONTHLY_LIMIT
}

fn default_trend_months() -> u32 {
    DEFAULT_TREND_MONTHS
}

fn default_recent_expense_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            owner_id: default_owner(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_monthly_budget: default_monthly_budget(),
            trend_months: default_trend_months(),
            recent_expense_count: default_recent_expense_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &SpendPacePaths) -> SpendPaceResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendPaceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendPaceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not saved until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPacePaths) -> SpendPaceResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendPaceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SpendPaceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        tracing::info!(path = %paths.settings_file().display(), "settings saved");
        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
