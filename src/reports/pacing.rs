//! Budget pacing
//!
//! Turns spend so far and a monthly ceiling into daily rates: how fast money
//! is going out, how fast it may go out, and where the month will land at
//! the current pace.
//!
//! `remaining_budget` and `budget_percentage` compare the *all-time* total
//! against the monthly ceiling, while the daily figures use *this month's*
//! spend only.

use serde::Serialize;

use crate::models::{DayCounts, Money};

use super::category_budgets::UtilizationBand;

/// Pacing figures for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetPacing {
    /// The ceiling evaluated against
    pub monthly_budget: Money,
    /// `monthly_budget - total_spent`; negative when overspent
    pub remaining_budget: Money,
    /// `100 * total_spent / monthly_budget`
    pub budget_percentage: f64,
    /// Severity of `budget_percentage`
    pub band: UtilizationBand,
    /// This month's spend per elapsed day
    pub daily_average_spent: f64,
    /// Even split of the ceiling over the month
    pub daily_budget_allowance: f64,
    /// Where the month ends at the current daily average
    pub projected_month_end: f64,
    /// What is left per remaining day
    pub daily_budget_remaining: f64,
    /// Daily average does not exceed the allowance
    pub is_on_track: bool,
    /// Day counts the rates were derived from
    pub days: DayCounts,
}

impl BudgetPacing {
    /// Compute pacing figures
    ///
    /// Never fails: every division by a zero count or ceiling yields 0.
    /// Rates are in currency units (not cents).
    pub fn calculate(
        total_spent: Money,
        current_month_spent: Money,
        monthly_budget: Money,
        days: DayCounts,
    ) -> Self {
        let remaining_budget = monthly_budget - total_spent;
        let budget_percentage = total_spent.percent_of(monthly_budget);

        let daily_average_spent = per_day(current_month_spent, days.passed);
        let daily_budget_allowance = per_day(monthly_budget, days.in_month);
        let projected_month_end = daily_average_spent * f64::from(days.in_month);
        let daily_budget_remaining = per_day(remaining_budget, days.remaining);

        Self {
            monthly_budget,
            remaining_budget,
            budget_percentage,
            band: UtilizationBand::classify(budget_percentage),
            daily_average_spent,
            daily_budget_allowance,
            projected_month_end,
            daily_budget_remaining,
            is_on_track: daily_average_spent <= daily_budget_allowance,
            days,
        }
    }

    /// Whether the current pace ends the month above the ceiling
    pub fn projected_overspend(&self) -> bool {
        self.projected_month_end > self.monthly_budget.as_f64()
    }

    /// Budget percentage capped at 100 for progress bars
    pub fn display_percentage(&self) -> f64 {
        self.budget_percentage.min(100.0)
    }
}

/// `amount / days` in currency units, 0 when `days` is 0
fn per_day(amount: Money, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    amount.cents() as f64 / f64::from(days) / 100.0
}
