//! Dashboard report
//!
//! Everything the overview screen shows, computed in one pass over a
//! snapshot for a given "now".

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::Settings;
use crate::display::report::{format_bar, format_percentage, section};
use crate::models::budget::monthly_limit_or;
use crate::models::{Expense, Money, MonthPeriod, MonthWindow};
use crate::snapshot::Snapshot;

use super::category_budgets::{evaluate_category_budgets, CategoryBudgetStatus};
use super::expense_list::recent_expenses;
use super::pacing::BudgetPacing;
use super::savings::{evaluate_goals, GoalProgress, SavingsSummary};
use super::spending::{monthly_trend, total_where, MonthlyTotal, SpendingReport};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Full dashboard for one owner
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    #[serde(with = "crate::models::timestamp::instant")]
    pub generated_at: NaiveDateTime,
    pub period: MonthPeriod,
    /// Spend from the first of the month up to "now"
    pub current_month_spent: Money,
    pub pacing: BudgetPacing,
    pub category_budgets: Vec<CategoryBudgetStatus>,
    /// All-time spending and its category breakdown
    pub spending: SpendingReport,
    pub trend: Vec<MonthlyTotal>,
    pub goals: Vec<GoalProgress>,
    pub savings: SavingsSummary,
    pub recent_expenses: Vec<Expense>,
}

impl DashboardReport {
    /// Build the dashboard
    pub fn generate(snapshot: &Snapshot, now: NaiveDateTime, settings: &Settings) -> Self {
        let window = MonthWindow::containing(now);
        let expenses = &snapshot.expenses;

        let spending = SpendingReport::generate(expenses, &snapshot.categories);
        let current_month_spent = total_where(expenses, |e| window.contains_to_date(e.date));
        let monthly_budget =
            monthly_limit_or(snapshot.budget.as_ref(), settings.default_monthly_budget);

        let pacing = BudgetPacing::calculate(
            spending.total_spent,
            current_month_spent,
            monthly_budget,
            window.day_counts(),
        );

        let goals = evaluate_goals(&snapshot.savings_goals, now);
        let savings = SavingsSummary::from_progress(&goals);

        let report = Self {
            generated_at: now,
            period: window.period(),
            current_month_spent,
            pacing,
            category_budgets: evaluate_category_budgets(
                expenses,
                &snapshot.categories,
                snapshot.budget.as_ref(),
                &window,
            ),
            spending,
            trend: monthly_trend(expenses, now, settings.trend_months),
            goals,
            savings,
            recent_expenses: recent_expenses(expenses, settings.recent_expense_count)
                .into_iter()
                .cloned()
                .collect(),
        };

        tracing::debug!(
            period = %report.period,
            month_spent = %report.current_month_spent,
            daily_average = report.pacing.daily_average_spent,
            on_track = report.pacing.is_on_track,
            "dashboard generated"
        );

        report
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let units = |v: f64| format!("{}{:.2}", currency, v);
        let mut output = String::new();

        output.push_str(&format!("Dashboard for {}\n", self.period));
        output.push_str(&"═".repeat(WIDTH));
        output.push_str("\n\n");

        let pacing = &self.pacing;
        output.push_str(&section("Overview", WIDTH));
        output.push_str(&format!("Total Spent:       {}\n", money(self.spending.total_spent)));
        output.push_str(&format!("This Month:        {}\n", money(self.current_month_spent)));
        output.push_str(&format!("Monthly Budget:    {}\n", money(pacing.monthly_budget)));
        output.push_str(&format!(
            "Remaining:         {}  ({} used, {})\n",
            money(pacing.remaining_budget),
            format_percentage(pacing.budget_percentage),
            pacing.band
        ));
        output.push_str(&format!(
            "                   {}\n\n",
            format_bar(pacing.display_percentage(), 100.0, BAR_WIDTH)
        ));

        output.push_str(&section("Pacing", WIDTH));
        output.push_str(&format!(
            "Day {} of {} ({} remaining)\n",
            pacing.days.passed, pacing.days.in_month, pacing.days.remaining
        ));
        output.push_str(&format!("Daily Average:     {}\n", units(pacing.daily_average_spent)));
        output.push_str(&format!("Daily Allowance:   {}\n", units(pacing.daily_budget_allowance)));
        output.push_str(&format!("Left Per Day:      {}\n", units(pacing.daily_budget_remaining)));
        output.push_str(&format!(
            "Projected Month:   {}{}\n",
            units(pacing.projected_month_end),
            if pacing.projected_overspend() { "  (over budget)" } else { "" }
        ));
        output.push_str(if pacing.is_on_track {
            "Status:            On track\n\n"
        } else {
            "Status:            Over pace\n\n"
        });

        if !self.category_budgets.is_empty() {
            output.push_str(&section("Category Budgets", WIDTH));
            for status in &self.category_budgets {
                output.push_str(&format!(
                    "{:<16} {} / {}  {} {:>6} {}\n",
                    status.name,
                    money(status.spent),
                    money(status.limit),
                    format_bar(status.display_percentage(), 100.0, 10),
                    format_percentage(status.percentage),
                    status.band
                ));
            }
            output.push('\n');
        }

        if !self.spending.categories.is_empty() {
            output.push_str(&section("Spending by Category", WIDTH));
            for row in &self.spending.categories {
                output.push_str(&format!(
                    "{:<16} {:>12} {} {}\n",
                    row.name,
                    money(row.total),
                    format_bar(row.percentage, 100.0, BAR_WIDTH),
                    format_percentage(row.percentage)
                ));
            }
            if !self.spending.uncategorized.is_zero() {
                output.push_str(&format!(
                    "{:<16} {:>12}\n",
                    "Uncategorized",
                    money(self.spending.uncategorized)
                ));
            }
            output.push('\n');
        }

        if !self.trend.is_empty() {
            output.push_str(&section("Monthly Trend", WIDTH));
            let peak = self
                .trend
                .iter()
                .map(|m| m.total.as_f64())
                .fold(0.0_f64, f64::max);
            for month in &self.trend {
                output.push_str(&format!(
                    "{:<4} {} {}\n",
                    month.label,
                    format_bar(month.total.as_f64(), peak, BAR_WIDTH),
                    money(month.total)
                ));
            }
            output.push('\n');
        }

        if !self.goals.is_empty() {
            output.push_str(&section("Savings Goals", WIDTH));
            for goal in &self.goals {
                let status = if goal.is_completed {
                    "Completed".to_string()
                } else {
                    goal.deadline.to_string()
                };
                output.push_str(&format!(
                    "{:<16} {} {:>6}  {}\n",
                    goal.name,
                    format_bar(goal.display_progress(), 100.0, BAR_WIDTH),
                    format_percentage(goal.progress),
                    status
                ));
            }
            output.push_str(&format!(
                "Saved {} of {}\n\n",
                money(self.savings.total_saved),
                money(self.savings.total_target)
            ));
        }

        output.push_str(&section("Recent Expenses", WIDTH));
        if self.recent_expenses.is_empty() {
            output.push_str("No expenses yet.\n");
        }
        for expense in &self.recent_expenses {
            output.push_str(&format!(
                "{} {:<30} {:>12}\n",
                expense.date.format("%Y-%m-%d"),
                expense.description,
                money(expense.amount)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, CategoryId, OwnerId, SavingsGoal};
    use chrono::NaiveDate;

    fn at(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn snapshot() -> Snapshot {
        let owner = OwnerId::from("u1");
        let mut food = Category::new(owner.clone(), "Food", "bg-blue-500");
        food.id = CategoryId::from("food");

        let expense = |units: i64, m: u32, d: u32| {
            Expense::new(
                owner.clone(),
                Money::from_units(units),
                "meal",
                CategoryId::from("food"),
                at(m, d),
            )
        };

        let mut budget = Budget::new(owner.clone());
        budget.set_category_limit(CategoryId::from("food"), Money::from_units(500));

        Snapshot::new(
            vec![
                expense(300, 6, 3),
                expense(100, 6, 8),
                expense(200, 5, 20),
                // Later this month: outside the pacing window
                expense(50, 6, 25),
            ],
            vec![food],
            Some(budget),
            vec![SavingsGoal::new(owner, "Trip", Money::from_units(100))
                .with_current(Money::from_units(25))],
        )
    }

    #[test]
    fn test_generate() {
        let report = DashboardReport::generate(&snapshot(), at(6, 10), &Settings::default());

        assert_eq!(report.period, MonthPeriod::new(2025, 6));
        assert_eq!(report.spending.total_spent, Money::from_units(650));
        assert_eq!(report.current_month_spent, Money::from_units(400));

        // Budget has no monthly limit, so the default applies
        assert_eq!(report.pacing.monthly_budget, Money::from_units(1000));
        assert_eq!(report.pacing.daily_average_spent, 40.0);
        assert_eq!(report.pacing.remaining_budget, Money::from_units(350));

        // Category evaluation covers the whole month
        assert_eq!(report.category_budgets.len(), 1);
        assert_eq!(report.category_budgets[0].spent, Money::from_units(450));

        assert_eq!(report.trend.len(), 6);
        assert_eq!(report.trend[5].label, "Jun");
        assert_eq!(report.trend[5].total, Money::from_units(450));
        assert_eq!(report.trend[4].total, Money::from_units(200));

        assert_eq!(report.savings.overall_progress, 25.0);
        assert_eq!(report.recent_expenses.len(), 4);
        assert_eq!(report.recent_expenses[0].date, at(6, 25));
    }

    #[test]
    fn test_empty_snapshot() {
        let report = DashboardReport::generate(&Snapshot::default(), at(2, 28), &Settings::default());
        assert_eq!(report.pacing.days.remaining, 0);
        assert_eq!(report.pacing.daily_budget_remaining, 0.0);
        assert!(report.category_budgets.is_empty());

        let text = report.format_terminal("₹");
        assert!(text.contains("Dashboard for 2025-02"));
        assert!(text.contains("No expenses yet."));
    }

    #[test]
    fn test_terminal_and_json() {
        let report = DashboardReport::generate(&snapshot(), at(6, 10), &Settings::default());

        let text = report.format_terminal("₹");
        assert!(text.contains("Total Spent:       ₹650.00"));
        assert!(text.contains("Day 10 of 30 (20 remaining)"));
        assert!(text.contains("Over pace"));
        assert!(text.contains("Projected Month:   ₹1200.00  (over budget)"));
        assert!(text.contains("Trip"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["generated_at"], "2025-06-10T12:00:00.000");
        assert_eq!(json["pacing"]["band"], "ok");
        assert_eq!(json["goals"][0]["deadline"]["state"], "no_deadline");
    }
}
