//! Per-category budget utilization
//!
//! Compares this month's spend in each category against the category's
//! ceiling and classifies the result into a severity band. Only the band is
//! exposed; how a band looks is up to the presentation layer.

use serde::Serialize;
use std::fmt;

use crate::models::{Budget, Category, CategoryId, Expense, Money, MonthWindow};

use super::spending::total_where;

/// Percentage above which utilization is a warning
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Percentage above which utilization is over budget
pub const OVER_THRESHOLD: f64 = 100.0;

/// Severity of a utilization percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationBand {
    /// 80% or less
    Ok,
    /// Above 80%, up to and including 100%
    Warning,
    /// Above 100%
    Over,
}

impl UtilizationBand {
    pub fn classify(percentage: f64) -> Self {
        if percentage > OVER_THRESHOLD {
            Self::Over
        } else if percentage > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for UtilizationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Over => "over",
        };
        f.write_str(label)
    }
}

/// One category measured against its ceiling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudgetStatus {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub spent: Money,
    pub limit: Money,
    pub percentage: f64,
    pub band: UtilizationBand,
}

impl CategoryBudgetStatus {
    /// Evaluate one category's spend against a ceiling
    pub fn evaluate(category: &Category, spent: Money, limit: Money) -> Self {
        let percentage = spent.percent_of(limit);
        Self {
            category_id: category.id.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            spent,
            limit,
            percentage,
            band: UtilizationBand::classify(percentage),
        }
    }

    /// `limit - spent`; negative when over
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Percentage capped at 100 for progress bars
    pub fn display_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// Evaluate every category that has a positive ceiling
///
/// Results follow the categories' order. Ceilings for categories that no
/// longer exist are skipped.
pub fn evaluate_category_budgets(
    expenses: &[Expense],
    categories: &[Category],
    budget: Option<&Budget>,
    window: &MonthWindow,
) -> Vec<CategoryBudgetStatus> {
    let Some(budget) = budget else {
        return Vec::new();
    };

    for (id, _) in budget.active_category_limits() {
        if !categories.iter().any(|c| &c.id == id) {
            tracing::warn!(category = %id, "ceiling set for unknown category, skipping");
        }
    }

    categories
        .iter()
        .filter_map(|category| {
            let limit = budget
                .category_limit(&category.id)
                .filter(|limit| limit.is_positive())?;
            let spent = total_where(expenses, |e| {
                e.category == category.id && window.contains(e.date)
            });
            Some(CategoryBudgetStatus::evaluate(category, spent, limit))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnerId;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn category(id: &str, name: &str) -> Category {
        let mut c = Category::new(OwnerId::from("u1"), name, "bg-blue-500");
        c.id = CategoryId::from(id);
        c
    }

    fn expense(units: i64, category: &str, date: NaiveDateTime) -> Expense {
        Expense::new(
            OwnerId::from("u1"),
            Money::from_units(units),
            "item",
            CategoryId::from(category),
            date,
        )
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(UtilizationBand::classify(0.0), UtilizationBand::Ok);
        assert_eq!(UtilizationBand::classify(80.0), UtilizationBand::Ok);
        assert_eq!(UtilizationBand::classify(80.01), UtilizationBand::Warning);
        assert_eq!(UtilizationBand::classify(100.0), UtilizationBand::Warning);
        assert_eq!(UtilizationBand::classify(100.01), UtilizationBand::Over);
        assert_eq!(UtilizationBand::Warning.to_string(), "warning");
    }

    #[test]
    fn test_warning_band() {
        let food = category("food", "Food");
        let status = CategoryBudgetStatus::evaluate(&food, Money::from_units(180), Money::from_units(200));
        assert_eq!(status.percentage, 90.0);
        assert_eq!(status.band, UtilizationBand::Warning);
        assert_eq!(status.remaining(), Money::from_units(20));
    }

    #[test]
    fn test_zero_limit_is_zero_percent() {
        let food = category("food", "Food");
        let status = CategoryBudgetStatus::evaluate(&food, Money::from_units(50), Money::zero());
        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.band, UtilizationBand::Ok);
    }

    #[test]
    fn test_evaluate_uses_whole_current_month() {
        let categories = vec![category("food", "Food"), category("fun", "Fun"), category("rent", "Rent")];
        let mut budget = Budget::new(OwnerId::from("u1"));
        budget.set_category_limit(CategoryId::from("fun"), Money::from_units(100));
        budget.set_category_limit(CategoryId::from("food"), Money::from_units(200));
        budget.set_category_limit(CategoryId::from("rent"), Money::zero());
        budget.set_category_limit(CategoryId::from("deleted"), Money::from_units(50));

        let expenses = vec![
            expense(100, "food", at(2025, 4, 2)),
            expense(80, "food", at(2025, 4, 28)),
            expense(999, "food", at(2025, 3, 31)),
            expense(150, "fun", at(2025, 4, 5)),
            expense(50, "deleted", at(2025, 4, 5)),
        ];

        let window = MonthWindow::containing(at(2025, 4, 10));
        let statuses = evaluate_category_budgets(&expenses, &categories, Some(&budget), &window);

        let names: Vec<_> = statuses.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Fun"]);

        // Future-dated expense later this month still counts
        assert_eq!(statuses[0].spent, Money::from_units(180));
        assert_eq!(statuses[0].band, UtilizationBand::Warning);
        assert_eq!(statuses[1].percentage, 150.0);
        assert_eq!(statuses[1].band, UtilizationBand::Over);
        assert_eq!(statuses[1].display_percentage(), 100.0);
    }

    #[test]
    fn test_no_budget_means_no_statuses() {
        let window = MonthWindow::containing(at(2025, 4, 10));
        assert!(evaluate_category_budgets(&[], &[category("food", "Food")], None, &window).is_empty());
    }
}
