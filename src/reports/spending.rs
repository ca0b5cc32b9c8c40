//! Spending aggregation
//!
//! Folds a collection of expenses into totals, a per-category breakdown, and
//! a trailing month-by-month trend. None of these filter by date unless told
//! to: callers decide whether they pass full history or one month.

use crate::error::SpendPaceResult;
use crate::models::{Category, CategoryId, Expense, Money, MonthPeriod};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Months covered by the trend when the caller does not say otherwise
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Sum of all amounts in the collection
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the expenses matching a predicate
pub fn total_where<F>(expenses: &[Expense], predicate: F) -> Money
where
    F: Fn(&Expense) -> bool,
{
    expenses
        .iter()
        .filter(|e| predicate(e))
        .map(|e| e.amount)
        .sum()
}

/// Spending attributed to one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category_id: CategoryId,
    pub name: String,
    pub total: Money,
    /// Opaque color token copied from the category
    pub color: String,
    /// Share of all spending passed in, uncategorized included
    pub percentage: f64,
}

/// Per-category totals, in the categories' own order
///
/// Categories with nothing spent are left out. Expenses whose category is
/// unknown are not attributed to any row but still count toward the total
/// the percentages are taken of, so rows add up to less than 100 when such
/// expenses exist.
pub fn category_breakdown(expenses: &[Expense], categories: &[Category]) -> Vec<CategorySpending> {
    let mut by_category: HashMap<&CategoryId, Money> = HashMap::new();
    for expense in expenses {
        *by_category.entry(&expense.category).or_default() += expense.amount;
    }

    let mut rows: Vec<CategorySpending> = categories
        .iter()
        .filter_map(|category| {
            let total = by_category.get(&category.id).copied().unwrap_or_default();
            if total.is_zero() {
                return None;
            }
            Some(CategorySpending {
                category_id: category.id.clone(),
                name: category.name.clone(),
                total,
                color: category.color.clone(),
                percentage: 0.0,
            })
        })
        .collect();

    let total = total_spent(expenses);
    for row in &mut rows {
        row.percentage = row.total.percent_of(total);
    }

    rows
}

/// Sum of expenses whose category matches no known category
pub fn uncategorized_total(expenses: &[Expense], categories: &[Category]) -> Money {
    let known: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();
    total_where(expenses, |e| !known.contains(&e.category))
}

/// One month of the trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub period: MonthPeriod,
    /// Short month name ("Jan")
    pub label: String,
    pub total: Money,
}

/// Totals for `month_count` consecutive months ending with the month of `now`
///
/// Oldest first. Months without expenses are present with a zero total.
pub fn monthly_trend(expenses: &[Expense], now: NaiveDateTime, month_count: u32) -> Vec<MonthlyTotal> {
    let current = MonthPeriod::containing(now);

    (0..month_count)
        .rev()
        .map(|back| {
            let period = current.months_back(back);
            MonthlyTotal {
                period,
                label: period.short_label(),
                total: total_where(expenses, |e| period.contains(e.date)),
            }
        })
        .collect()
}

/// Spending breakdown over a set of expenses
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    /// Total spending across all expenses passed in
    pub total_spent: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Per-category rows with spending
    pub categories: Vec<CategorySpending>,
    /// Spending whose category is unknown
    pub uncategorized: Money,
}

impl SpendingReport {
    /// Build the report
    pub fn generate(expenses: &[Expense], categories: &[Category]) -> Self {
        let report = Self {
            total_spent: total_spent(expenses),
            expense_count: expenses.len(),
            categories: category_breakdown(expenses, categories),
            uncategorized: uncategorized_total(expenses, categories),
        };

        tracing::debug!(
            total = %report.total_spent,
            rows = report.categories.len(),
            uncategorized = %report.uncategorized,
            "spending report generated"
        );

        report
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}  ({} expenses)\n\n",
            self.total_spent.format_with_symbol(currency),
            self.expense_count
        ));

        output.push_str(&format!("{:<30} {:>16} {:>10}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>16} {:>9.1}%\n",
                row.name,
                row.total.format_with_symbol(currency),
                row.percentage
            ));
        }

        if !self.uncategorized.is_zero() {
            output.push_str(&format!(
                "{:<30} {:>16}\n",
                "UNCATEGORIZED",
                self.uncategorized.format_with_symbol(currency)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendPaceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Color", "Amount", "Percentage"])?;

        for row in &self.categories {
            let amount = format!("{:.2}", row.total.as_f64());
            let percentage = format!("{:.2}", row.percentage);
            csv.write_record([
                row.name.as_str(),
                row.color.as_str(),
                amount.as_str(),
                percentage.as_str(),
            ])?;
        }

        if !self.uncategorized.is_zero() {
            let amount = format!("{:.2}", self.uncategorized.as_f64());
            csv.write_record(["UNCATEGORIZED", "", amount.as_str(), ""])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnerId;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn expense(cents: i64, category: &str, date: NaiveDateTime) -> Expense {
        Expense::new(
            OwnerId::from("u1"),
            Money::from_cents(cents),
            "item",
            CategoryId::from(category),
            date,
        )
    }

    fn category(id: &str, name: &str, color: &str) -> Category {
        let mut c = Category::new(OwnerId::from("u1"), name, color);
        c.id = CategoryId::from(id);
        c
    }

    #[test]
    fn test_total_spent_is_order_independent() {
        let mut expenses = vec![
            expense(1999, "food", at(2025, 1, 1)),
            expense(1, "food", at(2025, 1, 2)),
            expense(500_00, "rent", at(2025, 1, 3)),
        ];
        let forward = total_spent(&expenses);
        expenses.reverse();
        assert_eq!(total_spent(&expenses), forward);
        assert_eq!(forward.cents(), 52000);
        assert_eq!(total_spent(&[]), Money::zero());
    }

    #[test]
    fn test_breakdown_keeps_category_order_and_drops_zero() {
        let categories = vec![
            category("food", "Food", "bg-blue-500"),
            category("fun", "Fun", "bg-purple-500"),
            category("bills", "Bills", "bg-red-500"),
        ];
        let expenses = vec![
            expense(3000, "bills", at(2025, 1, 1)),
            expense(1000, "food", at(2025, 1, 2)),
            expense(500, "deleted", at(2025, 1, 3)),
        ];

        let rows = category_breakdown(&expenses, &categories);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Bills"]);
        assert_eq!(rows[0].color, "bg-blue-500");
        // Percentages are of all 45.00, including the 5.00 on a deleted category
        assert!((rows[0].percentage - 22.222).abs() < 0.001);
        assert!((rows[1].percentage - 66.667).abs() < 0.001);

        // Rows add up to the spend on known categories only
        let row_sum: Money = rows.iter().map(|r| r.total).sum();
        assert_eq!(row_sum + uncategorized_total(&expenses, &categories), total_spent(&expenses));
        assert_eq!(uncategorized_total(&expenses, &categories).cents(), 500);
    }

    #[test]
    fn test_breakdown_share_counts_deleted_category_spend() {
        let categories = vec![category("food", "Food", "bg-blue-500")];
        let expenses = vec![
            expense(5000, "food", at(2025, 1, 1)),
            expense(5000, "deleted", at(2025, 1, 2)),
        ];

        let rows = category_breakdown(&expenses, &categories);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percentage, 50.0);
    }

    #[test]
    fn test_breakdown_of_nothing_is_empty() {
        let categories = vec![category("food", "Food", "bg-blue-500")];
        assert!(category_breakdown(&[], &categories).is_empty());
    }

    #[test]
    fn test_monthly_trend_shape() {
        let expenses = vec![
            expense(1000, "food", at(2025, 3, 1)),
            expense(2000, "food", at(2025, 3, 31)),
            expense(500, "food", at(2024, 12, 15)),
            // Outside the six-month span
            expense(9900, "food", at(2024, 9, 30)),
        ];

        let trend = monthly_trend(&expenses, at(2025, 3, 10), DEFAULT_TREND_MONTHS);
        assert_eq!(trend.len(), 6);

        let labels: Vec<_> = trend.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);

        let totals: Vec<_> = trend.iter().map(|t| t.total.cents()).collect();
        assert_eq!(totals, vec![0, 0, 500, 0, 0, 3000]);
        assert_eq!(trend[0].period, MonthPeriod::new(2024, 10));
    }

    #[test]
    fn test_monthly_trend_boundaries_are_inclusive() {
        let first = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 2, 28)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap();
        let expenses = vec![expense(100, "x", first), expense(200, "x", last)];

        let trend = monthly_trend(&expenses, at(2025, 2, 14), 1);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].total.cents(), 300);
        assert!(monthly_trend(&expenses, at(2025, 2, 14), 0).is_empty());
    }

    #[test]
    fn test_export_csv() {
        let categories = vec![category("food", "Food", "bg-blue-500")];
        let expenses = vec![
            expense(1250, "food", at(2025, 1, 1)),
            expense(300, "gone", at(2025, 1, 1)),
        ];
        let report = SpendingReport::generate(&expenses, &categories);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.starts_with("Category,Color,Amount,Percentage\n"));
        assert!(csv.contains("Food,bg-blue-500,12.50,80.65"));
        assert!(csv.contains("UNCATEGORIZED,,3.00,"));
    }

    #[test]
    fn test_format_terminal() {
        let categories = vec![category("food", "Food", "bg-blue-500")];
        let expenses = vec![expense(1250, "food", at(2025, 1, 1))];
        let text = SpendingReport::generate(&expenses, &categories).format_terminal("₹");
        assert!(text.contains("Total Spent: ₹12.50"));
        assert!(text.contains("Food"));
    }
}
