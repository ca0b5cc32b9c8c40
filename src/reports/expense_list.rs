//! Expense listing: sorting and filtering
//!
//! Produces ordered views over a borrowed slice of expenses. The input is
//! never reordered.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use crate::error::SpendPaceResult;
use crate::models::category::category_name;
use crate::models::{Category, CategoryId, Expense, Money};

/// Column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Amount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to a sorted column header
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Current sort of an expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest first
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort config after a column header is selected
    ///
    /// Selecting the current column flips the direction; selecting another
    /// column starts it descending.
    pub fn request(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Desc)
        }
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ordering = match self.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
        };
        write!(f, "{} {}", key, self.direction.indicator())
    }
}

/// A new ordering of `expenses`
///
/// The sort is stable: expenses with equal keys keep their input order in
/// both directions.
pub fn sort_expenses<'a>(expenses: &'a [Expense], config: SortConfig) -> Vec<&'a Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| config.compare(a, b));
    sorted
}

/// The `count` most recent expenses, newest first
pub fn recent_expenses(expenses: &[Expense], count: usize) -> Vec<&Expense> {
    let mut sorted = sort_expenses(expenses, SortConfig::default());
    sorted.truncate(count);
    sorted
}

/// Filter options for expense listings
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by start instant (inclusive)
    pub from: Option<NaiveDateTime>,
    /// Filter by end instant (inclusive)
    pub to: Option<NaiveDateTime>,
    /// Filter by category ID
    pub category: Option<CategoryId>,
    /// Filter by description (case-insensitive partial match)
    pub description_contains: Option<String>,
    /// Filter by minimum amount
    pub min_amount: Option<Money>,
    /// Filter by maximum amount
    pub max_amount: Option<Money>,
    /// Only expenses whose category is unknown
    pub uncategorized_only: bool,
}

impl ExpenseFilter {
    /// Check if an expense matches this filter
    pub fn matches(&self, expense: &Expense, categories: &[Category]) -> bool {
        if let Some(from) = self.from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if expense.date > to {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if &expense.category != category {
                return false;
            }
        }

        if let Some(ref needle) = self.description_contains {
            if !expense
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }

        if self.uncategorized_only && categories.iter().any(|c| c.id == expense.category) {
            return false;
        }

        true
    }

    /// Expenses matching this filter, in input order
    pub fn apply<'a>(&self, expenses: &'a [Expense], categories: &[Category]) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|e| self.matches(e, categories))
            .collect()
    }
}

/// Write an expense listing as CSV
pub fn export_expenses_csv<W: Write>(
    expenses: &[&Expense],
    categories: &[Category],
    writer: W,
) -> SpendPaceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Id", "Date", "Description", "Category", "Amount"])?;

    for expense in expenses {
        let id = expense.id.as_ref().map(|id| id.as_str()).unwrap_or("");
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = format!("{:.2}", expense.amount.as_f64());
        csv.write_record([
            id,
            date.as_str(),
            expense.description.as_str(),
            category_name(categories, &expense.category),
            amount.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OwnerId;
    use chrono::NaiveDate;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn expense(id: &str, units: i64, day: u32) -> Expense {
        Expense::new(
            OwnerId::from("u1"),
            Money::from_units(units),
            format!("expense {}", id),
            CategoryId::from("food"),
            at(day),
        )
        .with_id(id)
    }

    fn ids(list: &[&Expense]) -> Vec<String> {
        list.iter()
            .map(|e| e.id.as_ref().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_sort_is_stable_for_equal_amounts() {
        let expenses = vec![expense("a", 5, 1), expense("b", 5, 2)];

        let asc = sort_expenses(&expenses, SortConfig::new(SortKey::Amount, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["a", "b"]);

        let desc = sort_expenses(&expenses, SortConfig::new(SortKey::Amount, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_by_date_and_amount() {
        let expenses = vec![expense("a", 30, 3), expense("b", 10, 1), expense("c", 20, 2)];

        let newest = sort_expenses(&expenses, SortConfig::default());
        assert_eq!(ids(&newest), vec!["a", "c", "b"]);

        let cheapest = sort_expenses(&expenses, SortConfig::new(SortKey::Amount, SortDirection::Asc));
        assert_eq!(ids(&cheapest), vec!["b", "c", "a"]);

        // Input untouched
        assert_eq!(expenses[0].id.as_ref().unwrap().as_str(), "a");
    }

    #[test]
    fn test_request_toggles_and_resets() {
        let config = SortConfig::default();
        let flipped = config.request(SortKey::Date);
        assert_eq!(flipped, SortConfig::new(SortKey::Date, SortDirection::Asc));
        assert_eq!(
            flipped.request(SortKey::Date),
            SortConfig::new(SortKey::Date, SortDirection::Desc)
        );
        assert_eq!(
            flipped.request(SortKey::Amount),
            SortConfig::new(SortKey::Amount, SortDirection::Desc)
        );
    }

    #[test]
    fn test_recent_expenses() {
        let expenses = vec![expense("a", 1, 1), expense("b", 1, 9), expense("c", 1, 5)];
        assert_eq!(ids(&recent_expenses(&expenses, 2)), vec!["b", "c"]);
        assert_eq!(recent_expenses(&expenses, 10).len(), 3);
    }

    #[test]
    fn test_filter() {
        let mut other = expense("z", 100, 4);
        other.category = CategoryId::from("gone");
        let expenses = vec![expense("a", 5, 1), expense("b", 50, 2), other];
        let categories = vec![{
            let mut c = Category::new(OwnerId::from("u1"), "Food", "bg-blue-500");
            c.id = CategoryId::from("food");
            c
        }];

        let filter = ExpenseFilter {
            from: Some(at(2)),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&expenses, &categories)), vec!["b", "z"]);

        let filter = ExpenseFilter {
            uncategorized_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&expenses, &categories)), vec!["z"]);

        let filter = ExpenseFilter {
            min_amount: Some(Money::from_units(10)),
            max_amount: Some(Money::from_units(60)),
            description_contains: Some("EXPENSE".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&expenses, &categories)), vec!["b"]);
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![expense("a", 5, 1)];
        let refs: Vec<&Expense> = expenses.iter().collect();

        let mut buf = Vec::new();
        export_expenses_csv(&refs, &[], &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("a,2025-05-01,expense a,Uncategorized,5.00"));
    }
}
