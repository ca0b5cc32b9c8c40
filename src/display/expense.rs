//! Expense display formatting

use crate::models::category::category_name;
use crate::models::{Category, Expense};
use crate::reports::SortConfig;

use super::report::{format_date, truncate};

/// Format a single expense as a list row
pub fn format_expense_row(
    expense: &Expense,
    categories: &[Category],
    currency: &str,
    date_format: &str,
) -> String {
    let id = expense.id.as_ref().map(|id| id.short()).unwrap_or("-");

    format!(
        "{:8} {:10} {:24} {:16} {:>12}",
        id,
        format_date(expense.date, date_format),
        truncate(&expense.description, 24),
        truncate(category_name(categories, &expense.category), 16),
        expense.amount.format_with_symbol(currency)
    )
}

/// Format a list of expenses with a header showing the active sort
pub fn format_expense_list(
    expenses: &[&Expense],
    categories: &[Category],
    sort: SortConfig,
    currency: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:24} {:16} {:>12}   (sorted by {})\n",
        "ID", "Date", "Description", "Category", "Amount", sort
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, categories, currency, date_format));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, OwnerId};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(
            OwnerId::from("u1"),
            Money::from_cents(1250),
            "Lunch",
            CategoryId::from("missing"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
        .with_id("abcdef123456")
    }

    #[test]
    fn test_row_uses_uncategorized_fallback() {
        let row = format_expense_row(&lunch(), &[], "₹", "%Y-%m-%d");
        assert!(row.starts_with("abcdef12 2025-03-14 Lunch"));
        assert!(row.contains("Uncategorized"));
        assert!(row.ends_with("₹12.50"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &[], SortConfig::default(), "₹", "%Y-%m-%d"),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_list_header_shows_sort() {
        let expense = lunch();
        let output = format_expense_list(&[&expense], &[], SortConfig::default(), "₹", "%d/%m/%Y");
        assert!(output.contains("sorted by date ↓"));
        assert!(output.contains("14/03/2025"));
    }
}
