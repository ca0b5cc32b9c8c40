//! Category display formatting

use crate::models::{Budget, Category};

use super::colors::paint_token;

/// Format a table of categories with their ceilings
pub fn format_category_list(
    categories: &[Category],
    budget: Option<&Budget>,
    currency: &str,
) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'spendpace init' to create default categories."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:<14}  {}\n",
        "Category",
        "Limit",
        "Color",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:-<14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        let limit = budget
            .and_then(|b| b.category_limit(&category.id))
            .filter(|limit| limit.is_positive())
            .map(|limit| limit.format_with_symbol(currency))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<width$}  {:>12}  {}  {}\n",
            category.name,
            limit,
            paint_token(&format!("{:<14}", category.color), &category.color),
            category.id.short(),
            width = name_width
        ));
    }

    output
}
