//! Report formatting utilities for terminal output

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::models::Money;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date with a user-configured strftime pattern
///
/// Unparseable patterns fall back to ISO dates.
pub fn format_date(date: NaiveDateTime, pattern: &str) -> String {
    let valid = !pattern.is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section header with an underline
pub fn section(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, separator(width))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);

        let over = format_bar(150.0, 100.0, 10);
        assert_eq!(over, "█".repeat(10));

        assert_eq!(format_bar(10.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn test_format_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "14/03/2025");
        assert_eq!(format_date(date, "%Q"), "2025-03-14");
        assert_eq!(format_date(date, ""), "2025-03-14");
    }

    #[test]
    fn test_colored_money() {
        assert_eq!(format_money_colored(Money::zero(), "₹"), "₹0.00");
        assert!(format_money_colored(Money::from_units(-2), "$").starts_with("\x1b[31m"));
    }
}
