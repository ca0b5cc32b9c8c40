//! Category model
//!
//! Categories group expenses for breakdowns and per-category limits. The
//! color is an opaque token (for example `bg-blue-500`) that is carried
//! through untouched; only the presentation layer maps it to a real color.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, OwnerId};
use super::money::Money;

/// Display name used for expenses whose category no longer exists
pub const UNCATEGORIZED: &str = "Uncategorized";

/// An expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Opaque color token
    pub color: String,

    /// Per-category default budget; carried through, not evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,

    /// Owner of the record
    #[serde(rename = "userId")]
    pub owner: OwnerId,
}

impl Category {
    /// Create a new category with a fresh identifier
    pub fn new(owner: OwnerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            color: color.into(),
            budget: None,
            owner,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Look up a category's name, falling back to "Uncategorized"
pub fn category_name<'a>(categories: &'a [Category], id: &CategoryId) -> &'a str {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Starter categories created for an owner with none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transportation,
    Entertainment,
    Education,
    Shopping,
    Bills,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Education,
            Self::Shopping,
            Self::Bills,
            Self::Other,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }

    /// Get the color token for this default category
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "bg-blue-500",
            Self::Transportation => "bg-green-500",
            Self::Entertainment => "bg-purple-500",
            Self::Education => "bg-yellow-500",
            Self::Shopping => "bg-pink-500",
            Self::Bills => "bg-red-500",
            Self::Other => "bg-gray-500",
        }
    }

    /// Convert to a Category owned by `owner`
    pub fn to_category(&self, owner: &OwnerId) -> Category {
        Category::new(owner.clone(), self.name(), self.color())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(OwnerId::from("u1"), "Groceries", "bg-green-500");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.color, "bg-green-500");
        assert!(category.budget.is_none());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new(OwnerId::from("u1"), " ", "bg-red-500");
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "x".repeat(51);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        );
    }

    #[test]
    fn test_category_name_lookup() {
        let owner = OwnerId::from("u1");
        let food = DefaultCategory::Food.to_category(&owner);
        let categories = vec![food.clone()];

        assert_eq!(category_name(&categories, &food.id), "Food");
        assert_eq!(
            category_name(&categories, &CategoryId::from("deleted")),
            UNCATEGORIZED
        );
    }

    #[test]
    fn test_default_categories() {
        let all = DefaultCategory::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].name(), "Food");
        assert_eq!(all[6].color(), "bg-gray-500");
    }

    #[test]
    fn test_unknown_color_token_round_trips() {
        let json = r#"{"id":"c1","name":"Pets","color":"sparkly-teal","userId":"u1"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.color, "sparkly-teal");
        let back = serde_json::to_string(&category).unwrap();
        assert!(back.contains("sparkly-teal"));
    }
}
