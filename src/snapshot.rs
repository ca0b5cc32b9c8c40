//! Point-in-time bundle of one owner's records
//!
//! The analytics never reach into storage. Callers load all four
//! collections for an owner, wrap them in a `Snapshot`, and hand that to the
//! report functions. Refreshing after a write means loading a new snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, Category, Expense, OwnerId, SavingsGoal};

/// Immutable view of an owner's records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
}

impl Snapshot {
    pub fn new(
        expenses: Vec<Expense>,
        categories: Vec<Category>,
        budget: Option<Budget>,
        savings_goals: Vec<SavingsGoal>,
    ) -> Self {
        Self {
            expenses,
            categories,
            budget,
            savings_goals,
        }
    }

    /// Keep only the records belonging to `owner`
    pub fn for_owner(&self, owner: &OwnerId) -> Self {
        Self {
            expenses: self
                .expenses
                .iter()
                .filter(|e| &e.owner == owner)
                .cloned()
                .collect(),
            categories: self
                .categories
                .iter()
                .filter(|c| &c.owner == owner)
                .cloned()
                .collect(),
            budget: self.budget.clone().filter(|b| &b.owner == owner),
            savings_goals: self
                .savings_goals
                .iter()
                .filter(|g| &g.owner == owner)
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
            && self.categories.is_empty()
            && self.budget.is_none()
            && self.savings_goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_for_owner_filters_every_collection() {
        let me = OwnerId::from("me");
        let other = OwnerId::from("other");
        let date = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let snapshot = Snapshot::new(
            vec![
                Expense::new(me.clone(), Money::from_units(5), "Tea", CategoryId::from("f"), date),
                Expense::new(other.clone(), Money::from_units(9), "Cab", CategoryId::from("t"), date),
            ],
            vec![Category::new(other.clone(), "Travel", "bg-green-500")],
            Some(Budget::new(other)),
            vec![SavingsGoal::new(me.clone(), "Bike", Money::from_units(300))],
        );

        let mine = snapshot.for_owner(&me);
        assert_eq!(mine.expenses.len(), 1);
        assert!(mine.categories.is_empty());
        assert!(mine.budget.is_none());
        assert_eq!(mine.savings_goals.len(), 1);
        assert!(!mine.is_empty());
        assert!(Snapshot::default().is_empty());
    }
}
