//! Savings goal progress
//!
//! Goals are evaluated as they are. A goal with a zero target is not
//! rejected here; it simply reports zero progress. Rejecting such goals is
//! the job of whoever writes them (`SavingsGoal::validate`).

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

use crate::models::{Money, SavingsGoal, SavingsGoalId};

/// Upcoming deadlines closer than this many days are "due soon"
pub const DUE_SOON_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Where a goal stands relative to its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeadlineStatus {
    NoDeadline,
    Upcoming { days_left: i64 },
    DueToday,
    Overdue { days: i64 },
}

impl DeadlineStatus {
    /// Classify a day count produced by [`days_until`]
    pub fn from_days_left(days_left: Option<i64>) -> Self {
        match days_left {
            None => Self::NoDeadline,
            Some(0) => Self::DueToday,
            Some(days) if days < 0 => Self::Overdue { days: -days },
            Some(days) => Self::Upcoming { days_left: days },
        }
    }

    /// Signed day count; negative when overdue
    pub fn days_left(&self) -> Option<i64> {
        match self {
            Self::NoDeadline => None,
            Self::Upcoming { days_left } => Some(*days_left),
            Self::DueToday => Some(0),
            Self::Overdue { days } => Some(-days),
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue { .. })
    }

    /// Deadline is today or less than a month away
    pub fn is_due_soon(&self) -> bool {
        match self {
            Self::DueToday => true,
            Self::Upcoming { days_left } => *days_left < DUE_SOON_DAYS,
            _ => false,
        }
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeadline => write!(f, "No deadline"),
            Self::Upcoming { days_left: 1 } => write!(f, "1 day left"),
            Self::Upcoming { days_left } => write!(f, "{} days left", days_left),
            Self::DueToday => write!(f, "Due today"),
            Self::Overdue { days: 1 } => write!(f, "Overdue by 1 day"),
            Self::Overdue { days } => write!(f, "Overdue by {} days", days),
        }
    }
}

/// Whole days from `now` until midnight of `deadline`, rounded up
pub fn days_until(deadline: chrono::NaiveDate, now: NaiveDateTime) -> i64 {
    let millis = (deadline.and_time(NaiveTime::MIN) - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Progress of one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: Option<SavingsGoalId>,
    pub name: String,
    pub current_amount: Money,
    pub target_amount: Money,
    /// Unclamped percentage; above 100 when overshot
    pub progress: f64,
    pub is_completed: bool,
    /// `target - current`; negative when overshot
    pub remaining: Money,
    pub deadline: DeadlineStatus,
}

impl GoalProgress {
    pub fn evaluate(goal: &SavingsGoal, now: NaiveDateTime) -> Self {
        let progress = goal.current_amount.percent_of(goal.target_amount);
        let days_left = goal.deadline.map(|deadline| days_until(deadline, now));

        Self {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            current_amount: goal.current_amount,
            target_amount: goal.target_amount,
            progress,
            is_completed: progress >= 100.0,
            remaining: goal.target_amount - goal.current_amount,
            deadline: DeadlineStatus::from_days_left(days_left),
        }
    }

    /// Progress capped at 100 for "percent complete" displays
    pub fn display_progress(&self) -> f64 {
        self.progress.min(100.0)
    }
}

/// Totals across all goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub goal_count: usize,
    pub completed_count: usize,
    pub total_saved: Money,
    pub total_target: Money,
    /// `100 * total_saved / total_target`
    pub overall_progress: f64,
}

impl SavingsSummary {
    pub fn from_progress(goals: &[GoalProgress]) -> Self {
        let total_saved: Money = goals.iter().map(|g| g.current_amount).sum();
        let total_target: Money = goals.iter().map(|g| g.target_amount).sum();

        Self {
            goal_count: goals.len(),
            completed_count: goals.iter().filter(|g| g.is_completed).count(),
            total_saved,
            total_target,
            overall_progress: total_saved.percent_of(total_target),
        }
    }
}

/// Evaluate every goal, preserving order
pub fn evaluate_goals(goals: &[SavingsGoal], now: NaiveDateTime) -> Vec<GoalProgress> {
    goals.iter().map(|g| GoalProgress::evaluate(g, now)).collect()
}
