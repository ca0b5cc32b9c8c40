//! Savings goal display formatting

use crate::reports::{GoalProgress, SavingsSummary};

use super::report::{format_bar, format_percentage};

/// Format one goal as two lines: name and amounts, then a progress bar
pub fn format_goal(goal: &GoalProgress, currency: &str) -> String {
    let id = goal.goal_id.as_ref().map(|id| id.short()).unwrap_or("-");
    let status = if goal.is_completed {
        "Completed".to_string()
    } else {
        goal.deadline.to_string()
    };

    format!(
        "{:8} {}  {} / {}  ({})\n         {} {}\n",
        id,
        goal.name,
        goal.current_amount.format_with_symbol(currency),
        goal.target_amount.format_with_symbol(currency),
        status,
        format_bar(goal.display_progress(), 100.0, 20),
        format_percentage(goal.progress)
    )
}

/// Format every goal followed by the overall summary
pub fn format_goal_list(goals: &[GoalProgress], summary: &SavingsSummary, currency: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal(goal, currency));
    }
    output.push_str(&format!(
        "\nSaved {} of {} ({}), {} of {} goals completed\n",
        summary.total_saved.format_with_symbol(currency),
        summary.total_target.format_with_symbol(currency),
        format_percentage(summary.overall_progress),
        summary.completed_count,
        summary.goal_count
    ));
    output
}
