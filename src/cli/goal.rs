//! Savings goal CLI commands

use clap::Subcommand;

use crate::display::goal::{format_goal, format_goal_list};
use crate::error::SpendPaceResult;
use crate::models::SavingsGoal;
use crate::reports::{evaluate_goals, GoalProgress, SavingsSummary};
use crate::storage::Storage;

use super::{parse_amount, parse_date_arg, CommandContext};

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(long)]
        current: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Change a goal, e.g. record how much has been saved
    Update {
        /// Goal ID (or unique prefix)
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// Amount saved so far
        #[arg(long)]
        current: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,
        /// Remove the deadline
        #[arg(long)]
        clear_deadline: bool,
    },

    /// List goals with progress and deadlines
    List,

    /// Delete a goal
    Delete {
        /// Goal ID (or unique prefix)
        id: String,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: GoalCommands,
) -> SpendPaceResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            current,
            deadline,
        } => {
            let mut goal = SavingsGoal::new(ctx.owner.clone(), name.trim(), parse_amount(&target)?);
            if let Some(current) = current {
                goal = goal.with_current(parse_amount(&current)?);
            }
            if let Some(deadline) = deadline {
                goal = goal.with_deadline(parse_date_arg(&deadline)?);
            }

            let goal = storage.goals.add(goal)?;
            storage.goals.save()?;

            println!("Created savings goal: {}", goal);
            if let Some(id) = &goal.id {
                println!("  ID: {}", id);
            }
        }

        GoalCommands::Update {
            id,
            name,
            target,
            current,
            deadline,
            clear_deadline,
        } => {
            if name.is_none()
                && target.is_none()
                && current.is_none()
                && deadline.is_none()
                && !clear_deadline
            {
                println!("No changes specified. Use --name, --target, --current, --deadline or --clear-deadline.");
                return Ok(());
            }

            let mut goal = storage.goals.find(&ctx.owner, &id)?;
            if let Some(name) = name {
                goal.name = name.trim().to_string();
            }
            if let Some(target) = target {
                goal.target_amount = parse_amount(&target)?;
            }
            if let Some(current) = current {
                goal.current_amount = parse_amount(&current)?;
            }
            if let Some(deadline) = deadline {
                goal.deadline = Some(parse_date_arg(&deadline)?);
            }
            if clear_deadline {
                goal.deadline = None;
            }

            let goal = storage.goals.update(goal)?;
            storage.goals.save()?;

            let progress = GoalProgress::evaluate(&goal, ctx.now);
            println!("Updated savings goal: {}", goal);
            println!("  {}", format_goal(&progress, ctx.currency()));
        }

        GoalCommands::List => {
            let goals = storage.goals.for_owner(&ctx.owner)?;
            let progress = evaluate_goals(&goals, ctx.now);
            let summary = SavingsSummary::from_progress(&progress);
            print!("{}", format_goal_list(&progress, &summary, ctx.currency()));
        }

        GoalCommands::Delete { id } => {
            let removed = storage.goals.delete(&ctx.owner, &id)?;
            storage.goals.save()?;
            println!("Deleted savings goal: {}", removed.name);
        }
    }

    Ok(())
}
