//! Budget CLI commands
//!
//! Setting the monthly ceiling and per-category ceilings, and showing how
//! the current month measures up against them.

use clap::Subcommand;

use crate::display::colors::paint_band;
use crate::display::report::{format_bar, format_percentage};
use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::budget::monthly_limit_or;
use crate::models::{Money, MonthWindow};
use crate::reports::spending::{total_spent, total_where};
use crate::reports::{evaluate_category_budgets, BudgetPacing};
use crate::storage::Storage;

use super::{parse_amount, CommandContext};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show limits and this month's utilization
    Show,

    /// Set the monthly limit and/or category limits
    Set {
        /// Monthly limit
        #[arg(short, long)]
        monthly: Option<String>,
        /// Remove the monthly limit (the default applies again)
        #[arg(long, conflicts_with = "monthly")]
        clear_monthly: bool,
        /// Category limit as NAME=AMOUNT (repeatable)
        #[arg(short, long = "category", value_name = "NAME=AMOUNT")]
        categories: Vec<String>,
        /// Remove the limit of a category (repeatable)
        #[arg(long, value_name = "NAME")]
        clear_category: Vec<String>,
    },
}

/// Split "NAME=AMOUNT" at the last '='
fn parse_category_limit(input: &str) -> SpendPaceResult<(&str, Money)> {
    let (name, amount) = input.rsplit_once('=').ok_or_else(|| {
        SpendPaceError::Validation(format!("Expected NAME=AMOUNT, got '{}'", input))
    })?;
    Ok((name.trim(), parse_amount(amount)?))
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: BudgetCommands,
) -> SpendPaceResult<()> {
    match cmd {
        BudgetCommands::Show => show_budget(storage, ctx),

        BudgetCommands::Set {
            monthly,
            clear_monthly,
            categories,
            clear_category,
        } => {
            if monthly.is_none() && !clear_monthly && categories.is_empty() && clear_category.is_empty() {
                return Err(SpendPaceError::Validation(
                    "Nothing to set. Use --monthly, --category NAME=AMOUNT or a --clear option".into(),
                ));
            }

            let mut budget = storage.budgets.get_or_default(&ctx.owner)?;

            if let Some(monthly) = monthly {
                budget.monthly_limit = Some(parse_amount(&monthly)?);
            }
            if clear_monthly {
                budget.monthly_limit = None;
            }

            for entry in &categories {
                let (name, limit) = parse_category_limit(entry)?;
                let category = storage.categories.resolve(&ctx.owner, name)?;
                budget.set_category_limit(category.id, limit);
                println!("  {}: {}", category.name, limit.format_with_symbol(ctx.currency()));
            }
            for name in &clear_category {
                let category = storage.categories.resolve(&ctx.owner, name)?;
                budget.clear_category_limit(&category.id);
                println!("  {}: cleared", category.name);
            }

            storage.budgets.upsert(budget.clone())?;
            storage.budgets.save()?;

            let effective = budget.effective_monthly_limit(ctx.settings.default_monthly_budget);
            println!(
                "Budget saved. Monthly limit: {}",
                effective.format_with_symbol(ctx.currency())
            );
            Ok(())
        }
    }
}

fn show_budget(storage: &Storage, ctx: &CommandContext) -> SpendPaceResult<()> {
    let snapshot = storage.snapshot(&ctx.owner)?;
    let window = MonthWindow::containing(ctx.now);
    let currency = ctx.currency();

    let budget = snapshot.budget.as_ref();
    let limit = monthly_limit_or(budget, ctx.settings.default_monthly_budget);
    let set_explicitly = budget
        .and_then(|b| b.monthly_limit)
        .map_or(false, |m| !m.is_zero());

    let pacing = BudgetPacing::calculate(
        total_spent(&snapshot.expenses),
        total_where(&snapshot.expenses, |e| window.contains_to_date(e.date)),
        limit,
        window.day_counts(),
    );

    println!("Budget for {}", window.period());
    println!("{}", "=".repeat(50));
    println!(
        "Monthly limit:  {}{}",
        limit.format_with_symbol(currency),
        if set_explicitly { "" } else { " (default)" }
    );
    println!(
        "Spent:          {} of limit  {}",
        paint_band(&format_percentage(pacing.budget_percentage), pacing.band),
        format_bar(pacing.display_percentage(), 100.0, 20)
    );
    println!(
        "Remaining:      {}",
        pacing.remaining_budget.format_with_symbol(currency)
    );
    println!(
        "Left per day:   {}{:.2} over {} days",
        currency, pacing.daily_budget_remaining, pacing.days.remaining
    );

    let statuses = evaluate_category_budgets(
        &snapshot.expenses,
        &snapshot.categories,
        budget,
        &window,
    );
    if statuses.is_empty() {
        println!();
        println!("No category limits set. Use 'spendpace budget set --category NAME=AMOUNT'.");
        return Ok(());
    }

    println!();
    println!("{:<20} {:>12} {:>12} {:>8}", "Category", "Spent", "Limit", "Used");
    println!("{}", "-".repeat(56));
    for status in statuses {
        println!(
            "{:<20} {:>12} {:>12} {:>8}  {}",
            status.name,
            status.spent.format_with_symbol(currency),
            status.limit.format_with_symbol(currency),
            format_percentage(status.percentage),
            paint_band(&status.band.to_string(), status.band)
        );
    }

    Ok(())
}
