//! Expense CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::expense::format_expense_list;
use crate::error::{SpendPaceError, SpendPaceResult};
use crate::models::category::category_name;
use crate::models::Expense;
use crate::reports::expense_list::export_expenses_csv;
use crate::reports::{sort_expenses, ExpenseFilter, SortConfig, SortDirection, SortKey};
use crate::storage::Storage;

use super::{parse_amount, parse_instant_arg, CommandContext};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "250" or "1,250.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name or ID
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Date (YYYY-MM-DD or YYYY-MM-DDTHH:MM); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Column to sort by
        #[arg(long, value_enum, default_value_t = SortKey::Date)]
        sort: SortKey,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Only this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Only expenses whose category no longer exists
        #[arg(long, conflicts_with = "category")]
        uncategorized: bool,
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Description contains (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,
        /// Write the listing to a CSV file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Change an expense
    Edit {
        /// Expense ID (or unique prefix)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (or unique prefix)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: ExpenseCommands,
) -> SpendPaceResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = storage.categories.resolve(&ctx.owner, &category)?;
            let date = match date {
                Some(d) => parse_instant_arg(&d)?,
                None => ctx.now,
            };

            let expense = Expense::new(ctx.owner.clone(), amount, description, category.id.clone(), date);
            let saved = storage.expenses.add(expense, ctx.now)?;
            storage.expenses.save()?;

            println!("Added expense: {}", saved);
            println!("  Category: {}", category.name);
            if let Some(id) = &saved.id {
                println!("  ID: {}", id);
            }
        }

        ExpenseCommands::List {
            sort,
            asc,
            category,
            uncategorized,
            from,
            to,
            search,
            limit,
            output,
        } => {
            let expenses = storage.expenses.for_owner(&ctx.owner)?;
            let categories = storage.categories.for_owner(&ctx.owner)?;

            let filter = ExpenseFilter {
                from: from.as_deref().map(parse_instant_arg).transpose()?,
                to: to.as_deref().map(parse_instant_arg).transpose()?,
                category: category
                    .map(|c| storage.categories.resolve(&ctx.owner, &c))
                    .transpose()?
                    .map(|c| c.id),
                description_contains: search,
                uncategorized_only: uncategorized,
                ..Default::default()
            };

            let direction = if asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            };
            let config = SortConfig::new(sort, direction);

            let matching: Vec<Expense> = filter
                .apply(&expenses, &categories)
                .into_iter()
                .cloned()
                .collect();
            let mut sorted = sort_expenses(&matching, config);
            if let Some(limit) = limit {
                sorted.truncate(limit);
            }

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        SpendPaceError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    export_expenses_csv(&sorted, &categories, file)?;
                    println!("Exported {} expenses to {}", sorted.len(), path.display());
                }
                None => {
                    print!(
                        "{}",
                        format_expense_list(
                            &sorted,
                            &categories,
                            config,
                            ctx.currency(),
                            &ctx.settings.date_format,
                        )
                    );
                }
            }
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            if amount.is_none() && description.is_none() && category.is_none() && date.is_none() {
                println!("No changes specified. Use --amount, --description, --category or --date.");
                return Ok(());
            }

            let mut expense = storage.expenses.find(&ctx.owner, &id)?;
            if let Some(amount) = amount {
                expense.amount = parse_amount(&amount)?;
            }
            if let Some(description) = description {
                expense.description = description;
            }
            if let Some(category) = category {
                expense.category = storage.categories.resolve(&ctx.owner, &category)?.id;
            }
            if let Some(date) = date {
                expense.date = parse_instant_arg(&date)?;
            }

            let updated = storage.expenses.update(expense)?;
            storage.expenses.save()?;

            let categories = storage.categories.for_owner(&ctx.owner)?;
            println!("Updated expense: {}", updated);
            println!("  Category: {}", category_name(&categories, &updated.category));
        }

        ExpenseCommands::Delete { id } => {
            let removed = storage.expenses.delete(&ctx.owner, &id)?;
            storage.expenses.save()?;
            println!("Deleted expense: {}", removed);
        }
    }

    Ok(())
}
