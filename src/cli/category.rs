//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::display::colors::{is_known_token, CATEGORY_PALETTE};
use crate::error::SpendPaceResult;
use crate::models::{Category, UNCATEGORIZED};
use crate::storage::Storage;

use super::CommandContext;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their limits
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Color token (e.g., "bg-teal-500")
        #[arg(long, default_value = "bg-blue-500")]
        color: String,
    },

    /// Rename or recolor a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color token
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    ///
    /// Its expenses are kept and show as uncategorized; its budget limit is
    /// removed.
    Delete {
        /// Category name or ID
        category: String,
    },
}

fn warn_unknown_color(color: &str) {
    if !is_known_token(color) {
        tracing::warn!(color = %color, "unknown color token, it will render in the default color");
        eprintln!(
            "Warning: unknown color '{}'. Known colors: {}",
            color,
            CATEGORY_PALETTE.join(", ")
        );
    }
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: CategoryCommands,
) -> SpendPaceResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories = storage.categories.for_owner(&ctx.owner)?;
            let budget = storage.budgets.get(&ctx.owner)?;
            print!(
                "{}",
                format_category_list(&categories, budget.as_ref(), ctx.currency())
            );
        }

        CategoryCommands::Add { name, color } => {
            warn_unknown_color(&color);

            let category = storage
                .categories
                .add(Category::new(ctx.owner.clone(), name.trim(), color))?;
            storage.categories.save()?;

            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
        } => {
            if name.is_none() && color.is_none() {
                println!("No changes specified. Use --name or --color.");
                return Ok(());
            }

            let mut target = storage.categories.resolve(&ctx.owner, &category)?;
            if let Some(name) = name {
                target.name = name.trim().to_string();
            }
            if let Some(color) = color {
                warn_unknown_color(&color);
                target.color = color;
            }

            let updated = storage.categories.update(target)?;
            storage.categories.save()?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let removed = storage.categories.delete(&ctx.owner, &category)?;
            storage.categories.save()?;

            if let Some(mut budget) = storage.budgets.get(&ctx.owner)? {
                if budget.clear_category_limit(&removed.id).is_some() {
                    storage.budgets.upsert(budget)?;
                    storage.budgets.save()?;
                }
            }

            println!("Deleted category: {}", removed.name);
            println!("Its expenses now show as {}.", UNCATEGORIZED);
        }
    }

    Ok(())
}
