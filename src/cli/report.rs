//! Report CLI commands

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::report::format_bar;
use crate::error::{SpendPaceError, SpendPaceResult};
use crate::export::{export_structured, OutputFormat};
use crate::models::{Expense, MonthPeriod};
use crate::reports::{monthly_trend, SpendingReport};
use crate::storage::Storage;

use super::CommandContext;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Month-by-month spending totals
    Trend {
        /// Number of months, ending with the current one
        #[arg(short, long)]
        months: Option<u32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Spending by category
    Spending {
        /// Only this month (YYYY-MM); all time when omitted
        #[arg(long)]
        month: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the breakdown to a CSV file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    ctx: &CommandContext,
    cmd: ReportCommands,
) -> SpendPaceResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let write_err = |e: std::io::Error| SpendPaceError::Io(e.to_string());

    match cmd {
        ReportCommands::Trend { months, format } => {
            let months = months.unwrap_or(ctx.settings.trend_months);
            let expenses = storage.expenses.for_owner(&ctx.owner)?;
            let trend = monthly_trend(&expenses, ctx.now, months);

            if export_structured(&trend, format, "spending trend", &mut out)? {
                return Ok(());
            }

            let peak = trend
                .iter()
                .map(|m| m.total.as_f64())
                .fold(0.0_f64, f64::max);
            writeln!(out, "Spending Trend ({} months)", months).map_err(write_err)?;
            writeln!(out, "{}", "=".repeat(50)).map_err(write_err)?;
            for month in &trend {
                writeln!(
                    out,
                    "{} {:<4} {} {}",
                    month.period,
                    month.label,
                    format_bar(month.total.as_f64(), peak, 24),
                    month.total.format_with_symbol(ctx.currency())
                )
                .map_err(write_err)?;
            }
        }

        ReportCommands::Spending {
            month,
            format,
            output,
        } => {
            let mut expenses = storage.expenses.for_owner(&ctx.owner)?;
            if let Some(month) = &month {
                let period = MonthPeriod::parse(month)
                    .map_err(|e| SpendPaceError::Validation(e.to_string()))?;
                expenses.retain(|e: &Expense| period.contains(e.date));
            }
            let categories = storage.categories.for_owner(&ctx.owner)?;
            let report = SpendingReport::generate(&expenses, &categories);

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    SpendPaceError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?;
                report.export_csv(file)?;
                writeln!(out, "Exported spending report to {}", path.display()).map_err(write_err)?;
                return Ok(());
            }

            if !export_structured(&report, format, "spending report", &mut out)? {
                write!(out, "{}", report.format_terminal(ctx.currency())).map_err(write_err)?;
            }
        }
    }

    Ok(())
}
