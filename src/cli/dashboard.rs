//! Dashboard command

use std::io::Write;

use crate::error::{SpendPaceError, SpendPaceResult};
use crate::export::{export_structured, OutputFormat};
use crate::reports::DashboardReport;
use crate::storage::Storage;

use super::CommandContext;

/// Print the dashboard in the requested format
pub fn handle_dashboard(
    storage: &Storage,
    ctx: &CommandContext,
    format: OutputFormat,
) -> SpendPaceResult<()> {
    let snapshot = storage.snapshot(&ctx.owner)?;
    let report = DashboardReport::generate(&snapshot, ctx.now, &ctx.settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !export_structured(&report, format, "dashboard", &mut out)? {
        out.write_all(report.format_terminal(ctx.currency()).as_bytes())
            .map_err(|e| SpendPaceError::Io(e.to_string()))?;
    }

    Ok(())
}
