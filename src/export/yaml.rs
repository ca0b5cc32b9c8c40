//! YAML export
//!
//! Same content as the JSON export, prefixed with a comment header.

use chrono::Local;
use serde::Serialize;
use std::io::Write;

use crate::error::{SpendPaceError, SpendPaceResult};

/// Write `value` as YAML under a short comment header
pub fn export_yaml<T: Serialize, W: Write>(value: &T, title: &str, writer: &mut W) -> SpendPaceResult<()> {
    let header = format!(
        "# SpendPace {}\n# Generated: {}\n# Amounts are in cents\n\n",
        title,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SpendPaceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, value)?;
    Ok(())
}
