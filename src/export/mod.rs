//! Machine-readable output for reports
//!
//! - JSON: for scripts and other tools
//! - YAML: for human-readable dumps
//!
//! CSV output of tabular reports lives with the reports themselves.

pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::error::SpendPaceResult;

pub use json::export_json;
pub use yaml::export_yaml;

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Text,
    Json,
    Yaml,
}

/// Write a serializable report in a structured format
///
/// Returns `Ok(false)` for [`OutputFormat::Text`], which each report
/// formats on its own.
pub fn export_structured<T, W>(value: &T, format: OutputFormat, title: &str, writer: &mut W) -> SpendPaceResult<bool>
where
    T: Serialize,
    W: Write,
{
    match format {
        OutputFormat::Text => Ok(false),
        OutputFormat::Json => export_json(value, writer).map(|_| true),
        OutputFormat::Yaml => export_yaml(value, title, writer).map(|_| true),
    }
}
