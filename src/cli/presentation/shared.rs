//! Shared presentation: output format selection, headings, status labels, and tables.

use crate::error::LedgerError;
use crate::model::ContractStatus;
use chrono::{DateTime, Utc};
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::str::FromStr;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Explicit `--format` wins over the configured default.
    pub fn resolve(requested: Option<&str>, default: &str) -> Result<Self, LedgerError> {
        requested.unwrap_or(default).parse()
    }
}

impl FromStr for OutputFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LedgerError::InputError(format!(
                "Unknown format '{}' (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LedgerError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| LedgerError::OutputError(format!("Failed to render JSON: {}", e)))
}

pub(crate) fn heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

pub(crate) fn status_label(status: ContractStatus, color: bool) -> String {
    let label = status.label();
    if !color {
        return label.to_string();
    }
    match status {
        ContractStatus::Draft => label.yellow().to_string(),
        ContractStatus::Active => label.green().to_string(),
        ContractStatus::Completed => label.dimmed().to_string(),
    }
}

pub(crate) fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(header);
    table
}
