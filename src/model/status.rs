//! Contract status: the closed set of lifecycle states and their display labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a contract.
///
/// Ordered and forward-only: `Draft < Active < Completed`. The state machine
/// reasons only about these variants; human-facing text comes from [`label`].
///
/// [`label`]: ContractStatus::label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Active,
    Completed,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Draft,
        ContractStatus::Active,
        ContractStatus::Completed,
    ];

    /// The status a contract moves to next, or `None` when terminal.
    pub fn next(self) -> Option<ContractStatus> {
        match self {
            ContractStatus::Draft => Some(ContractStatus::Active),
            ContractStatus::Active => Some(ContractStatus::Completed),
            ContractStatus::Completed => None,
        }
    }

    /// Stable machine name, used in config, JSON output and CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Active => "active",
            ContractStatus::Completed => "completed",
        }
    }

    /// Display text shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Draft => "Draft",
            ContractStatus::Active => "Active",
            ContractStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contract status '{0}' (expected draft, active, or completed)")]
pub struct ParseStatusError(String);

impl FromStr for ContractStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(ContractStatus::Draft),
            "active" => Ok(ContractStatus::Active),
            "completed" => Ok(ContractStatus::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
