//! Error types for the contract tracker.

use crate::model::ContractStatus;
use crate::types::{ContractId, ProjectId};
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Contract not found: {0}")]
    ContractNotFound(ContractId),

    #[error("A project titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Record encoding error: {0}")]
    Codec(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by the lifecycle engine and the shell.
///
/// None of these are fatal: the interactive shell prints the message and
/// returns to the menu.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Project '{0}' already exists; nothing was saved")]
    DuplicateProjectTitle(String),

    #[error("Invalid selection {choice}: choose a number between 1 and {available}")]
    InvalidSelection { choice: usize, available: usize },

    #[error(
        "Contract {contract_id} cannot move on from '{expected}': it is currently '{actual}'"
    )]
    InvalidTransition {
        contract_id: ContractId,
        expected: ContractStatus,
        actual: ContractStatus,
    },

    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Contract not found: {0}")]
    ContractNotFound(ContractId),

    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Storage error: {0}")]
    StorageError(StorageError),
}

impl From<StorageError> for LedgerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateTitle(title) => LedgerError::DuplicateProjectTitle(title),
            StorageError::ContractNotFound(id) => LedgerError::ContractNotFound(id),
            other => LedgerError::StorageError(other),
        }
    }
}

impl From<config::ConfigError> for LedgerError {
    fn from(err: config::ConfigError) -> Self {
        LedgerError::ConfigError(err.to_string())
    }
}
