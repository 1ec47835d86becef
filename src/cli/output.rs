//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{LedgerError, StorageError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &LedgerError) -> String {
    match e {
        LedgerError::StorageError(StorageError::IoError(io)) => format!(
            "{}\nhint: another contract-tracker process may be holding the store open",
            io
        ),
        other => other.to_string(),
    }
}
