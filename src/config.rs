//! Configuration System
//!
//! Layered configuration: built-in defaults, a user-level file, workspace
//! files, then `CONTRACT_TRACKER__*` environment variables. See
//! [`ConfigLoader`] for the exact order.

use crate::error::LedgerError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where records are kept
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal presentation
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Storage location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store directory; relative paths are resolved against the workspace root
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".contract-tracker/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StorageConfig {
    /// Absolute store directory for a workspace.
    pub fn resolve_path(&self, workspace_root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workspace_root.join(&self.path)
        }
    }
}

/// Terminal presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Colour status labels in tables
    #[serde(default = "default_true")]
    pub color: bool,

    /// Output format for listing commands when `--format` is not given
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

fn default_true() -> bool {
    true
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            color: true,
            default_format: default_output_format(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Storage(String),
    Logging(String),
    Shell(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Shell(msg) => write!(f, "Shell: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AppConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Store path cannot be empty".to_string(),
            ));
        }

        if let Err(e) = crate::logging::validate(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }

        if !matches!(self.shell.default_format.as_str(), "text" | "json") {
            errors.push(ValidationError::Shell(format!(
                "Invalid default format: {} (must be 'text' or 'json')",
                self.shell.default_format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one error.
    pub fn ensure_valid(&self) -> Result<(), LedgerError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            LedgerError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self)
            .map_err(|e| LedgerError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
