//! ConfigLoader: assembles the layered configuration.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::AppConfig;
use crate::error::LedgerError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`AppConfig`] from defaults, files, and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global file,
    /// workspace `config/config.toml`, workspace `config/{env}.toml`,
    /// `CONTRACT_TRACKER__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<AppConfig, LedgerError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: AppConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, LedgerError> {
        if !path.exists() {
            return Err(LedgerError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config: AppConfig = builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
