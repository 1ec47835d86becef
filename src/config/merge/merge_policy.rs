//! Built-in defaults every layered configuration starts from.

use crate::config::{ShellConfig, StorageConfig};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Defaults come from the typed `Default` impls so the two never drift.
/// Later sources override earlier ones key by key; tables merge rather than
/// replace, so a workspace file may set `storage.path` alone.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let storage = StorageConfig::default();
    let shell = ShellConfig::default();
    Config::builder()
        .set_default("storage.path", storage.path.to_string_lossy().into_owned())?
        .set_default("shell.color", shell.color)?
        .set_default("shell.default_format", shell.default_format)
}
