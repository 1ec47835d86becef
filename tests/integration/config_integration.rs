//! Integration tests for configuration loading through the run context

use contract_tracker::cli::{Commands, ConfigCommands, RunContext};
use contract_tracker::config::ConfigLoader;
use contract_tracker::error::LedgerError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_explicit_config_file_sets_store_path() {
    let workspace = TempDir::new().unwrap();
    let config_file = workspace.path().join("tracker.toml");
    fs::write(
        &config_file,
        "[storage]\npath = \"data/ledger\"\n\n[shell]\ncolor = false\n",
    )
    .unwrap();

    let ctx = RunContext::new(
        workspace.path().to_path_buf(),
        Some(config_file),
        None,
    )
    .unwrap();
    assert_eq!(
        ctx.store_path(),
        Some(workspace.path().join("data/ledger").as_path())
    );
    assert!(!ctx.config().shell.color);
    assert!(workspace.path().join("data/ledger").is_dir());
}

#[test]
fn test_store_flag_overrides_configured_path() {
    let workspace = TempDir::new().unwrap();
    let config_file = workspace.path().join("tracker.toml");
    fs::write(&config_file, "[storage]\npath = \"configured\"\n").unwrap();
    let explicit = workspace.path().join("explicit");

    let ctx = RunContext::new(
        workspace.path().to_path_buf(),
        Some(config_file),
        Some(explicit.clone()),
    )
    .unwrap();
    assert_eq!(ctx.store_path(), Some(explicit.as_path()));
    assert!(!workspace.path().join("configured").exists());
}

#[test]
fn test_invalid_config_is_rejected_before_opening_store() {
    let workspace = TempDir::new().unwrap();
    let config_file = workspace.path().join("tracker.toml");
    fs::write(&config_file, "[shell]\ndefault_format = \"yaml\"\n").unwrap();

    let err = match RunContext::new(workspace.path().to_path_buf(), Some(config_file), None) {
        Ok(_) => panic!("invalid config should fail"),
        Err(e) => e,
    };
    assert!(matches!(err, LedgerError::ConfigError(ref m) if m.contains("default format")));
    assert!(!workspace.path().join(".contract-tracker").exists());
}

#[test]
fn test_config_show_reflects_file_values() {
    let workspace = TempDir::new().unwrap();
    let config_file = workspace.path().join("tracker.toml");
    fs::write(
        &config_file,
        "[logging]\nlevel = \"warn\"\noutput = \"stderr\"\n",
    )
    .unwrap();
    let loaded = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(loaded.storage.path, PathBuf::from(".contract-tracker/store"));

    let ctx = RunContext::new(
        workspace.path().to_path_buf(),
        Some(config_file),
        None,
    )
    .unwrap();
    let shown = ctx
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(shown.contains("level = \"warn\""));
    assert!(shown.contains("output = \"stderr\""));
}
