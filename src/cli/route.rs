//! CLI route: single route table and run context. Dispatches to the lifecycle engine and presentation.

use crate::config::{AppConfig, ConfigLoader};
use crate::error::LedgerError;
use crate::lifecycle::{LifecycleEngine, Outcome};
use crate::store::{RecordStore, SledRecordStore};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::cli::command_name;
use crate::cli::parse::{Commands, ConfigCommands, ContractCommands, ProjectCommands};
use crate::cli::presentation::{
    format_attachment, format_contract_list, format_eligibility, format_json, format_overview,
    format_project_created, format_transition, OutputFormat,
};
use crate::cli::shell;

/// Runtime context for CLI execution: effective configuration and the engine
/// over an open store. Built from workspace path and optional config path
/// using ConfigLoader only.
pub struct RunContext {
    engine: LifecycleEngine,
    config: AppConfig,
    store_path: Option<PathBuf>,
}

impl RunContext {
    /// Load configuration, open the store, and build the engine.
    ///
    /// `store_override` (the `--store` flag) replaces `storage.path`.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        store_override: Option<PathBuf>,
    ) -> Result<Self, LedgerError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.ensure_valid()?;

        let store_path = match store_override {
            Some(path) if path.is_absolute() => path,
            Some(path) => workspace_root.join(path),
            None => config.storage.resolve_path(&workspace_root),
        };
        std::fs::create_dir_all(&store_path)
            .map_err(|e| LedgerError::StorageError(crate::error::StorageError::IoError(e)))?;

        let store = SledRecordStore::new(&store_path)?;
        info!(store = %store_path.display(), "Store opened");

        Ok(Self {
            engine: LifecycleEngine::new(Arc::new(store)),
            config,
            store_path: Some(store_path),
        })
    }

    /// Build a context over an already open store.
    pub fn with_store(store: Arc<dyn RecordStore>, config: AppConfig) -> Self {
        Self {
            engine: LifecycleEngine::new(store),
            config,
            store_path: None,
        }
    }

    pub fn engine(&self) -> &LifecycleEngine {
        &self.engine
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Store directory, when the context opened it from disk.
    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, LedgerError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = %name, "Command started");

        let result = self.execute_inner(command);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = %name, elapsed_ms, "Command finished"),
            Err(e) => warn!(command = %name, elapsed_ms, error = %e, "Command failed"),
        }
        result
    }

    /// Commit outstanding writes before the process exits.
    pub fn shutdown(&self) -> Result<(), LedgerError> {
        self.engine.store().flush()?;
        debug!("Store flushed");
        Ok(())
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, LedgerError> {
        match command {
            Commands::Shell => shell::run(self),
            Commands::Contract { command } => self.handle_contract_command(command),
            Commands::Project { command } => self.handle_project_command(command),
            Commands::List { format } => {
                let overview = self.engine.overview()?;
                match self.output_format(format.as_deref())? {
                    OutputFormat::Json => format_json(&overview),
                    OutputFormat::Text => Ok(format_overview(&overview, self.color())),
                }
            }
            Commands::Config { command } => match command {
                ConfigCommands::Show => self.config.to_toml(),
            },
        }
    }

    fn handle_contract_command(&self, command: &ContractCommands) -> Result<String, LedgerError> {
        match command {
            ContractCommands::Create { title } => {
                let contract = self.engine.create_contract(title)?;
                Ok(format_transition(&contract))
            }
            ContractCommands::Confirm { number } => {
                Ok(outcome_message(self.engine.confirm(*number)?, |c| {
                    format_transition(&c)
                }))
            }
            ContractCommands::Complete { number } => {
                Ok(outcome_message(self.engine.complete(*number)?, |c| {
                    format_transition(&c)
                }))
            }
            ContractCommands::List { status, format } => {
                let overview = self.engine.overview()?;
                let (title, contracts) = match status {
                    Some(status) => (
                        format!("{} contracts", status.label()),
                        self.engine.list_by_status(*status)?,
                    ),
                    None => ("Contracts".to_string(), overview.contracts.clone()),
                };
                match self.output_format(format.as_deref())? {
                    OutputFormat::Json => format_json(&contracts),
                    OutputFormat::Text => Ok(format_contract_list(
                        &title,
                        &contracts,
                        &overview.projects,
                        self.color(),
                    )),
                }
            }
        }
    }

    fn handle_project_command(&self, command: &ProjectCommands) -> Result<String, LedgerError> {
        match command {
            ProjectCommands::Create { title } => {
                let project = self.engine.create_project(title)?;
                Ok(format_project_created(&project))
            }
            ProjectCommands::Attach { project, contract } => Ok(outcome_message(
                self.engine.attach_selected(*project, *contract)?,
                |a| format_attachment(&a),
            )),
            ProjectCommands::Eligible { format } => {
                let projects = self.engine.eligible_projects()?;
                let contracts = self.engine.eligible_contracts()?;
                match self.output_format(format.as_deref())? {
                    OutputFormat::Json => format_json(&json!({
                        "projects": projects,
                        "contracts": contracts,
                    })),
                    OutputFormat::Text => {
                        Ok(format_eligibility(&projects, &contracts, self.color()))
                    }
                }
            }
        }
    }

    fn output_format(&self, requested: Option<&str>) -> Result<OutputFormat, LedgerError> {
        OutputFormat::resolve(requested, &self.config.shell.default_format)
    }

    pub(crate) fn color(&self) -> bool {
        self.config.shell.color
    }
}

/// Render an outcome: the done message, or the reason nothing happened.
pub(crate) fn outcome_message<T>(outcome: Outcome<T>, done: impl FnOnce(T) -> String) -> String {
    match outcome {
        Outcome::Done(value) => done(value),
        Outcome::NothingAvailable(reason) => reason,
    }
}
