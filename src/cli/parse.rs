//! CLI parse: clap types for the contract tracker. No behavior; definitions only.

use crate::model::ContractStatus;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Contract tracker - contracts, their lifecycle, and the projects they belong to
#[derive(Parser)]
#[command(name = "contract-tracker")]
#[command(about = "Track contracts through draft, active, and completed, and attach them to projects")]
#[command(version)]
pub struct Cli {
    /// Command to run; the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store directory (overrides storage.path from configuration)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,
    /// Contract lifecycle commands
    Contract {
        #[command(subcommand)]
        command: ContractCommands,
    },
    /// Project commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// List all projects and contracts
    List {
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ContractCommands {
    /// Create a contract in draft
    Create {
        /// Contract title
        title: String,
    },
    /// Sign a draft contract, making it active
    Confirm {
        /// Position in `contract list --status draft` (1-based)
        number: usize,
    },
    /// Complete an active contract
    Complete {
        /// Position in `contract list --status active` (1-based)
        number: usize,
    },
    /// List contracts
    List {
        /// Only contracts in this status (draft, active, completed)
        #[arg(long)]
        status: Option<ContractStatus>,
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProjectCommands {
    /// Create a project (requires at least one contract)
    Create {
        /// Project title, unique across projects
        title: String,
    },
    /// Attach an active, unattached contract to a project
    Attach {
        /// Position in the eligible project list (1-based)
        project: usize,
        /// Position in the eligible contract list (1-based)
        contract: usize,
    },
    /// Show projects and contracts eligible for attachment
    Eligible {
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}
