//! CLI command names used in log fields (e.g. "contract.confirm", "project.attach").

use crate::cli::parse::{Commands, ConfigCommands, ContractCommands, ProjectCommands};

/// Dotted command name for structured logging.
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Shell => "shell".to_string(),
        Commands::Contract { command } => format!("contract.{}", contract_command_name(command)),
        Commands::Project { command } => format!("project.{}", project_command_name(command)),
        Commands::List { .. } => "list".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn contract_command_name(command: &ContractCommands) -> &'static str {
    match command {
        ContractCommands::Create { .. } => "create",
        ContractCommands::Confirm { .. } => "confirm",
        ContractCommands::Complete { .. } => "complete",
        ContractCommands::List { .. } => "list",
    }
}

pub fn project_command_name(command: &ProjectCommands) -> &'static str {
    match command {
        ProjectCommands::Create { .. } => "create",
        ProjectCommands::Attach { .. } => "attach",
        ProjectCommands::Eligible { .. } => "eligible",
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show => "show",
    }
}
