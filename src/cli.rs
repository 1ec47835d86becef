//! CLI domain: parse, route, help, output, presentation, and the interactive shell.
//! No lifecycle rules live here; the single route table dispatches to the engine.

mod help;
mod output;
mod parse;
mod presentation;
mod route;
mod shell;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, ContractCommands, ProjectCommands};
pub use presentation::{format_json, OutputFormat};
pub use route::RunContext;
pub use shell::MenuAction;
