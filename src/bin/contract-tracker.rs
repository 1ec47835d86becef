//! Contract Tracker CLI Binary
//!
//! Interactive menu and one-shot subcommands for the contract ledger.

use clap::Parser;
use contract_tracker::cli::{Cli, Commands, RunContext};
use contract_tracker::config::ConfigLoader;
use contract_tracker::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Contract tracker starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone(), cli.store.clone())
    {
        Ok(ctx) => {
            info!("CLI context initialized");
            ctx
        }
        Err(e) => {
            error!("Error opening store: {}", e);
            eprintln!("{}", contract_tracker::cli::map_error(&e));
            process::exit(1);
        }
    };

    let command = cli.command.clone().unwrap_or(Commands::Shell);
    let result = context.execute(&command);

    if let Err(e) = context.shutdown() {
        error!("Failed to flush store: {}", e);
        eprintln!("{}", contract_tracker::cli::map_error(&e));
        process::exit(1);
    }

    match result {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", contract_tracker::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    if config.enabled && config.output == "file" {
        let resolved = contract_tracker::logging::resolve_log_file_path(
            cli.log_file.clone(),
            config.file.clone(),
            Some(cli.workspace.as_path()),
        );
        if let Ok(path) = resolved {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
