//! One-shot subcommands routed through the run context

use super::test_utils::plain_context;
use clap::Parser;
use contract_tracker::cli::{Cli, Commands, ContractCommands, ProjectCommands};
use contract_tracker::error::LedgerError;
use contract_tracker::lifecycle::{NO_ACTIVE_CONTRACTS, NO_ELIGIBLE_PROJECTS};
use contract_tracker::model::ContractStatus;

fn parse(args: &[&str]) -> Commands {
    let mut argv = vec!["contract-tracker"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
        .unwrap()
        .command
        .expect("subcommand")
}

#[test]
fn test_scripted_scenario_via_commands() {
    let ctx = plain_context();

    let out = ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    assert!(out.contains("'A' created as draft"));
    ctx.execute(&parse(&["contract", "confirm", "1"])).unwrap();
    let out = ctx.execute(&parse(&["project", "create", "P1"])).unwrap();
    assert!(out.contains("Project 'P1' created"));

    let out = ctx.execute(&parse(&["project", "attach", "1", "1"])).unwrap();
    assert_eq!(out, "Contract 'A' attached to project 'P1'");

    ctx.execute(&parse(&["contract", "create", "B"])).unwrap();
    ctx.execute(&parse(&["contract", "confirm", "1"])).unwrap();
    let out = ctx.execute(&parse(&["project", "attach", "1", "1"])).unwrap();
    assert_eq!(out, NO_ELIGIBLE_PROJECTS);

    let out = ctx.execute(&parse(&["list"])).unwrap();
    assert!(out.contains("Projects"));
    assert!(out.contains("Contracts"));
    assert!(out.contains("Active"));
}

#[test]
fn test_complete_with_nothing_active_reports_reason() {
    let ctx = plain_context();
    ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    let out = ctx.execute(&parse(&["contract", "complete", "1"])).unwrap();
    assert_eq!(out, NO_ACTIVE_CONTRACTS);
}

#[test]
fn test_out_of_range_confirm_is_an_error() {
    let ctx = plain_context();
    ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    let err = ctx
        .execute(&parse(&["contract", "confirm", "3"]))
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::InvalidSelection {
            choice: 3,
            available: 1
        }
    ));
    let drafts = ctx.engine().list_by_status(ContractStatus::Draft).unwrap();
    assert_eq!(drafts.len(), 1);
}

#[test]
fn test_eligible_json_lists_both_sides() {
    let ctx = plain_context();
    ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    ctx.execute(&parse(&["contract", "confirm", "1"])).unwrap();
    ctx.execute(&parse(&["project", "create", "P1"])).unwrap();

    let out = ctx
        .execute(&Commands::Project {
            command: ProjectCommands::Eligible {
                format: Some("json".to_string()),
            },
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["projects"][0]["title"], "P1");
    assert_eq!(value["contracts"][0]["title"], "A");
    assert_eq!(value["contracts"][0]["status"], "active");
}

#[test]
fn test_overview_json_includes_project_reference() {
    let ctx = plain_context();
    ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    ctx.execute(&parse(&["contract", "confirm", "1"])).unwrap();
    ctx.execute(&parse(&["project", "create", "P1"])).unwrap();
    ctx.execute(&parse(&["project", "attach", "1", "1"])).unwrap();

    let out = ctx.execute(&parse(&["list", "--format", "json"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let project_id = value["projects"][0]["id"].clone();
    assert_eq!(value["contracts"][0]["project_id"], project_id);
    assert!(value["contracts"][0]["signed_at"].is_string());
}

#[test]
fn test_status_filter_numbers_match_confirm_positions() {
    let ctx = plain_context();
    for title in ["A", "B", "C"] {
        ctx.execute(&parse(&["contract", "create", title])).unwrap();
    }
    let listing = ctx
        .execute(&Commands::Contract {
            command: ContractCommands::List {
                status: Some(ContractStatus::Draft),
                format: None,
            },
        })
        .unwrap();
    assert!(listing.starts_with("Draft contracts"));

    let out = ctx.execute(&parse(&["contract", "confirm", "2"])).unwrap();
    assert!(out.starts_with("Contract 'B' is now active"));
}

#[test]
fn test_duplicate_project_via_command() {
    let ctx = plain_context();
    ctx.execute(&parse(&["contract", "create", "A"])).unwrap();
    ctx.execute(&parse(&["project", "create", "P1"])).unwrap();
    let err = ctx
        .execute(&parse(&["project", "create", "P1"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "Project 'P1' already exists; nothing was saved");
}
