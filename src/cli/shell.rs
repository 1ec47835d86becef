//! Interactive menu over the lifecycle engine.
//!
//! Each action recomputes the list it offers, prints it numbered from 1, and
//! reads the operator's choice. Errors are reported and the menu comes back.

use dialoguer::{Input, Select};
use tracing::{debug, warn};

use crate::cli::map_error;
use crate::cli::presentation::{
    format_attachment, format_contract_list, format_overview, format_project_created,
    format_project_list, format_transition,
};
use crate::cli::route::{outcome_message, RunContext};
use crate::error::LedgerError;
use crate::lifecycle::{
    LifecycleEngine, NO_ACTIVE_CONTRACTS, NO_DRAFT_CONTRACTS, NO_ELIGIBLE_CONTRACTS, NO_ELIGIBLE_PROJECTS,
    PROJECT_NEEDS_CONTRACT,
};
use crate::model::ContractStatus;
use crate::selection;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateContract,
    ConfirmContract,
    CompleteContract,
    CreateProject,
    AttachContract,
    ListAll,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::CreateContract,
        MenuAction::ConfirmContract,
        MenuAction::CompleteContract,
        MenuAction::CreateProject,
        MenuAction::AttachContract,
        MenuAction::ListAll,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CreateContract => "Create a contract",
            MenuAction::ConfirmContract => "Confirm (sign) a draft contract",
            MenuAction::CompleteContract => "Complete an active contract",
            MenuAction::CreateProject => "Create a project",
            MenuAction::AttachContract => "Attach a contract to a project",
            MenuAction::ListAll => "List projects and contracts",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<MenuAction> {
        Self::ALL.get(index).copied()
    }
}

fn input_error(e: dialoguer::Error) -> LedgerError {
    LedgerError::InputError(format!("Failed to get user input: {}", e))
}

fn prompt_text(prompt: &str) -> Result<String, LedgerError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(input_error)
}

fn prompt_choice(prompt: &str) -> Result<usize, LedgerError> {
    let raw = prompt_text(prompt)?;
    selection::parse_choice(&raw)
}

/// Run the menu until the operator picks Exit.
pub fn run(ctx: &RunContext) -> Result<String, LedgerError> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    loop {
        let index = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let Some(action) = MenuAction::from_index(index) else {
            continue;
        };
        if action == MenuAction::Exit {
            break;
        }

        debug!(action = ?action, "Menu action selected");
        match perform(ctx, action) {
            Ok(message) => println!("{}\n", message),
            Err(e) => {
                warn!(action = ?action, error = %e, "Menu action failed");
                eprintln!("{}\n", map_error(&e));
            }
        }
    }
    Ok("Goodbye.".to_string())
}

/// Print a numbered listing, then read the operator's pick.
fn show_and_choose(listing: String, prompt: &str) -> Result<usize, LedgerError> {
    println!("{}", listing);
    prompt_choice(prompt)
}

fn perform(ctx: &RunContext, action: MenuAction) -> Result<String, LedgerError> {
    let engine = ctx.engine();
    let color = ctx.color();
    match action {
        MenuAction::CreateContract => {
            let title = prompt_text("Contract title")?;
            Ok(format_transition(&engine.create_contract(&title)?))
        }
        MenuAction::ConfirmContract => advance_flow(
            engine,
            ContractStatus::Draft,
            NO_DRAFT_CONTRACTS,
            color,
            show_and_choose,
        ),
        MenuAction::CompleteContract => advance_flow(
            engine,
            ContractStatus::Active,
            NO_ACTIVE_CONTRACTS,
            color,
            show_and_choose,
        ),
        MenuAction::CreateProject => {
            if !engine.project_creation_allowed()? {
                return Ok(PROJECT_NEEDS_CONTRACT.to_string());
            }
            let title = prompt_text("Project title")?;
            Ok(format_project_created(&engine.create_project(&title)?))
        }
        MenuAction::AttachContract => attach_flow(engine, color, show_and_choose),
        MenuAction::ListAll => Ok(format_overview(&engine.overview()?, color)),
        MenuAction::Exit => Ok(String::new()),
    }
}

/// Attach dialogue: offer eligible projects, then eligible contracts.
///
/// `choose` receives each rendered listing with its prompt and returns the
/// 1-based pick. An out-of-range project is rejected before contracts are
/// offered.
pub(crate) fn attach_flow(
    engine: &LifecycleEngine,
    color: bool,
    mut choose: impl FnMut(String, &str) -> Result<usize, LedgerError>,
) -> Result<String, LedgerError> {
    let projects = engine.eligible_projects()?;
    if projects.is_empty() {
        return Ok(NO_ELIGIBLE_PROJECTS.to_string());
    }
    let project_choice = choose(
        format_project_list("Projects without an active contract", &projects, color),
        "Project number",
    )?;
    selection::resolve(&projects, project_choice)?;

    let contracts = engine.eligible_contracts()?;
    if contracts.is_empty() {
        return Ok(NO_ELIGIBLE_CONTRACTS.to_string());
    }
    let contract_choice = choose(
        format_contract_list("Active contracts without a project", &contracts, &[], color),
        "Contract number",
    )?;

    Ok(outcome_message(
        engine.attach_selected(project_choice, contract_choice)?,
        |a| format_attachment(&a),
    ))
}

/// Confirm or complete dialogue over contracts currently in `from`.
pub(crate) fn advance_flow(
    engine: &LifecycleEngine,
    from: ContractStatus,
    empty_reason: &str,
    color: bool,
    mut choose: impl FnMut(String, &str) -> Result<usize, LedgerError>,
) -> Result<String, LedgerError> {
    let candidates = engine.list_by_status(from)?;
    if candidates.is_empty() {
        return Ok(empty_reason.to_string());
    }
    let choice = choose(
        format_contract_list(
            &format!("{} contracts", from.label()),
            &candidates,
            &engine.overview()?.projects,
            color,
        ),
        "Contract number",
    )?;
    let outcome = match from {
        ContractStatus::Draft => engine.confirm(choice)?,
        _ => engine.complete(choice)?,
    };
    Ok(outcome_message(outcome, |c| format_transition(&c)))
}
