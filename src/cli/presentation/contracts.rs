//! Contract presentation: numbered contract tables and transition messages.

use super::shared::{heading, new_table, status_label, timestamp};
use crate::model::{Contract, ContractStatus, Project};

/// Numbered contract table. Row numbers are the 1-based choices accepted by
/// `contract confirm` and `contract complete` when the list is filtered.
pub fn format_contract_list(
    title: &str,
    contracts: &[Contract],
    projects: &[Project],
    color: bool,
) -> String {
    if contracts.is_empty() {
        return format!("{}\n\nNo contracts.", heading(title, color));
    }
    format!(
        "{}\n{}",
        heading(title, color),
        contract_table(contracts, projects, color)
    )
}

pub(crate) fn contract_table(contracts: &[Contract], projects: &[Project], color: bool) -> String {
    let mut table = new_table(vec!["#", "Title", "Status", "Created", "Signed", "Project"]);
    for (i, contract) in contracts.iter().enumerate() {
        let signed = contract
            .signed_at
            .as_ref()
            .map(timestamp)
            .unwrap_or_else(|| "-".to_string());
        let project = contract
            .project_id
            .and_then(|id| projects.iter().find(|p| p.id == id))
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            contract.title.clone(),
            status_label(contract.status, color),
            timestamp(&contract.created_at),
            signed,
            project,
        ]);
    }
    table.to_string()
}

/// One-line report for a successful create, confirm, or complete.
pub fn format_transition(contract: &Contract) -> String {
    match contract.status {
        ContractStatus::Draft => format!(
            "Contract '{}' created as draft (id {})",
            contract.title, contract.id
        ),
        ContractStatus::Active => match contract.signed_at {
            Some(ref at) => format!(
                "Contract '{}' is now active, signed {}",
                contract.title,
                timestamp(at)
            ),
            None => format!("Contract '{}' is now active", contract.title),
        },
        ContractStatus::Completed => format!("Contract '{}' completed", contract.title),
    }
}
