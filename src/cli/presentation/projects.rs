//! Project presentation: overview, eligibility lists, and attach results.

use super::contracts::contract_table;
use super::shared::{heading, new_table, timestamp};
use crate::lifecycle::{Attachment, Overview};
use crate::model::{Contract, Project};

fn project_table(projects: &[Project]) -> String {
    let mut table = new_table(vec!["#", "Title", "Created"]);
    for (i, project) in projects.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            project.title.clone(),
            timestamp(&project.created_at),
        ]);
    }
    table.to_string()
}

/// Numbered project table under a heading.
pub fn format_project_list(title: &str, projects: &[Project], color: bool) -> String {
    if projects.is_empty() {
        return format!("{}\n\nNo projects.", heading(title, color));
    }
    format!("{}\n{}", heading(title, color), project_table(projects))
}

/// Every project and every contract, in creation order.
pub fn format_overview(overview: &Overview, color: bool) -> String {
    let mut out = format!("{}\n", heading("Projects", color));
    if overview.projects.is_empty() {
        out.push_str("No projects.\n");
    } else {
        out.push_str(&project_table(&overview.projects));
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", heading("Contracts", color)));
    if overview.contracts.is_empty() {
        out.push_str("No contracts.");
    } else {
        out.push_str(&contract_table(
            &overview.contracts,
            &overview.projects,
            color,
        ));
    }
    out
}

/// The two numbered lists `project attach <P> <C>` chooses from.
pub fn format_eligibility(projects: &[Project], contracts: &[Contract], color: bool) -> String {
    let mut out = format!("{}\n", heading("Projects without an active contract", color));
    if projects.is_empty() {
        out.push_str("None.\n");
    } else {
        out.push_str(&project_table(projects));
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{}\n",
        heading("Active contracts without a project", color)
    ));
    if contracts.is_empty() {
        out.push_str("None.");
    } else {
        out.push_str(&contract_table(contracts, &[], color));
    }
    out
}

pub fn format_project_created(project: &Project) -> String {
    format!("Project '{}' created (id {})", project.title, project.id)
}

pub fn format_attachment(attachment: &Attachment) -> String {
    format!(
        "Contract '{}' attached to project '{}'",
        attachment.contract.title, attachment.project.title
    )
}
