//! CLI presentation: text and JSON formatting for contracts, projects, and outcomes.

mod contracts;
mod projects;
mod shared;

pub use contracts::{format_contract_list, format_transition};
pub use projects::{
    format_attachment, format_eligibility, format_overview, format_project_created,
    format_project_list,
};
pub use shared::{format_json, OutputFormat};
