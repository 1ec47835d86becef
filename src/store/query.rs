//! Query predicates passed to the record store.
//!
//! Predicates are plain values so the engine's eligibility rules can be named,
//! compared, and unit-tested without a database.

use crate::model::{Contract, ContractStatus, Project};
use crate::types::ProjectId;

/// Filter over contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractQuery {
    All,
    /// Status equality.
    Status(ContractStatus),
    /// Status equality AND no owning project.
    UnassignedWithStatus(ContractStatus),
    /// Contracts owned by the given project.
    OwnedBy(ProjectId),
}

impl ContractQuery {
    /// Contracts that may be attached to a project: active and unassigned.
    pub fn eligible_for_attachment() -> Self {
        ContractQuery::UnassignedWithStatus(ContractStatus::Active)
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        match *self {
            ContractQuery::All => true,
            ContractQuery::Status(status) => contract.status == status,
            ContractQuery::UnassignedWithStatus(status) => {
                contract.status == status && contract.project_id.is_none()
            }
            ContractQuery::OwnedBy(project_id) => contract.project_id == Some(project_id),
        }
    }
}

/// Filter over projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectQuery {
    All,
    /// Projects for which no owned contract matches the sub-predicate.
    WithoutContract(ContractQuery),
}

impl ProjectQuery {
    /// Projects that may receive a contract: none of their contracts is active.
    pub fn without_active_contract() -> Self {
        ProjectQuery::WithoutContract(ContractQuery::Status(ContractStatus::Active))
    }

    /// Whether this predicate needs the contract table to be evaluated.
    pub fn needs_contracts(&self) -> bool {
        matches!(self, ProjectQuery::WithoutContract(_))
    }

    /// Evaluate against a project and the full set of stored contracts.
    pub fn matches(&self, project: &Project, contracts: &[Contract]) -> bool {
        match self {
            ProjectQuery::All => true,
            ProjectQuery::WithoutContract(sub) => !contracts
                .iter()
                .any(|c| c.project_id == Some(project.id) && sub.matches(c)),
        }
    }
}
