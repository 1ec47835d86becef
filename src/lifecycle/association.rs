//! Project/contract association rule.
//!
//! A project may receive a contract only while it owns no active contract,
//! and only active, unassigned contracts are offered for attachment. Both
//! sets are recomputed from the store on every call.

use tracing::{debug, info};

use super::{
    Attachment, LifecycleEngine, Outcome, NO_ELIGIBLE_CONTRACTS, NO_ELIGIBLE_PROJECTS,
};
use crate::error::LedgerError;
use crate::model::{Contract, Project};
use crate::selection;
use crate::store::{ContractQuery, ProjectQuery};
use crate::types::{ContractId, ProjectId};

impl LifecycleEngine {
    /// Projects that own no active contract.
    pub fn eligible_projects(&self) -> Result<Vec<Project>, LedgerError> {
        let projects = self
            .store()
            .query_projects(&ProjectQuery::without_active_contract())?;
        debug!(count = projects.len(), "Computed eligible projects");
        Ok(projects)
    }

    /// Active contracts not yet attached to any project.
    pub fn eligible_contracts(&self) -> Result<Vec<Contract>, LedgerError> {
        let contracts = self
            .store()
            .query_contracts(&ContractQuery::eligible_for_attachment())?;
        debug!(count = contracts.len(), "Computed eligible contracts");
        Ok(contracts)
    }

    /// Attach a contract to a project.
    ///
    /// Both sides are re-checked against the live store: the project must own
    /// no active contract and the contract must be active and unassigned.
    pub fn attach(
        &self,
        project_id: ProjectId,
        contract_id: ContractId,
    ) -> Result<Attachment, LedgerError> {
        let project = self
            .store()
            .get_project(project_id)?
            .ok_or(LedgerError::ProjectNotFound(project_id))?;
        let mut contract = self
            .store()
            .get_contract(contract_id)?
            .ok_or(LedgerError::ContractNotFound(contract_id))?;

        if !self.eligible_projects()?.iter().any(|p| p.id == project_id) {
            return Err(LedgerError::PreconditionFailed(format!(
                "Project '{}' already has an active contract",
                project.title
            )));
        }
        if !ContractQuery::eligible_for_attachment().matches(&contract) {
            let reason = if contract.is_assigned() {
                "is already attached to a project".to_string()
            } else {
                format!("is {}, not active", contract.status.label().to_lowercase())
            };
            return Err(LedgerError::PreconditionFailed(format!(
                "Contract '{}' {}",
                contract.title, reason
            )));
        }

        contract.project_id = Some(project.id);
        self.store().update_contract(&contract)?;
        info!(project_id, contract_id, "Contract attached to project");

        Ok(Attachment { project, contract })
    }

    /// Attach by 1-based positions in the eligible project and contract lists.
    ///
    /// The operator picks both sides; no pairing is inferred.
    pub fn attach_selected(
        &self,
        project_choice: usize,
        contract_choice: usize,
    ) -> Result<Outcome<Attachment>, LedgerError> {
        let projects = self.eligible_projects()?;
        if projects.is_empty() {
            return Ok(Outcome::NothingAvailable(NO_ELIGIBLE_PROJECTS.to_string()));
        }
        let project = selection::resolve(&projects, project_choice)?;

        let contracts = self.eligible_contracts()?;
        if contracts.is_empty() {
            return Ok(Outcome::NothingAvailable(NO_ELIGIBLE_CONTRACTS.to_string()));
        }
        let contract = selection::resolve(&contracts, contract_choice)?;

        self.attach(project.id, contract.id).map(Outcome::Done)
    }
}
