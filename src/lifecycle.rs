//! Lifecycle Engine
//!
//! Holds the contract status state machine and the project/contract
//! association rule. Every operation reads the live store state it needs,
//! validates, and then mutates; nothing is cached between calls.

mod association;
mod projects;
mod transitions;

use crate::model::{Contract, Project};
use crate::store::RecordStore;
use serde::Serialize;
use std::sync::Arc;

pub const NO_DRAFT_CONTRACTS: &str = "No draft contracts are waiting to be confirmed.";
pub const NO_ACTIVE_CONTRACTS: &str = "No active contracts are available to complete.";
pub const NO_ELIGIBLE_PROJECTS: &str = "No projects are available to receive a contract.";
pub const NO_ELIGIBLE_CONTRACTS: &str = "No active, unattached contracts are available.";
pub const PROJECT_NEEDS_CONTRACT: &str = "Create a contract before creating a project.";

/// Result of an operation that may legitimately find nothing to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    /// Nothing eligible; carries the reason to show the operator.
    NothingAvailable(String),
}

impl<T> Outcome<T> {
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::NothingAvailable(_) => None,
        }
    }
}

/// A contract that was just attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub project: Project,
    pub contract: Contract,
}

/// Every project and contract, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overview {
    pub projects: Vec<Project>,
    pub contracts: Vec<Contract>,
}

impl Overview {
    /// Title of the project owning `contract`, if any.
    pub fn project_title(&self, contract: &Contract) -> Option<&str> {
        let project_id = contract.project_id?;
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.title.as_str())
    }
}

/// Applies lifecycle and association rules on top of an injected store.
#[derive(Clone)]
pub struct LifecycleEngine {
    store: Arc<dyn RecordStore>,
}

impl LifecycleEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
