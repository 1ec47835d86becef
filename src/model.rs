//! Data model: contracts, projects, and their status.
//!
//! A contract is created in `draft`, signed into `active`, and finally
//! `completed`. It may belong to at most one project.

pub mod status;

pub use status::{ContractStatus, ParseStatusError};

use crate::types::{ContractId, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A persisted contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Set on activation; absent while the contract is a draft.
    pub signed_at: Option<DateTime<Utc>>,
    pub status: ContractStatus,
    pub project_id: Option<ProjectId>,
}

impl Contract {
    pub fn is_assigned(&self) -> bool {
        self.project_id.is_some()
    }
}

/// A contract that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewContract {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl NewContract {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            created_at: Utc::now(),
        }
    }

    /// Materialize the stored record: every contract starts as an unsigned draft.
    pub fn into_contract(self, id: ContractId) -> Contract {
        Contract {
            id,
            title: self.title,
            created_at: self.created_at,
            signed_at: None,
            status: ContractStatus::Draft,
            project_id: None,
        }
    }
}

/// A persisted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A project that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl NewProject {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            created_at: Utc::now(),
        }
    }

    /// Key the store uses to enforce title uniqueness.
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }

    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            created_at: self.created_at,
        }
    }
}

/// Uniqueness key for a project title: trimmed and NFC-normalized, so
/// composed and decomposed spellings of the same title collide.
pub fn title_key(title: &str) -> String {
    title.trim().nfc().collect()
}

/// Trim a user-supplied title, returning `None` when nothing is left.
pub fn clean_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
