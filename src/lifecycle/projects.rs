//! Project creation gate and the combined overview.

use tracing::{info, warn};

use super::{LifecycleEngine, Overview, PROJECT_NEEDS_CONTRACT};
use crate::error::LedgerError;
use crate::model::{clean_title, NewProject, Project};
use crate::store::{ContractQuery, ProjectQuery};

impl LifecycleEngine {
    /// Create a project.
    ///
    /// Allowed only once at least one contract exists. A duplicate title is
    /// rejected by the store and nothing is written.
    pub fn create_project(&self, title: &str) -> Result<Project, LedgerError> {
        if !self.project_creation_allowed()? {
            return Err(LedgerError::PreconditionFailed(PROJECT_NEEDS_CONTRACT.to_string()));
        }
        let title = clean_title(title).ok_or_else(|| {
            LedgerError::PreconditionFailed("A project needs a title".to_string())
        })?;

        match self.store().insert_project(NewProject::new(title)) {
            Ok(project) => {
                info!(project_id = project.id, "Project created");
                Ok(project)
            }
            Err(e) => {
                warn!(error = %e, "Project creation failed");
                Err(e.into())
            }
        }
    }

    /// Projects may be created once any contract exists, in any status.
    pub fn project_creation_allowed(&self) -> Result<bool, LedgerError> {
        Ok(self.store().count_contracts()? > 0)
    }

    pub fn overview(&self) -> Result<Overview, LedgerError> {
        Ok(Overview {
            projects: self.store().query_projects(&ProjectQuery::All)?,
            contracts: self.store().query_contracts(&ContractQuery::All)?,
        })
    }
}
