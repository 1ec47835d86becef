//! Record Store
//!
//! Durable storage for projects and contracts. The lifecycle engine only
//! sees the [`RecordStore`] trait; [`SledRecordStore`] is the embedded
//! implementation used by the binary and the tests.

pub mod persistence;
pub mod query;

pub use persistence::SledRecordStore;
pub use query::{ContractQuery, ProjectQuery};

use crate::error::StorageError;
use crate::model::{Contract, NewContract, NewProject, Project};
use crate::types::{ContractId, ProjectId};

/// Record Store interface
///
/// Every write is its own transaction: it either commits in full, durably,
/// before returning `Ok`, or leaves the store exactly as it was. Query results are returned in insertion
/// order.
pub trait RecordStore {
    fn insert_contract(&self, contract: NewContract) -> Result<Contract, StorageError>;

    /// Insert a project.
    ///
    /// Fails with [`StorageError::DuplicateTitle`] when another project already
    /// uses the same title key; the write is rolled back in that case.
    fn insert_project(&self, project: NewProject) -> Result<Project, StorageError>;

    fn get_contract(&self, id: ContractId) -> Result<Option<Contract>, StorageError>;
    fn get_project(&self, id: ProjectId) -> Result<Option<Project>, StorageError>;

    fn query_contracts(&self, query: &ContractQuery) -> Result<Vec<Contract>, StorageError>;
    fn query_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StorageError>;

    fn count_contracts(&self) -> Result<usize, StorageError>;
    fn count_projects(&self) -> Result<usize, StorageError>;

    /// Persist changes to an already stored contract.
    fn update_contract(&self, contract: &Contract) -> Result<(), StorageError>;

    /// Flush pending writes to durable storage. Writes already commit on
    /// their own; this is the final barrier at shutdown.
    fn flush(&self) -> Result<(), StorageError>;
}
