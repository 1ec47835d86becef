//! Sled-backed implementation of the record store.
//!
//! Layout: one sled tree per entity keyed by the big-endian id, so iteration
//! order is insertion order, plus a `project_titles` index tree mapping the
//! normalized title to the owning project id.

use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::transaction::{ConflictableTransactionError, TransactionError, Transactional};
use sled::{Db, Tree};
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::model::{Contract, NewContract, NewProject, Project};
use crate::store::{ContractQuery, ProjectQuery, RecordStore};
use crate::types::{ContractId, ProjectId};

const TREE_CONTRACTS: &str = "contracts";
const TREE_PROJECTS: &str = "projects";
const TREE_PROJECT_TITLES: &str = "project_titles";

/// Sled-based implementation of [`RecordStore`]
pub struct SledRecordStore {
    db: Db,
    contracts: Tree,
    projects: Tree,
    project_titles: Tree,
}

impl SledRecordStore {
    /// Open (or create) a store at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            StorageError::IoError(io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to open sled database: {}", e),
            ))
        })?;
        Self::from_db(db)
    }

    /// Open a store that lives only as long as the handle.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(to_storage_io)?;
        Self::from_db(db)
    }

    pub fn from_db(db: Db) -> Result<Self, StorageError> {
        let contracts = db.open_tree(TREE_CONTRACTS).map_err(to_storage_io)?;
        let projects = db.open_tree(TREE_PROJECTS).map_err(to_storage_io)?;
        let project_titles = db.open_tree(TREE_PROJECT_TITLES).map_err(to_storage_io)?;
        Ok(Self {
            db,
            contracts,
            projects,
            project_titles,
        })
    }

    // Each write is durable before the caller sees Ok.
    fn commit(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(to_storage_io)?;
        Ok(())
    }

    // sled ids start at zero; ids shown to the operator start at one.
    fn next_id(&self) -> Result<u64, StorageError> {
        Ok(self.db.generate_id().map_err(to_storage_io)? + 1)
    }

    fn scan<T: DeserializeOwned>(tree: &Tree) -> Result<Vec<T>, StorageError> {
        let mut out = Vec::new();
        for item in tree.iter() {
            let (_, value) = item.map_err(to_storage_io)?;
            out.push(decode(&value)?);
        }
        Ok(out)
    }
}

impl RecordStore for SledRecordStore {
    fn insert_contract(&self, contract: NewContract) -> Result<Contract, StorageError> {
        let id = self.next_id()?;
        let record = contract.into_contract(id);
        self.contracts
            .insert(id.to_be_bytes(), encode(&record)?)
            .map_err(to_storage_io)?;
        self.commit()?;
        debug!(contract_id = id, "Stored contract");
        Ok(record)
    }

    fn insert_project(&self, project: NewProject) -> Result<Project, StorageError> {
        let id = self.next_id()?;
        let title_key = project.title_key();
        let record = project.into_project(id);
        let value = encode(&record)?;
        let id_key = id.to_be_bytes();

        let result = (&self.projects, &self.project_titles).transaction(|(projects, titles)| {
            if titles.get(title_key.as_bytes())?.is_some() {
                return Err(ConflictableTransactionError::Abort(()));
            }
            titles.insert(title_key.as_bytes(), &id_key[..])?;
            projects.insert(&id_key[..], value.as_slice())?;
            Ok(())
        });

        match result {
            Ok(()) => {
                self.commit()?;
                debug!(project_id = id, "Stored project");
                Ok(record)
            }
            Err(TransactionError::Abort(())) => {
                warn!(title = %record.title, "Project insert rolled back: duplicate title");
                Err(StorageError::DuplicateTitle(record.title))
            }
            Err(TransactionError::Storage(e)) => Err(to_storage_io(e)),
        }
    }

    fn get_contract(&self, id: ContractId) -> Result<Option<Contract>, StorageError> {
        match self.contracts.get(id.to_be_bytes()).map_err(to_storage_io)? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    fn get_project(&self, id: ProjectId) -> Result<Option<Project>, StorageError> {
        match self.projects.get(id.to_be_bytes()).map_err(to_storage_io)? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    fn query_contracts(&self, query: &ContractQuery) -> Result<Vec<Contract>, StorageError> {
        let contracts: Vec<Contract> = Self::scan(&self.contracts)?;
        Ok(contracts.into_iter().filter(|c| query.matches(c)).collect())
    }

    fn query_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StorageError> {
        let contracts: Vec<Contract> = if query.needs_contracts() {
            Self::scan(&self.contracts)?
        } else {
            Vec::new()
        };
        let projects: Vec<Project> = Self::scan(&self.projects)?;
        Ok(projects
            .into_iter()
            .filter(|p| query.matches(p, &contracts))
            .collect())
    }

    fn count_contracts(&self) -> Result<usize, StorageError> {
        Ok(self.contracts.len())
    }

    fn count_projects(&self) -> Result<usize, StorageError> {
        Ok(self.projects.len())
    }

    fn update_contract(&self, contract: &Contract) -> Result<(), StorageError> {
        let key = contract.id.to_be_bytes();
        if !self.contracts.contains_key(key).map_err(to_storage_io)? {
            return Err(StorageError::ContractNotFound(contract.id));
        }
        self.contracts
            .insert(key, encode(contract)?)
            .map_err(to_storage_io)?;
        self.commit()
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.commit()
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    bincode::serialize(value)
        .map_err(|e| StorageError::Codec(format!("Failed to serialize record: {}", e)))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StorageError> {
    bincode::deserialize(bytes)
        .map_err(|e| StorageError::Codec(format!("Failed to deserialize record: {}", e)))
}

fn to_storage_io(err: sled::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::Other, err.to_string()))
}
