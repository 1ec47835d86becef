//! Integration tests for the sled record store

use contract_tracker::error::StorageError;
use contract_tracker::model::{ContractStatus, NewContract, NewProject};
use contract_tracker::store::{ContractQuery, ProjectQuery, RecordStore, SledRecordStore};
use tempfile::TempDir;

#[test]
fn test_ids_are_unique_across_entity_types() {
    let store = SledRecordStore::temporary().unwrap();
    let c1 = store.insert_contract(NewContract::new("A")).unwrap();
    let p1 = store.insert_project(NewProject::new("P1")).unwrap();
    let c2 = store.insert_contract(NewContract::new("B")).unwrap();

    assert!(c1.id < p1.id && p1.id < c2.id);
    assert!(c1.id > 0);
}

#[test]
fn test_status_queries_preserve_insertion_order() {
    let store = SledRecordStore::temporary().unwrap();
    let mut ids = Vec::new();
    for title in ["one", "two", "three", "four"] {
        ids.push(store.insert_contract(NewContract::new(title)).unwrap().id);
    }
    let mut second = store.get_contract(ids[1]).unwrap().unwrap();
    second.status = ContractStatus::Active;
    store.update_contract(&second).unwrap();

    let drafts = store
        .query_contracts(&ContractQuery::Status(ContractStatus::Draft))
        .unwrap();
    let titles: Vec<_> = drafts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "three", "four"]);
}

#[test]
fn test_without_contract_predicate_tracks_status_changes() {
    let store = SledRecordStore::temporary().unwrap();
    let project = store.insert_project(NewProject::new("P1")).unwrap();
    let mut contract = store.insert_contract(NewContract::new("A")).unwrap();
    contract.project_id = Some(project.id);
    contract.status = ContractStatus::Active;
    store.update_contract(&contract).unwrap();

    let query = ProjectQuery::without_active_contract();
    assert!(store.query_projects(&query).unwrap().is_empty());

    let owned = store
        .query_contracts(&ContractQuery::OwnedBy(project.id))
        .unwrap();
    assert_eq!(owned.len(), 1);

    contract.status = ContractStatus::Completed;
    store.update_contract(&contract).unwrap();
    assert_eq!(store.query_projects(&query).unwrap(), vec![project]);
}

#[test]
fn test_duplicate_title_is_rejected_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = SledRecordStore::new(dir.path()).unwrap();
        store.insert_project(NewProject::new("P1")).unwrap();
        store.flush().unwrap();
    }
    let store = SledRecordStore::new(dir.path()).unwrap();
    let err = store.insert_project(NewProject::new("P1")).unwrap_err();
    assert!(matches!(err, StorageError::DuplicateTitle(_)));
    assert_eq!(store.count_projects().unwrap(), 1);
}

#[test]
fn test_ids_keep_increasing_after_reopen() {
    let dir = TempDir::new().unwrap();
    let first = {
        let store = SledRecordStore::new(dir.path()).unwrap();
        let c = store.insert_contract(NewContract::new("A")).unwrap();
        store.flush().unwrap();
        c.id
    };
    let store = SledRecordStore::new(dir.path()).unwrap();
    let second = store.insert_contract(NewContract::new("B")).unwrap().id;
    assert!(second > first);
}

const ABORT_STORE_VAR: &str = "CONTRACT_TRACKER_TEST_ABORT_STORE";

/// Writes reported as successful must already be on disk: the child process
/// creates and confirms a contract, then aborts without any shutdown flush.
#[test]
fn test_committed_writes_survive_process_abort() {
    if let Ok(path) = std::env::var(ABORT_STORE_VAR) {
        let store = SledRecordStore::new(&path).unwrap();
        let engine =
            contract_tracker::lifecycle::LifecycleEngine::new(std::sync::Arc::new(store));
        engine.create_contract("A").unwrap();
        engine.confirm(1).unwrap();
        std::process::abort();
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store");
    let status = std::process::Command::new(std::env::current_exe().unwrap())
        .args([
            "--exact",
            "integration::store_integration::test_committed_writes_survive_process_abort",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(ABORT_STORE_VAR, &path)
        .status()
        .unwrap();
    assert!(!status.success(), "child should have aborted");

    let store = SledRecordStore::new(&path).unwrap();
    assert_eq!(store.count_contracts().unwrap(), 1);
    let contracts = store.query_contracts(&ContractQuery::All).unwrap();
    assert_eq!(contracts[0].status, ContractStatus::Active);
    assert!(contracts[0].signed_at.is_some());
}
