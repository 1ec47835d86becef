//! Contract state machine: create, list by status, and forward transitions.

use chrono::Utc;
use tracing::{debug, info};

use super::{LifecycleEngine, Outcome, NO_ACTIVE_CONTRACTS, NO_DRAFT_CONTRACTS};
use crate::error::LedgerError;
use crate::model::{clean_title, Contract, ContractStatus, NewContract};
use crate::selection;
use crate::store::ContractQuery;
use crate::types::ContractId;

impl LifecycleEngine {
    /// Store a new contract in `draft`.
    pub fn create_contract(&self, title: &str) -> Result<Contract, LedgerError> {
        let title = clean_title(title).ok_or_else(|| {
            LedgerError::PreconditionFailed("A contract needs a title".to_string())
        })?;
        let contract = self.store().insert_contract(NewContract::new(title))?;
        info!(
            contract_id = contract.id,
            status = %contract.status,
            "Contract created"
        );
        Ok(contract)
    }

    /// All contracts currently in `status`, in insertion order.
    pub fn list_by_status(&self, status: ContractStatus) -> Result<Vec<Contract>, LedgerError> {
        let contracts = self
            .store()
            .query_contracts(&ContractQuery::Status(status))?;
        debug!(status = %status, count = contracts.len(), "Listed contracts");
        Ok(contracts)
    }

    /// Move a contract one step forward, provided its stored status is still
    /// `expected`.
    ///
    /// The status is re-read from the store, so a selection made from a stale
    /// list is rejected rather than applied. Draft to active stamps the signed
    /// date.
    pub fn advance(
        &self,
        contract_id: ContractId,
        expected: ContractStatus,
    ) -> Result<Contract, LedgerError> {
        let mut contract = self
            .store()
            .get_contract(contract_id)?
            .ok_or(LedgerError::ContractNotFound(contract_id))?;

        let next = match contract.status.next() {
            Some(next) if contract.status == expected => next,
            _ => {
                return Err(LedgerError::InvalidTransition {
                    contract_id,
                    expected,
                    actual: contract.status,
                })
            }
        };

        if next == ContractStatus::Active {
            contract.signed_at = Some(Utc::now());
        }
        contract.status = next;
        self.store().update_contract(&contract)?;

        info!(
            contract_id,
            from = %expected,
            to = %next,
            "Contract advanced"
        );
        Ok(contract)
    }

    /// Sign the `choice`-th draft contract (1-based).
    pub fn confirm(&self, choice: usize) -> Result<Outcome<Contract>, LedgerError> {
        self.advance_selected(ContractStatus::Draft, choice, NO_DRAFT_CONTRACTS)
    }

    /// Complete the `choice`-th active contract (1-based).
    pub fn complete(&self, choice: usize) -> Result<Outcome<Contract>, LedgerError> {
        self.advance_selected(ContractStatus::Active, choice, NO_ACTIVE_CONTRACTS)
    }

    fn advance_selected(
        &self,
        from: ContractStatus,
        choice: usize,
        empty_reason: &str,
    ) -> Result<Outcome<Contract>, LedgerError> {
        let candidates = self.list_by_status(from)?;
        if candidates.is_empty() {
            return Ok(Outcome::NothingAvailable(empty_reason.to_string()));
        }
        let selected = selection::resolve(&candidates, choice)?;
        self.advance(selected.id, from).map(Outcome::Done)
    }
}
