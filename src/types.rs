//! Identifier types shared across the store, engine, and shell.

/// Store-assigned surrogate id of a contract.
pub type ContractId = u64;

/// Store-assigned surrogate id of a project.
pub type ProjectId = u64;
