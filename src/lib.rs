//! Contract Tracker: contracts, their lifecycle, and the projects they belong to
//!
//! A single-operator ledger. Contracts move forward through draft, active, and
//! completed; a project may receive a contract only while it owns no active one.

pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod selection;
pub mod store;
pub mod types;
