//! Service layer for ledger-view
//!
//! Applies user intents on top of the storage layer: validation, the state
//! change itself, persistence and the audit entry.

pub mod command;

pub use command::CommandService;
