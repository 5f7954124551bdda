//! Core data models for ledger-view
//!
//! Accounts, bills and statement uploads, plus the money and ID types they
//! share.

pub mod account;
pub mod bill;
pub mod ids;
pub mod money;
pub mod statement;

pub use account::{Account, AccountStatus, AccountType};
pub use bill::{Bill, BillFrequency, BillStatus};
pub use ids::{AccountId, BillId, StatementId};
pub use money::Money;
pub use statement::{StatementFormat, StatementStatus, StatementUpload};
