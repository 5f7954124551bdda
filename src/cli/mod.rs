//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger views and the command
//! service. Read-only handlers take any `AccountSource`/`BillSource`;
//! handlers that change data go through `CommandService`.

pub mod account;
pub mod audit;
pub mod bill;
pub mod export;
pub mod rejected;
pub mod statement;
pub mod summary;

pub use account::{handle_accounts_command, handle_connect_command, AccountCommands};
pub use audit::handle_audit_command;
pub use bill::{handle_bills_command, handle_pay_command, BillCommands};
pub use export::{handle_export_command, ExportEntity, ExportFormat};
pub use rejected::report_rejected_records;
pub use statement::{handle_statements_command, handle_upload_command};
pub use summary::handle_summary_command;
