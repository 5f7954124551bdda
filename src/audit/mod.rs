//! Audit trail for ledger-view
//!
//! Every state change made by a command (connecting an account, paying a
//! bill, queueing a statement) and every record seeded by `init` is appended
//! to `audit.log` as one JSON object per line.
//!
//! - `AuditEntry`: timestamp, operation, entity and before/after snapshots
//! - `AuditLogger`: appends entries and reads them back
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::update(
//!     EntityType::Bill,
//!     bill.id.to_string(),
//!     Some(bill.name.clone()),
//!     &before,
//!     &bill,
//!     Some("status: upcoming -> paid".to_string()),
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
