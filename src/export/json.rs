//! JSON export of the full ledger with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerView;
use crate::models::{Account, Bill, Money, StatementUpload};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of ledger-view that wrote the export
    pub app_version: String,

    pub accounts: Vec<Account>,

    pub bills: Vec<Bill>,

    #[serde(default)]
    pub statements: Vec<StatementUpload>,

    pub metadata: ExportMetadata,
}

/// Totals computed at export time, for reference only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub bill_count: usize,
    pub statement_count: usize,
    pub net_worth: Money,
    pub upcoming_bills_total: Money,
}

impl LedgerExport {
    /// Build a snapshot from explicit lists
    pub fn new(
        accounts: Vec<Account>,
        bills: Vec<Bill>,
        statements: Vec<StatementUpload>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let view = LedgerView::new(&accounts, &bills);
        let metadata = ExportMetadata {
            account_count: accounts.len(),
            bill_count: bills.len(),
            statement_count: statements.len(),
            net_worth: view.net_worth(),
            upcoming_bills_total: view.upcoming_bills().total,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts,
            bills,
            statements,
            metadata,
        }
    }

    pub fn from_storage(storage: &Storage, exported_at: DateTime<Utc>) -> LedgerResult<Self> {
        Ok(Self::new(
            storage.accounts.get_all()?,
            storage.bills.get_all()?,
            storage.statements.get_all()?,
            exported_at,
        ))
    }
}

/// Export the full ledger to pretty-printed JSON
pub fn export_full_json<W: Write>(export: &LedgerExport, writer: W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(writer, export).map_err(|e| LedgerError::Export(e.to_string()))
}
