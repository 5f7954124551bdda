//! Storage layer for ledger-view
//!
//! JSON files with atomic writes, one per entity kind. Every mutation made
//! through `Storage` is also recorded in the audit log.

pub mod accounts;
pub mod bills;
pub mod file_io;
pub mod statements;

pub use accounts::AccountRepository;
pub use bills::BillRepository;
pub use file_io::{read_json, write_json_atomic, RejectedRecord};
pub use statements::StatementRepository;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Account, Bill};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    audit: AuditLogger,
    pub accounts: AccountRepository,
    pub bills: BillRepository,
    pub statements: StatementRepository,
}

impl Storage {
    /// Create a Storage instance, creating the data directory if needed
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            accounts: AccountRepository::new(paths.accounts_file()),
            bills: BillRepository::new(paths.bills_file()),
            statements: StatementRepository::new(paths.statements_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.accounts.load()?;
        self.bills.load()?;
        self.statements.load()?;
        Ok(())
    }

    /// Delete every data file and reload empty repositories
    ///
    /// The audit log is kept.
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        for path in [
            self.paths.accounts_file(),
            self.paths.bills_file(),
            self.paths.statements_file(),
        ] {
            if path.exists() {
                std::fs::remove_file(&path).map_err(|e| {
                    LedgerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
                })?;
            }
        }
        self.load_all()
    }

    /// Whether any accounts or bills have been stored, usable or not
    pub fn has_data(&self) -> Result<bool, LedgerError> {
        Ok(self.accounts.count()? > 0
            || self.bills.count()? > 0
            || !self.accounts.rejected()?.is_empty()
            || !self.bills.rejected()?.is_empty())
    }

    /// Insert a seed set of accounts and bills, auditing each one
    ///
    /// Every record is validated before anything is written.
    pub fn seed(
        &self,
        accounts: Vec<Account>,
        bills: Vec<Bill>,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let mut entries = Vec::with_capacity(accounts.len() + bills.len());

        for account in &accounts {
            account
                .validate()
                .map_err(|e| LedgerError::Validation(format!("{}: {}", account.name, e)))?;
        }
        for bill in &bills {
            bill.validate()
                .map_err(|e| LedgerError::Validation(format!("{}: {}", bill.name, e)))?;
        }

        for account in accounts {
            entries.push(AuditEntry::create(
                EntityType::Account,
                account.id.to_string(),
                Some(account.name.clone()),
                &account,
            )
            .at(at));
            self.accounts.upsert(account)?;
        }
        for bill in bills {
            entries.push(AuditEntry::create(
                EntityType::Bill,
                bill.id.to_string(),
                Some(bill.name.clone()),
                &bill,
            )
            .at(at));
            self.bills.upsert(bill)?;
        }

        self.accounts.save()?;
        self.bills.save()?;
        self.audit.log_batch(&entries)
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity).at(at))
    }

    /// Record an update in the audit log
    #[allow(clippy::too_many_arguments)]
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        summary: String,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        self.audit.log(
            &AuditEntry::update(entity_type, entity_id, entity_name, before, after, Some(summary))
                .at(at),
        )
    }
}
