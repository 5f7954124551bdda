//! Account repository backed by accounts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::LedgerError;
use crate::ledger::find_account;
use crate::models::{Account, AccountId, AccountStatus, AccountType};
use crate::source::AccountSource;

use super::file_io::{check_enum_field, read_records, write_records, RejectedRecord};

const RECORD_KEY: &str = "accounts";

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
    rejected: RwLock<Vec<RejectedRecord>>,
}

fn type_rank(account_type: AccountType) -> usize {
    AccountType::ALL
        .iter()
        .position(|t| *t == account_type)
        .unwrap_or(usize::MAX)
}

fn diagnose(raw: &Value) -> Option<LedgerError> {
    check_enum_field::<AccountType>(raw, "type")
        .or_else(|| check_enum_field::<AccountStatus>(raw, "status"))
}

fn validate(account: &Account) -> Result<(), LedgerError> {
    account
        .validate()
        .map_err(|e| LedgerError::Validation(format!("{}: {}", account.name, e)))
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            rejected: RwLock::new(Vec::new()),
        }
    }

    /// Load accounts from disk, replacing anything in memory
    ///
    /// Records with an unknown type or status, or that fail validation, are
    /// kept aside in `rejected()` rather than failing the load.
    pub fn load(&self) -> Result<(), LedgerError> {
        let loaded = read_records(&self.path, RECORD_KEY, diagnose, validate)?;

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut rejected = self.rejected.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for account in loaded.records {
            data.insert(account.id, account);
        }
        *rejected = loaded.rejected;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let accounts = self.get_all()?;
        let rejected = self.rejected()?;

        write_records(&self.path, RECORD_KEY, &accounts, &rejected)
    }

    /// Stored records the last load could not use
    pub fn rejected(&self) -> Result<Vec<RejectedRecord>, LedgerError> {
        let rejected = self.rejected.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(rejected.clone())
    }

    pub fn get(&self, id: AccountId) -> Result<Option<Account>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All accounts, ordered by type (checking first, loans last), name, then ID
    pub fn get_all(&self) -> Result<Vec<Account>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| {
            type_rank(a.account_type)
                .cmp(&type_rank(b.account_type))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(accounts)
    }

    /// Find an account by name (case-insensitive), full ID or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<Account>, LedgerError> {
        let accounts = self.get_all()?;
        Ok(find_account(&accounts, identifier).cloned())
    }

    /// Insert or replace an account; invalid accounts are refused
    pub fn upsert(&self, account: Account) -> Result<(), LedgerError> {
        validate(&account)?;

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(account.id, account);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

impl AccountSource for AccountRepository {
    fn list_all(&self) -> Result<Vec<Account>, LedgerError> {
        self.get_all()
    }
}
