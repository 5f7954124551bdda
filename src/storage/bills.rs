//! Bill repository backed by bills.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::LedgerError;
use crate::ledger::find_bill;
use crate::models::{Bill, BillFrequency, BillId, BillStatus};
use crate::source::BillSource;

use super::file_io::{check_enum_field, read_records, write_records, RejectedRecord};

const RECORD_KEY: &str = "bills";

/// Repository for bill persistence
pub struct BillRepository {
    path: PathBuf,
    data: RwLock<HashMap<BillId, Bill>>,
    rejected: RwLock<Vec<RejectedRecord>>,
}

fn diagnose(raw: &Value) -> Option<LedgerError> {
    check_enum_field::<BillStatus>(raw, "status")
        .or_else(|| check_enum_field::<BillFrequency>(raw, "frequency"))
}

fn validate(bill: &Bill) -> Result<(), LedgerError> {
    bill.validate()
        .map_err(|e| LedgerError::Validation(format!("{}: {}", bill.name, e)))
}

impl BillRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            rejected: RwLock::new(Vec::new()),
        }
    }

    /// Load bills from disk; unusable records end up in `rejected()`
    pub fn load(&self) -> Result<(), LedgerError> {
        let loaded = read_records(&self.path, RECORD_KEY, diagnose, validate)?;

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut rejected = self.rejected.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for bill in loaded.records {
            data.insert(bill.id, bill);
        }
        *rejected = loaded.rejected;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let bills = self.get_all()?;
        let rejected = self.rejected()?;

        write_records(&self.path, RECORD_KEY, &bills, &rejected)
    }

    pub fn rejected(&self) -> Result<Vec<RejectedRecord>, LedgerError> {
        let rejected = self.rejected.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(rejected.clone())
    }

    pub fn get(&self, id: BillId) -> Result<Option<Bill>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All bills, soonest due date first
    pub fn get_all(&self) -> Result<Vec<Bill>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut bills: Vec<_> = data.values().cloned().collect();
        bills.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(bills)
    }

    /// Find a bill by name (case-insensitive), full ID or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<Bill>, LedgerError> {
        let bills = self.get_all()?;
        Ok(find_bill(&bills, identifier).cloned())
    }

    /// Insert or replace a bill; invalid bills are refused
    pub fn upsert(&self, bill: Bill) -> Result<(), LedgerError> {
        validate(&bill)?;

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(bill.id, bill);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

impl BillSource for BillRepository {
    fn list_all(&self) -> Result<Vec<Bill>, LedgerError> {
        self.get_all()
    }
}
