//! Statement upload repository backed by statements.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::StatementUpload;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct StatementData {
    statements: Vec<StatementUpload>,
}

/// Append-mostly list of queued statement uploads
pub struct StatementRepository {
    path: PathBuf,
    data: RwLock<Vec<StatementUpload>>,
}

impl StatementRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: StatementData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.statements;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let file_data = StatementData {
            statements: self.get_all()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Uploads in the order they were added
    pub fn get_all(&self) -> Result<Vec<StatementUpload>, LedgerError> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    pub fn add(&self, upload: StatementUpload) -> Result<(), LedgerError> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(upload);
        Ok(())
    }
}
