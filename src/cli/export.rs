//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml, LedgerExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (one entity per file)
    Csv,
    /// JSON (full ledger)
    Json,
    /// YAML (full ledger, human-readable)
    Yaml,
}

/// Which table a CSV export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportEntity {
    #[default]
    Accounts,
    Bills,
}

/// Write an export to `output`
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    entity: ExportEntity,
    now: DateTime<Utc>,
) -> LedgerResult<()> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            let count = match entity {
                ExportEntity::Accounts => {
                    let accounts = storage.accounts.get_all()?;
                    csv::export_accounts_csv(&accounts, &mut writer)?;
                    accounts.len()
                }
                ExportEntity::Bills => {
                    let bills = storage.bills.get_all()?;
                    csv::export_bills_csv(&bills, &mut writer)?;
                    bills.len()
                }
            };
            println!(
                "Exported {} {} to: {}",
                count,
                match entity {
                    ExportEntity::Accounts => "accounts",
                    ExportEntity::Bills => "bills",
                },
                output.display()
            );
        }
        ExportFormat::Json => {
            json::export_full_json(&LedgerExport::from_storage(storage, now)?, &mut writer)?;
            println!("Full ledger exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(&LedgerExport::from_storage(storage, now)?, &mut writer)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", output.display(), e)))
}
