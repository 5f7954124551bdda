//! Export module for ledger-view
//!
//! - CSV: accounts or bills, one table per file (spreadsheet-compatible)
//! - JSON: full snapshot, machine-readable
//! - YAML: full snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_accounts_csv, export_bills_csv};
pub use json::{export_full_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
