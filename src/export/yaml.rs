//! YAML export of the full ledger

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;

/// Export the full ledger to YAML with a short comment header
pub fn export_full_yaml<W: Write>(export: &LedgerExport, mut writer: W) -> LedgerResult<()> {
    writeln!(writer, "# ledger-view export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| LedgerError::Export(e.to_string()))
}
