//! Warnings for stored records that were set aside on load

use crate::display::rejected::{format_rejected_account, format_rejected_bill};
use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print one stderr warning per account or bill record the last load skipped
pub fn report_rejected_records(storage: &Storage) -> LedgerResult<()> {
    for record in storage.accounts.rejected()? {
        eprintln!("Warning: {}", format_rejected_account(&record));
    }
    for record in storage.bills.rejected()? {
        eprintln!("Warning: {}", format_rejected_bill(&record));
    }
    Ok(())
}
