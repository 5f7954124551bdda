//! Warnings for stored records that could not be loaded

use crate::storage::RejectedRecord;

use super::labels::{account_type_label, bill_status_label, UNKNOWN_LABEL};

fn record_name(record: &RejectedRecord) -> &str {
    record.name().unwrap_or("(unnamed)")
}

/// One warning line for an account record that was set aside
pub fn format_rejected_account(record: &RejectedRecord) -> String {
    let label = record
        .field("type")
        .map(account_type_label)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    format!(
        "Skipped account \"{}\" ({}): {}",
        record_name(record),
        label,
        record.error
    )
}

/// One warning line for a bill record that was set aside
pub fn format_rejected_bill(record: &RejectedRecord) -> String {
    let label = record
        .field("status")
        .map(bill_status_label)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    format!(
        "Skipped bill \"{}\" ({}): {}",
        record_name(record),
        label,
        record.error
    )
}
