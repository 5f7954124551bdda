//! User intents
//!
//! The CLI turns arguments into one of these values and hands it to
//! `services::CommandService`, which is the only place that mutates stored
//! accounts, bills and statement uploads.

use std::fmt;
use std::path::PathBuf;

use crate::models::{AccountId, BillId, StatementUpload};

/// Link an account to its institution and mark it freshly synced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectAccountCommand {
    pub account_id: AccountId,
}

/// Record a payment against a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkBillPaidCommand {
    pub bill_id: BillId,
}

/// Queue a statement file for later import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatementCommand {
    pub path: PathBuf,
    pub account_id: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    ConnectAccount(ConnectAccountCommand),
    MarkBillPaid(MarkBillPaidCommand),
    UploadStatement(UploadStatementCommand),
}

impl From<ConnectAccountCommand> for LedgerCommand {
    fn from(cmd: ConnectAccountCommand) -> Self {
        Self::ConnectAccount(cmd)
    }
}

impl From<MarkBillPaidCommand> for LedgerCommand {
    fn from(cmd: MarkBillPaidCommand) -> Self {
        Self::MarkBillPaid(cmd)
    }
}

impl From<UploadStatementCommand> for LedgerCommand {
    fn from(cmd: UploadStatementCommand) -> Self {
        Self::UploadStatement(cmd)
    }
}

/// What a successfully applied command changed
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    AccountConnected {
        account_id: AccountId,
        name: String,
        /// False when the account was already connected and only resynced
        newly_connected: bool,
    },
    BillPaid {
        bill_id: BillId,
        name: String,
        /// Next due date for recurring bills
        next_due: Option<chrono::NaiveDate>,
    },
    StatementQueued(StatementUpload),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountConnected {
                name,
                newly_connected: true,
                ..
            } => write!(f, "Connected account: {}", name),
            Self::AccountConnected { name, .. } => write!(f, "Resynced account: {}", name),
            Self::BillPaid {
                name,
                next_due: Some(next),
                ..
            } => write!(f, "Marked {} as paid (next due {})", name, next),
            Self::BillPaid { name, .. } => write!(f, "Marked {} as paid", name),
            Self::StatementQueued(upload) => write!(
                f,
                "Queued {} statement {} for import",
                upload.format, upload.file_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_commands_convert_into_ledger_command() {
        let id = AccountId::new();
        let cmd: LedgerCommand = ConnectAccountCommand { account_id: id }.into();
        assert_eq!(cmd, LedgerCommand::ConnectAccount(ConnectAccountCommand { account_id: id }));
    }

    #[test]
    fn test_outcome_display() {
        let paid = CommandOutcome::BillPaid {
            bill_id: BillId::new(),
            name: "Rent".into(),
            next_due: NaiveDate::from_ymd_opt(2025, 5, 1),
        };
        assert_eq!(paid.to_string(), "Marked Rent as paid (next due 2025-05-01)");

        let resync = CommandOutcome::AccountConnected {
            account_id: AccountId::new(),
            name: "Savings".into(),
            newly_connected: false,
        };
        assert_eq!(resync.to_string(), "Resynced account: Savings");
    }
}
