//! Command service
//!
//! Connects accounts, marks bills paid and queues statement uploads. Each
//! operation saves the touched repository and appends one audit entry.

use chrono::{DateTime, NaiveDate, Utc};

use crate::audit::EntityType;
use crate::commands::{
    CommandOutcome, ConnectAccountCommand, LedgerCommand, MarkBillPaidCommand,
    UploadStatementCommand,
};
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountStatus, BillStatus, StatementFormat, StatementUpload};
use crate::storage::Storage;

/// Service that applies `LedgerCommand`s to storage
pub struct CommandService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> CommandService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Apply a command as of `now`
    ///
    /// `now` stamps sync times and audit entries. `today` is the caller's
    /// calendar date, the same one the bill views are rendered against, and
    /// is what gets recorded as a bill's payment date.
    pub fn execute(
        &self,
        command: LedgerCommand,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> LedgerResult<CommandOutcome> {
        match command {
            LedgerCommand::ConnectAccount(cmd) => self.connect_account(cmd, now),
            LedgerCommand::MarkBillPaid(cmd) => self.mark_bill_paid(cmd, now, today),
            LedgerCommand::UploadStatement(cmd) => self.upload_statement(cmd, now),
        }
    }

    fn connect_account(
        &self,
        cmd: ConnectAccountCommand,
        now: DateTime<Utc>,
    ) -> LedgerResult<CommandOutcome> {
        let before = self
            .storage
            .accounts
            .get(cmd.account_id)?
            .ok_or_else(|| LedgerError::account_not_found(cmd.account_id.to_string()))?;

        let mut account = before.clone();
        account.is_connected = true;
        account.status = AccountStatus::Active;
        account.last_synced = now;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        let summary = if before.is_connected {
            format!("last_synced: {} -> {}", before.last_synced, now)
        } else {
            format!(
                "connected: false -> true, status: {} -> {}",
                before.status, account.status
            )
        };
        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
            summary,
            now,
        )?;

        Ok(CommandOutcome::AccountConnected {
            account_id: account.id,
            name: account.name,
            newly_connected: !before.is_connected,
        })
    }

    fn mark_bill_paid(
        &self,
        cmd: MarkBillPaidCommand,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> LedgerResult<CommandOutcome> {
        let before = self
            .storage
            .bills
            .get(cmd.bill_id)?
            .ok_or_else(|| LedgerError::bill_not_found(cmd.bill_id.to_string()))?;

        if before.is_paid() {
            return Err(LedgerError::Validation(format!(
                "Bill '{}' is already paid",
                before.name
            )));
        }

        let mut bill = before.clone();
        bill.status = BillStatus::Paid;
        bill.last_paid = Some(today);
        if bill.is_recurring {
            bill.next_due = bill.frequency.advance(bill.due_date);
        }

        self.storage.bills.upsert(bill.clone())?;
        self.storage.bills.save()?;

        self.storage.log_update(
            EntityType::Bill,
            bill.id.to_string(),
            Some(bill.name.clone()),
            &before,
            &bill,
            format!("status: {} -> {}", before.status.as_str(), bill.status.as_str()),
            now,
        )?;

        Ok(CommandOutcome::BillPaid {
            bill_id: bill.id,
            name: bill.name,
            next_due: bill.is_recurring.then_some(bill.next_due),
        })
    }

    fn upload_statement(
        &self,
        cmd: UploadStatementCommand,
        now: DateTime<Utc>,
    ) -> LedgerResult<CommandOutcome> {
        let format = StatementFormat::from_path(&cmd.path)?;

        let metadata = std::fs::metadata(&cmd.path).map_err(|_| LedgerError::NotFound {
            entity_type: "Statement file",
            identifier: cmd.path.display().to_string(),
        })?;
        if !metadata.is_file() {
            return Err(LedgerError::Validation(format!(
                "{} is not a file",
                cmd.path.display()
            )));
        }
        if metadata.len() > self.settings.max_upload_bytes {
            return Err(LedgerError::Validation(format!(
                "{} is {} bytes; the upload limit is {} bytes",
                cmd.path.display(),
                metadata.len(),
                self.settings.max_upload_bytes
            )));
        }

        if let Some(account_id) = cmd.account_id {
            if self.storage.accounts.get(account_id)?.is_none() {
                return Err(LedgerError::account_not_found(account_id.to_string()));
            }
        }

        let file_name = cmd
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cmd.path.display().to_string());

        let upload =
            StatementUpload::queued(file_name, format, metadata.len(), cmd.account_id, now);

        self.storage.statements.add(upload.clone())?;
        self.storage.statements.save()?;

        self.storage.log_create(
            EntityType::Statement,
            upload.id.to_string(),
            Some(upload.file_name.clone()),
            &upload,
            now,
        )?;

        Ok(CommandOutcome::StatementQueued(upload))
    }
}
