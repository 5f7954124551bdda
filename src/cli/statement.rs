//! Statement upload CLI commands

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::commands::UploadStatementCommand;
use crate::config::settings::Settings;
use crate::display::format::format_file_size;
use crate::display::statement::{format_statement_list, format_supported_formats};
use crate::error::{LedgerError, LedgerResult};
use crate::services::CommandService;
use crate::storage::Storage;

/// Queue a statement file, optionally attached to an account
pub fn handle_upload_command(
    storage: &Storage,
    settings: &Settings,
    file: PathBuf,
    account: Option<&str>,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let account_id = match account {
        Some(identifier) => Some(
            storage
                .accounts
                .find(identifier)?
                .ok_or_else(|| LedgerError::account_not_found(identifier))?
                .id,
        ),
        None => None,
    };

    let service = CommandService::new(storage, settings);
    let result = service.execute(
        UploadStatementCommand {
            path: file,
            account_id,
        }
        .into(),
        now,
        today,
    );

    match result {
        Ok(outcome) => {
            println!("{}", outcome);
            println!(
                "Files up to {} are accepted.",
                format_file_size(settings.max_upload_bytes)
            );
            Ok(())
        }
        Err(e @ LedgerError::UnsupportedFormat(_)) => {
            eprintln!("Supported formats:");
            eprint!("{}", format_supported_formats());
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// List queued statement uploads
pub fn handle_statements_command(storage: &Storage, now: DateTime<Utc>) -> LedgerResult<()> {
    let uploads = storage.statements.get_all()?;
    let accounts = storage.accounts.get_all()?;
    print!("{}", format_statement_list(&uploads, &accounts, &now));
    Ok(())
}
