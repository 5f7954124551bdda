//! Account CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::commands::ConnectAccountCommand;
use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_overview};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{find_account, AccountFilter, LedgerView};
use crate::services::CommandService;
use crate::source::AccountSource;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
}

/// Show the accounts overview, or one account's details
pub fn handle_accounts_command<A: AccountSource>(
    source: A,
    settings: &Settings,
    account_type: Option<&str>,
    cmd: Option<AccountCommands>,
    now: DateTime<Utc>,
) -> LedgerResult<()> {
    let accounts = source.list_all()?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        None => {
            let filter = account_type
                .map(str::parse::<AccountFilter>)
                .transpose()?
                .unwrap_or_default();
            let view = LedgerView::new(&accounts, &[]);
            print!("{}", format_account_overview(&view, filter, symbol, &now));
        }
        Some(AccountCommands::Show { account }) => {
            let found = find_account(&accounts, &account)
                .ok_or_else(|| LedgerError::account_not_found(&account))?;
            print!("{}", format_account_details(found, symbol, &now));
        }
    }

    Ok(())
}

/// Connect an account by name or ID
pub fn handle_connect_command(
    storage: &Storage,
    settings: &Settings,
    account: &str,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let found = storage
        .accounts
        .find(account)?
        .ok_or_else(|| LedgerError::account_not_found(account))?;

    let outcome = CommandService::new(storage, settings)
        .execute(ConnectAccountCommand { account_id: found.id }.into(), now, today)?;

    println!("{}", outcome);
    Ok(())
}
