//! Bill CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::commands::MarkBillPaidCommand;
use crate::config::settings::Settings;
use crate::display::bill::{format_bill_details, format_bill_overview};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{find_bill, BillFilter, LedgerView};
use crate::services::CommandService;
use crate::source::BillSource;
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Show bill details
    Show {
        /// Bill name or ID
        bill: String,
    },
}

/// Show the bills overview, or one bill's details
pub fn handle_bills_command<B: BillSource>(
    source: B,
    settings: &Settings,
    filter: Option<&str>,
    cmd: Option<BillCommands>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let bills = source.list_all()?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        None => {
            let filter = filter
                .map(str::parse::<BillFilter>)
                .transpose()?
                .unwrap_or_default();
            let view = LedgerView::new(&[], &bills);
            print!("{}", format_bill_overview(&view, filter, symbol, today));
        }
        Some(BillCommands::Show { bill }) => {
            let found =
                find_bill(&bills, &bill).ok_or_else(|| LedgerError::bill_not_found(&bill))?;
            print!("{}", format_bill_details(found, symbol, today));
        }
    }

    Ok(())
}

/// Mark a bill paid by name or ID
pub fn handle_pay_command(
    storage: &Storage,
    settings: &Settings,
    bill: &str,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let found = storage
        .bills
        .find(bill)?
        .ok_or_else(|| LedgerError::bill_not_found(bill))?;

    let outcome = CommandService::new(storage, settings)
        .execute(MarkBillPaidCommand { bill_id: found.id }.into(), now, today)?;

    println!("{}", outcome);
    Ok(())
}
