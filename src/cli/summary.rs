//! Ledger summary command

use crate::config::settings::Settings;
use crate::display::summary::format_summary;
use crate::error::LedgerResult;
use crate::ledger::LedgerView;
use crate::source::{AccountSource, BillSource};

pub fn handle_summary_command<A: AccountSource, B: BillSource>(
    accounts: A,
    bills: B,
    settings: &Settings,
) -> LedgerResult<()> {
    let accounts = accounts.list_all()?;
    let bills = bills.list_all()?;

    let view = LedgerView::new(&accounts, &bills);
    print!("{}", format_summary(&view.summary(), &settings.currency_symbol));
    Ok(())
}
