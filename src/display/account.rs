//! Account display formatting
//!
//! The accounts overview: net worth header, asset/debt split, type filter
//! chips and a table of the filtered accounts.

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_currency_with, format_relative_time, format_signed_currency};
use super::labels::{account_status_icon, account_type_icon};
use crate::ledger::{AccountFilter, LedgerView};
use crate::models::Account;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Account")]
    name: String,
    #[tabled(rename = "Institution")]
    institution: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Synced")]
    synced: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl AccountRow {
    fn new(account: &Account, symbol: &str, now: &DateTime<Utc>) -> Self {
        let synced = if account.is_connected {
            format!(
                "{} {}",
                account_status_icon(account.status),
                format_relative_time(&account.last_synced, now)
            )
        } else {
            format!("{} not connected", account_status_icon(account.status))
        };

        Self {
            icon: account_type_icon(account.account_type),
            name: account.name.clone(),
            institution: account.institution.clone(),
            number: account.account_number.clone(),
            balance: format_signed_currency(account.balance, symbol),
            synced,
            id: account.id.short(),
        }
    }
}

/// Render the accounts overview for the given filter
pub fn format_account_overview(
    view: &LedgerView<'_>,
    filter: AccountFilter,
    symbol: &str,
    now: &DateTime<Utc>,
) -> String {
    let totals = view.assets_and_debts();

    let mut output = String::new();
    output.push_str(&format!(
        "Net Worth: {}\n",
        format_signed_currency(view.net_worth(), symbol)
    ));
    output.push_str(&format!(
        "  Assets: {}    Debts: {}\n\n",
        format_currency_with(totals.total_assets, symbol),
        format_currency_with(totals.total_debts, symbol)
    ));

    let chips: Vec<String> = AccountFilter::choices()
        .into_iter()
        .map(|choice| {
            if choice == filter {
                format!("[{}]", choice)
            } else {
                choice.to_string()
            }
        })
        .collect();
    output.push_str(&format!("Filter: {}\n", chips.join("  ")));

    let accounts = view.accounts(filter);
    if accounts.is_empty() {
        output.push_str("No accounts found.\n");
        return output;
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow::new(a, symbol, now))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Format a single account's details
pub fn format_account_details(
    account: &Account,
    symbol: &str,
    now: &DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        account_type_icon(account.account_type),
        account.name
    ));
    output.push_str(&format!("  Type:        {}\n", account.account_type));
    output.push_str(&format!("  ID:          {}\n", account.id));
    output.push_str(&format!("  Institution: {}\n", account.institution));
    if !account.account_number.is_empty() {
        output.push_str(&format!("  Number:      {}\n", account.account_number));
    }
    output.push_str(&format!(
        "  Balance:     {} {}\n",
        format_signed_currency(account.balance, symbol),
        account.currency
    ));
    output.push_str(&format!("  Status:      {}\n", account.status));
    output.push_str(&format!(
        "  Connected:   {}\n",
        if account.is_connected { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Last Sync:   {}\n",
        format_relative_time(&account.last_synced, now)
    ));
    if let Some(color) = &account.color {
        output.push_str(&format!("  Color:       {}\n", color));
    }

    output
}
