//! CSV export of accounts and bills

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Bill};

fn export_err(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Write accounts as CSV, one row per account
pub fn export_accounts_csv<W: Write>(accounts: &[Account], writer: W) -> LedgerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "ID",
        "Name",
        "Type",
        "Institution",
        "Account Number",
        "Balance",
        "Currency",
        "Connected",
        "Status",
        "Last Synced",
    ])
    .map_err(export_err)?;

    for account in accounts {
        wtr.write_record([
            account.id.to_string(),
            account.name.clone(),
            account.account_type.as_str().to_string(),
            account.institution.clone(),
            account.account_number.clone(),
            account.balance.to_string(),
            account.currency.clone(),
            account.is_connected.to_string(),
            account.status.to_string(),
            account.last_synced.to_rfc3339(),
        ])
        .map_err(export_err)?;
    }

    wtr.flush().map_err(export_err)
}

/// Write bills as CSV, one row per bill
pub fn export_bills_csv<W: Write>(bills: &[Bill], writer: W) -> LedgerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "ID",
        "Name",
        "Category",
        "Amount",
        "Due Date",
        "Frequency",
        "Status",
        "Recurring",
        "Auto Pay",
        "Merchant",
        "Last Paid",
        "Next Due",
    ])
    .map_err(export_err)?;

    for bill in bills {
        wtr.write_record([
            bill.id.to_string(),
            bill.name.clone(),
            bill.category.clone(),
            bill.amount.to_string(),
            bill.due_date.to_string(),
            bill.frequency.to_string(),
            bill.status.as_str().to_string(),
            bill.is_recurring.to_string(),
            bill.auto_pay.to_string(),
            bill.merchant.clone().unwrap_or_default(),
            bill.last_paid.map(|d| d.to_string()).unwrap_or_default(),
            bill.next_due.to_string(),
        ])
        .map_err(export_err)?;
    }

    wtr.flush().map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::{account, bill};
    use crate::models::{AccountType, BillStatus, Money};

    #[test]
    fn test_accounts_csv() {
        let mut card = account("Sapphire, Preferred", AccountType::Credit, -124_530);
        card.institution = "Chase".into();
        let mut output = Vec::new();
        export_accounts_csv(&[card], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("ID,Name,Type,Institution"));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Sapphire, Preferred\",credit,Chase"));
        assert!(row.contains("-1245.30"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_bills_csv_is_readable_back() {
        let bills = vec![
            bill("Rent", 185_000, BillStatus::Upcoming),
            bill("Electric", 12_450, BillStatus::DueToday),
        ];
        let mut output = Vec::new();
        export_bills_csv(&bills, &mut output).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "Electric");
        assert_eq!(&rows[1][3], Money::from_cents(12_450).to_string());
        assert_eq!(&rows[1][6], "due_today");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut output = Vec::new();
        export_bills_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
