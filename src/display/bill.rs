//! Bill display formatting
//!
//! The bills screen: upcoming total, status filter chips with counts, and a
//! table of the filtered bills with relative due dates.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_currency_with, format_relative_date};
use super::labels::{bill_status_icon, category_icon, frequency_label};
use crate::ledger::{BillFilter, LedgerView};
use crate::models::Bill;

#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Bill")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Repeats")]
    repeats: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl BillRow {
    fn new(bill: &Bill, symbol: &str, today: NaiveDate) -> Self {
        let repeats = if bill.is_recurring {
            frequency_label(bill.frequency).to_string()
        } else {
            "Once".to_string()
        };
        let repeats = if bill.auto_pay {
            format!("{} (auto)", repeats)
        } else {
            repeats
        };

        Self {
            icon: category_icon(&bill.category),
            name: bill.name.clone(),
            amount: format_currency_with(bill.amount, symbol),
            due: format_relative_date(bill.due_date, today),
            status: format!("{} {}", bill_status_icon(bill.status), bill.status),
            repeats,
            id: bill.id.short(),
        }
    }
}

/// Render the bills screen for the given filter
pub fn format_bill_overview(
    view: &LedgerView<'_>,
    filter: BillFilter,
    symbol: &str,
    today: NaiveDate,
) -> String {
    let upcoming = view.upcoming_bills();
    let counts = view.bill_counts();

    let mut output = String::new();
    output.push_str(&format!(
        "Upcoming: {} across {} bill{}\n",
        format_currency_with(upcoming.total, symbol),
        upcoming.count,
        if upcoming.count == 1 { "" } else { "s" }
    ));
    if counts.overdue > 0 {
        output.push_str(&format!("  {} overdue\n", counts.overdue));
    }
    output.push('\n');

    let chips: Vec<String> = BillFilter::ALL
        .iter()
        .map(|choice| {
            let label = format!("{} ({})", choice, counts.for_filter(*choice));
            if *choice == filter {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    output.push_str(&format!("Filter: {}\n", chips.join("  ")));

    let bills = view.bills(filter);
    if bills.is_empty() {
        output.push_str("No bills found.\n");
        return output;
    }

    let rows: Vec<BillRow> = bills.iter().map(|b| BillRow::new(b, symbol, today)).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Format a single bill's details
pub fn format_bill_details(bill: &Bill, symbol: &str, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", category_icon(&bill.category), bill.name));
    output.push_str(&format!("  ID:        {}\n", bill.id));
    output.push_str(&format!("  Category:  {}\n", bill.category));
    output.push_str(&format!(
        "  Amount:    {}\n",
        format_currency_with(bill.amount, symbol)
    ));
    output.push_str(&format!(
        "  Due:       {}\n",
        format_relative_date(bill.due_date, today)
    ));
    output.push_str(&format!("  Status:    {}\n", bill.status));
    if bill.is_recurring {
        output.push_str(&format!(
            "  Repeats:   {}\n",
            frequency_label(bill.frequency)
        ));
        output.push_str(&format!(
            "  Next Due:  {}\n",
            format_relative_date(bill.next_due, today)
        ));
    }
    output.push_str(&format!(
        "  Auto-pay:  {}\n",
        if bill.auto_pay { "On" } else { "Off" }
    ));
    if let Some(merchant) = &bill.merchant {
        output.push_str(&format!("  Merchant:  {}\n", merchant));
    }
    if let Some(paid) = bill.last_paid {
        output.push_str(&format!(
            "  Last Paid: {}\n",
            format_relative_date(paid, today)
        ));
    }
    if let Some(description) = &bill.description {
        output.push('\n');
        output.push_str(&format!("  {}\n", description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillStatus, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn bills() -> Vec<Bill> {
        vec![
            Bill::new("Rent", "Housing", Money::from_cents(150000), today().succ_opt().unwrap()),
            Bill::new("Electric", "Utilities", Money::from_cents(8950), today())
                .with_status(BillStatus::DueToday),
            Bill::new("Phone", "Phone", Money::from_cents(6500), today().pred_opt().unwrap())
                .with_status(BillStatus::Overdue),
        ]
    }

    #[test]
    fn test_bill_overview_all() {
        let bills = bills();
        let view = LedgerView::new(&[], &bills);
        let output = format_bill_overview(&view, BillFilter::All, "$", today());

        assert!(output.contains("Upcoming: $1589.50 across 2 bills"));
        assert!(output.contains("1 overdue"));
        assert!(output.contains("[all (3)]"));
        assert!(output.contains("upcoming (1)"));
        assert!(output.contains("Tomorrow"));
        assert!(output.contains("Today"));
        assert!(output.contains("Electric"));
    }

    #[test]
    fn test_bill_overview_upcoming_hides_due_today() {
        let bills = bills();
        let view = LedgerView::new(&[], &bills);
        let output = format_bill_overview(&view, BillFilter::Upcoming, "$", today());

        assert!(output.contains("Rent"));
        assert!(!output.contains("Electric"));
    }

    #[test]
    fn test_bill_overview_empty() {
        let bills = bills();
        let view = LedgerView::new(&[], &bills);
        let output = format_bill_overview(&view, BillFilter::Paid, "$", today());
        assert!(output.contains("No bills found."));
    }

    #[test]
    fn test_bill_details() {
        let bill = bills()[0].clone().with_merchant("Greystar").with_auto_pay(true);
        let output = format_bill_details(&bill, "$", today());

        assert!(output.contains("Amount:    $1500.00"));
        assert!(output.contains("Due:       Tomorrow"));
        assert!(output.contains("Repeats:   Monthly"));
        assert!(output.contains("Auto-pay:  On"));
        assert!(output.contains("Merchant:  Greystar"));
    }
}
