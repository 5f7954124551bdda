//! One-screen ledger summary

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_currency_with, format_signed_currency};
use crate::ledger::LedgerSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "")]
    value: String,
}

pub fn format_summary(summary: &LedgerSummary, symbol: &str) -> String {
    let rows = vec![
        SummaryRow {
            label: "Net worth",
            value: format_signed_currency(summary.net_worth, symbol),
        },
        SummaryRow {
            label: "Assets",
            value: format_currency_with(summary.total_assets, symbol),
        },
        SummaryRow {
            label: "Debts",
            value: format_currency_with(summary.total_debts, symbol),
        },
        SummaryRow {
            label: "Accounts",
            value: format!(
                "{} ({} connected)",
                summary.account_count, summary.connected_count
            ),
        },
        SummaryRow {
            label: "Upcoming bills",
            value: format!(
                "{} ({})",
                format_currency_with(summary.upcoming_bills.total, symbol),
                summary.upcoming_bills.count
            ),
        },
        SummaryRow {
            label: "Overdue bills",
            value: summary.overdue_count.to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::blank());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::UpcomingBills;
    use crate::models::Money;

    #[test]
    fn test_format_summary() {
        let summary = LedgerSummary {
            net_worth: Money::from_cents(-50000),
            total_assets: Money::from_cents(100000),
            total_debts: Money::from_cents(150000),
            account_count: 3,
            connected_count: 2,
            upcoming_bills: UpcomingBills {
                count: 2,
                total: Money::from_cents(158950),
            },
            overdue_count: 1,
        };

        let output = format_summary(&summary, "$");
        assert!(output.contains("-$500.00"));
        assert!(output.contains("$1500.00"));
        assert!(output.contains("3 (2 connected)"));
        assert!(output.contains("$1589.50 (2)"));
    }
}
