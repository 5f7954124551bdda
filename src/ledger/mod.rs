//! Financial ledger view
//!
//! Pure filtering and aggregation over read-only snapshots of accounts and
//! bills. Nothing here performs I/O, reads the clock, or mutates its input;
//! callers fetch a fresh snapshot from a data source and pass slices in.
//!
//! # Example
//!
//! ```rust,ignore
//! let view = LedgerView::new(&accounts, &bills);
//! let credit_cards = view.accounts(AccountFilter::Only(AccountType::Credit));
//! let summary = view.summary();
//! ```

pub mod filter;
pub mod lookup;
pub mod totals;

pub use filter::{filter_accounts, filter_bills, AccountFilter, BillFilter};
pub use lookup::{find_account, find_bill};
pub use totals::{
    compute_assets_and_debts, compute_net_worth, compute_upcoming_bills_total,
    count_bills_by_status, AssetsAndDebts, BillStatusCounts, UpcomingBills,
};

use serde::{Deserialize, Serialize};

use crate::models::{Account, Bill, Money};

/// Borrowed snapshot of accounts and bills
#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'a> {
    accounts: &'a [Account],
    bills: &'a [Bill],
}

/// Headline figures for the overview screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub net_worth: Money,
    pub total_assets: Money,
    pub total_debts: Money,
    pub account_count: usize,
    pub connected_count: usize,
    pub upcoming_bills: UpcomingBills,
    pub overdue_count: usize,
}

impl<'a> LedgerView<'a> {
    pub fn new(accounts: &'a [Account], bills: &'a [Bill]) -> Self {
        Self { accounts, bills }
    }

    pub fn accounts(&self, filter: AccountFilter) -> Vec<&'a Account> {
        filter_accounts(self.accounts, filter)
    }

    pub fn bills(&self, filter: BillFilter) -> Vec<&'a Bill> {
        filter_bills(self.bills, filter)
    }

    /// Net worth over every account, regardless of any active filter
    pub fn net_worth(&self) -> Money {
        compute_net_worth(self.accounts)
    }

    pub fn assets_and_debts(&self) -> AssetsAndDebts {
        compute_assets_and_debts(self.accounts)
    }

    pub fn upcoming_bills(&self) -> UpcomingBills {
        compute_upcoming_bills_total(self.bills)
    }

    pub fn bill_counts(&self) -> BillStatusCounts {
        count_bills_by_status(self.bills)
    }

    pub fn summary(&self) -> LedgerSummary {
        let totals = self.assets_and_debts();
        LedgerSummary {
            net_worth: self.net_worth(),
            total_assets: totals.total_assets,
            total_debts: totals.total_debts,
            account_count: self.accounts.len(),
            connected_count: self.accounts.iter().filter(|a| a.is_connected).count(),
            upcoming_bills: self.upcoming_bills(),
            overdue_count: self.bill_counts().overdue,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{account, bill};
    use super::*;
    use crate::models::{AccountType, BillStatus};
    use chrono::Utc;

    #[test]
    fn test_summary() {
        let accounts = vec![
            account("Checking", AccountType::Checking, 245075).connected(Utc::now()),
            account("Visa", AccountType::Credit, -124530),
        ];
        let bills = vec![
            bill("Rent", 150000, BillStatus::Upcoming),
            bill("Phone", 6500, BillStatus::Overdue),
        ];

        let summary = LedgerView::new(&accounts, &bills).summary();
        assert_eq!(summary.net_worth, Money::from_cents(120545));
        assert_eq!(summary.total_assets, Money::from_cents(245075));
        assert_eq!(summary.total_debts, Money::from_cents(124530));
        assert_eq!(summary.account_count, 2);
        assert_eq!(summary.connected_count, 1);
        assert_eq!(summary.upcoming_bills.count, 1);
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn test_net_worth_ignores_filter() {
        let accounts = vec![
            account("Checking", AccountType::Checking, 1000),
            account("Visa", AccountType::Credit, -400),
        ];
        let view = LedgerView::new(&accounts, &[]);

        assert_eq!(view.accounts(AccountFilter::Only(AccountType::Credit)).len(), 1);
        assert_eq!(view.net_worth(), Money::from_cents(600));
    }
}
