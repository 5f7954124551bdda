//! Aggregates over account and bill snapshots

use serde::{Deserialize, Serialize};

use crate::models::{Account, Bill, BillStatus, Money};

use super::filter::BillFilter;

/// Asset and debt totals for a set of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetsAndDebts {
    /// Sum of checking, savings and investment balances
    pub total_assets: Money,
    /// Magnitude of the summed credit and loan balances
    pub total_debts: Money,
}

impl AssetsAndDebts {
    /// Assets minus debts; equals the net worth when liability balances are negative
    pub fn net(&self) -> Money {
        self.total_assets - self.total_debts
    }
}

/// Bills still to be paid on time (upcoming or due today)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpcomingBills {
    pub count: usize,
    pub total: Money,
}

/// Number of bills per status, used for filter badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillStatusCounts {
    pub all: usize,
    pub upcoming: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub paid: usize,
}

impl BillStatusCounts {
    /// Badge count for a filter selector
    pub fn for_filter(&self, filter: BillFilter) -> usize {
        match filter {
            BillFilter::All => self.all,
            BillFilter::Upcoming => self.upcoming,
            BillFilter::Overdue => self.overdue,
            BillFilter::Paid => self.paid,
        }
    }
}

/// Sum of every balance; liabilities are already negative
pub fn compute_net_worth(accounts: &[Account]) -> Money {
    accounts.iter().map(|a| a.balance).sum()
}

pub fn compute_assets_and_debts(accounts: &[Account]) -> AssetsAndDebts {
    let (debts, assets): (Vec<&Account>, Vec<&Account>) = accounts
        .iter()
        .partition(|a| a.account_type.is_liability());

    AssetsAndDebts {
        total_assets: assets.iter().map(|a| a.balance).sum(),
        total_debts: debts.iter().map(|a| a.balance).sum::<Money>().abs(),
    }
}

/// Count and total of bills that are upcoming or due today
///
/// Overdue and paid bills are left out.
pub fn compute_upcoming_bills_total(bills: &[Bill]) -> UpcomingBills {
    bills
        .iter()
        .filter(|b| matches!(b.status, BillStatus::Upcoming | BillStatus::DueToday))
        .fold(UpcomingBills::default(), |acc, b| UpcomingBills {
            count: acc.count + 1,
            total: acc.total + b.amount,
        })
}

pub fn count_bills_by_status(bills: &[Bill]) -> BillStatusCounts {
    let mut counts = BillStatusCounts {
        all: bills.len(),
        ..Default::default()
    };

    for bill in bills {
        match bill.status {
            BillStatus::Upcoming => counts.upcoming += 1,
            BillStatus::DueToday => counts.due_today += 1,
            BillStatus::Overdue => counts.overdue += 1,
            BillStatus::Paid => counts.paid += 1,
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::{account, bill};
    use crate::models::AccountType;

    #[test]
    fn test_checking_and_credit_example() {
        let accounts = vec![
            account("Checking", AccountType::Checking, 245075),
            account("Visa", AccountType::Credit, -124530),
        ];

        assert_eq!(compute_net_worth(&accounts), Money::from_cents(120545));

        let totals = compute_assets_and_debts(&accounts);
        assert_eq!(totals.total_assets, Money::from_cents(245075));
        assert_eq!(totals.total_debts, Money::from_cents(124530));
    }

    #[test]
    fn test_partition_covers_every_type() {
        let accounts = vec![
            account("Checking", AccountType::Checking, 100),
            account("Savings", AccountType::Savings, 200),
            account("Brokerage", AccountType::Investment, 400),
            account("Card", AccountType::Credit, -800),
            account("Mortgage", AccountType::Loan, -1600),
        ];

        let totals = compute_assets_and_debts(&accounts);
        assert_eq!(totals.total_assets.cents(), 700);
        assert_eq!(totals.total_debts.cents(), 2400);
        assert_eq!(totals.net(), compute_net_worth(&accounts));
    }

    #[test]
    fn test_net_matches_net_worth_across_subsets() {
        let accounts = vec![
            account("Checking", AccountType::Checking, 245075),
            account("Visa", AccountType::Credit, -124530),
            account("Savings", AccountType::Savings, 1_250_000),
            account("401k", AccountType::Investment, 4_500_000),
            account("Student", AccountType::Loan, -2_200_000),
        ];

        // every prefix, including the empty one
        for len in 0..=accounts.len() {
            let subset = &accounts[..len];
            assert_eq!(compute_assets_and_debts(subset).net(), compute_net_worth(subset));
        }
    }

    #[test]
    fn test_empty_accounts() {
        assert_eq!(compute_net_worth(&[]), Money::zero());
        assert_eq!(compute_assets_and_debts(&[]), AssetsAndDebts::default());
    }

    #[test]
    fn test_upcoming_total_includes_due_today() {
        let bills = vec![
            bill("Rent", 150000, BillStatus::Upcoming),
            bill("Electric", 8950, BillStatus::DueToday),
            bill("Phone", 6500, BillStatus::Overdue),
            bill("Internet", 7999, BillStatus::Paid),
        ];

        let upcoming = compute_upcoming_bills_total(&bills);
        assert_eq!(upcoming.count, 2);
        assert_eq!(upcoming.total, Money::from_cents(158950));
    }

    #[test]
    fn test_status_counts() {
        let bills = vec![
            bill("Rent", 150000, BillStatus::Upcoming),
            bill("Gym", 4999, BillStatus::Upcoming),
            bill("Electric", 8950, BillStatus::DueToday),
            bill("Internet", 7999, BillStatus::Paid),
        ];

        let counts = count_bills_by_status(&bills);
        assert_eq!(counts.all, 4);
        assert_eq!(counts.upcoming, 2);
        assert_eq!(counts.due_today, 1);
        assert_eq!(counts.overdue, 0);
        assert_eq!(counts.for_filter(BillFilter::Paid), 1);
        // the due-today bill has no badge of its own
        assert_eq!(counts.for_filter(BillFilter::Upcoming), 2);
    }
}
