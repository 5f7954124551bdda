//! Filter selectors for the accounts and bills lists
//!
//! Both filters keep the input order and never allocate new entities; they
//! return borrowed subsequences of the snapshot they are given.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::models::{Account, AccountType, Bill, BillStatus};

/// Account list selector: everything, or one account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountFilter {
    #[default]
    All,
    Only(AccountType),
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            Self::All => true,
            Self::Only(account_type) => account.account_type == *account_type,
        }
    }

    /// The selectors offered to the user, in display order
    pub fn choices() -> Vec<AccountFilter> {
        std::iter::once(Self::All)
            .chain(AccountType::ALL.iter().copied().map(Self::Only))
            .collect()
    }
}

impl From<AccountType> for AccountFilter {
    fn from(account_type: AccountType) -> Self {
        Self::Only(account_type)
    }
}

impl FromStr for AccountFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<AccountType>().map(Self::Only)
    }
}

impl fmt::Display for AccountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(account_type) => write!(f, "{}", account_type.as_str()),
        }
    }
}

/// Bill list selector
///
/// There is no `DueToday` selector: a bill due today is listed under `All`
/// only, while `compute_upcoming_bills_total` still counts it as upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillFilter {
    #[default]
    All,
    Upcoming,
    Overdue,
    Paid,
}

impl BillFilter {
    pub const ALL: [BillFilter; 4] = [Self::All, Self::Upcoming, Self::Overdue, Self::Paid];

    pub fn matches(&self, bill: &Bill) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => bill.status == BillStatus::Upcoming,
            Self::Overdue => bill.status == BillStatus::Overdue,
            Self::Paid => bill.status == BillStatus::Paid,
        }
    }
}

impl FromStr for BillFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "upcoming" => Ok(Self::Upcoming),
            "overdue" => Ok(Self::Overdue),
            "paid" => Ok(Self::Paid),
            _ => Err(LedgerError::invalid_enum("bill filter", s)),
        }
    }
}

impl fmt::Display for BillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::Overdue => write!(f, "overdue"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// Accounts matching `filter`, in input order
pub fn filter_accounts(accounts: &[Account], filter: AccountFilter) -> Vec<&Account> {
    accounts.iter().filter(|a| filter.matches(a)).collect()
}

/// Bills matching `filter`, in input order
pub fn filter_bills(bills: &[Bill], filter: BillFilter) -> Vec<&Bill> {
    bills.iter().filter(|b| filter.matches(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::{account, bill};

    fn sample_accounts() -> Vec<Account> {
        vec![
            account("Checking", AccountType::Checking, 245075),
            account("Visa", AccountType::Credit, -124530),
            account("Savings", AccountType::Savings, 1_250_000),
            account("Amex", AccountType::Credit, -30000),
            account("Car", AccountType::Loan, -1_500_000),
        ]
    }

    #[test]
    fn test_all_returns_input_unchanged() {
        let accounts = sample_accounts();
        let filtered = filter_accounts(&accounts, AccountFilter::All);
        assert_eq!(filtered.len(), accounts.len());
        for (got, expected) in filtered.iter().zip(accounts.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_type_filter_partitions_input() {
        let accounts = sample_accounts();
        for account_type in AccountType::ALL {
            let matched = filter_accounts(&accounts, account_type.into());
            assert!(matched.iter().all(|a| a.account_type == account_type));

            let rest = accounts
                .iter()
                .filter(|a| a.account_type != account_type)
                .count();
            assert_eq!(matched.len() + rest, accounts.len());
        }
    }

    #[test]
    fn test_type_filter_preserves_order() {
        let accounts = sample_accounts();
        let names: Vec<_> = filter_accounts(&accounts, AccountFilter::Only(AccountType::Credit))
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Visa", "Amex"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_accounts(&[], AccountFilter::All).is_empty());
        assert!(filter_bills(&[], BillFilter::Paid).is_empty());
    }

    #[test]
    fn test_bill_filters() {
        let bills = vec![
            bill("Rent", 150000, BillStatus::Upcoming),
            bill("Electric", 8950, BillStatus::DueToday),
            bill("Phone", 6500, BillStatus::Overdue),
            bill("Internet", 7999, BillStatus::Paid),
        ];

        assert_eq!(filter_bills(&bills, BillFilter::All).len(), 4);

        let upcoming = filter_bills(&bills, BillFilter::Upcoming);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Rent");

        assert_eq!(filter_bills(&bills, BillFilter::Overdue)[0].name, "Phone");
        assert_eq!(filter_bills(&bills, BillFilter::Paid)[0].name, "Internet");
    }

    #[test]
    fn test_due_today_only_reachable_through_all() {
        let bills = vec![bill("Electric", 8950, BillStatus::DueToday)];
        for filter in BillFilter::ALL {
            let expected = usize::from(filter == BillFilter::All);
            assert_eq!(filter_bills(&bills, filter).len(), expected, "{}", filter);
        }
    }

    #[test]
    fn test_bill_filter_idempotent() {
        let bills = vec![
            bill("Rent", 150000, BillStatus::Upcoming),
            bill("Gym", 4999, BillStatus::Upcoming),
            bill("Phone", 6500, BillStatus::Overdue),
        ];

        for filter in BillFilter::ALL {
            let once: Vec<Bill> = filter_bills(&bills, filter).into_iter().cloned().collect();
            let twice: Vec<Bill> = filter_bills(&once, filter).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<AccountFilter>().unwrap(), AccountFilter::All);
        assert_eq!(
            "Loan".parse::<AccountFilter>().unwrap(),
            AccountFilter::Only(AccountType::Loan)
        );
        assert!("gold".parse::<AccountFilter>().is_err());

        assert_eq!("OVERDUE".parse::<BillFilter>().unwrap(), BillFilter::Overdue);
        assert!(matches!(
            "due_today".parse::<BillFilter>(),
            Err(LedgerError::InvalidEnumValue { kind: "bill filter", .. })
        ));
    }

    #[test]
    fn test_account_filter_choices() {
        let choices = AccountFilter::choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], AccountFilter::All);
        assert_eq!(choices[0].to_string(), "all");
        assert_eq!(choices[3].to_string(), "credit");
    }
}
