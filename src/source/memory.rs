//! In-memory data source

use chrono::{DateTime, NaiveDate, Utc};

use super::sample::{sample_accounts, sample_bills};
use super::{AccountSource, BillSource};
use crate::error::LedgerResult;
use crate::models::{Account, Bill};

/// Owned accounts and bills served as snapshots
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    accounts: Vec<Account>,
    bills: Vec<Bill>,
}

impl MemorySource {
    pub fn new(accounts: Vec<Account>, bills: Vec<Bill>) -> Self {
        Self { accounts, bills }
    }

    /// The built-in sample ledger, with timestamps relative to `now`
    pub fn sample(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self::new(sample_accounts(now), sample_bills(today))
    }
}

impl AccountSource for MemorySource {
    fn list_all(&self) -> LedgerResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}

impl BillSource for MemorySource {
    fn list_all(&self) -> LedgerResult<Vec<Bill>> {
        Ok(self.bills.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerView;

    fn load<A: AccountSource, B: BillSource>(accounts: A, bills: B) -> (Vec<Account>, Vec<Bill>) {
        (accounts.list_all().unwrap(), bills.list_all().unwrap())
    }

    #[test]
    fn test_empty_source() {
        let source = MemorySource::default();
        let (accounts, bills) = load(&source, &source);
        assert!(accounts.is_empty());
        assert!(bills.is_empty());
    }

    #[test]
    fn test_snapshots_are_independent() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();
        let source = MemorySource::sample(now, now.date_naive());

        let mut first = AccountSource::list_all(&source).unwrap();
        first.clear();

        let second = AccountSource::list_all(&source).unwrap();
        assert!(!second.is_empty());
    }

    #[test]
    fn test_sample_source_feeds_view() {
        let now: DateTime<Utc> = "2025-03-15T12:00:00Z".parse().unwrap();
        let source = MemorySource::sample(now, now.date_naive());
        let (accounts, bills) = load(&source, &source);

        let summary = LedgerView::new(&accounts, &bills).summary();
        assert_eq!(summary.account_count, accounts.len());
        assert!(summary.upcoming_bills.count > 0);
    }
}
