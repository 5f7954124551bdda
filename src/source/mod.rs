//! Data sources for account and bill snapshots
//!
//! Views never hold on to a source. Callers ask a source for a fresh
//! snapshot with `list_all()` and hand the resulting slice to
//! `ledger::LedgerView`.

pub mod memory;
pub mod sample;

pub use memory::MemorySource;
pub use sample::{sample_accounts, sample_bills};

use crate::error::LedgerResult;
use crate::models::{Account, Bill};

/// Anything that can produce the current list of accounts
pub trait AccountSource {
    fn list_all(&self) -> LedgerResult<Vec<Account>>;
}

/// Anything that can produce the current list of bills
pub trait BillSource {
    fn list_all(&self) -> LedgerResult<Vec<Bill>>;
}

impl<T: AccountSource + ?Sized> AccountSource for &T {
    fn list_all(&self) -> LedgerResult<Vec<Account>> {
        (**self).list_all()
    }
}

impl<T: BillSource + ?Sized> BillSource for &T {
    fn list_all(&self) -> LedgerResult<Vec<Bill>> {
        (**self).list_all()
    }
}
