//! Display formatting for terminal output
//!
//! Pure helpers (currency, relative dates, labels) plus the list and detail
//! views built on top of them.

pub mod account;
pub mod bill;
pub mod format;
pub mod labels;
pub mod rejected;
pub mod statement;
pub mod summary;

pub use account::{format_account_details, format_account_overview};
pub use bill::{format_bill_details, format_bill_overview};
pub use format::{
    format_currency, format_currency_with, format_file_size, format_relative_date,
    format_relative_time, format_signed_currency,
};
pub use rejected::{format_rejected_account, format_rejected_bill};
pub use statement::{format_statement_list, format_supported_formats};
pub use summary::format_summary;
