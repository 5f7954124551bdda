//! ledger-view - account and bill views for the terminal
//!
//! Tracks financial accounts (checking, savings, credit cards, investments,
//! loans) and upcoming bills, and renders the numbers people look at first:
//! net worth, assets against debts, what is due and what is overdue.
//!
//! # Architecture
//!
//! - `models`: accounts, bills, statement uploads, money and IDs
//! - `ledger`: pure filtering and aggregation over account/bill snapshots
//! - `display`: currency and relative-date formatting, terminal views
//! - `source`: `AccountSource`/`BillSource` providers and the sample ledger
//! - `commands`: user intents (connect, pay, upload)
//! - `services`: applies intents to storage
//! - `storage`: JSON file storage layer
//! - `audit`: append-only audit log
//! - `export`: CSV, JSON and YAML export
//! - `config`: paths and settings
//! - `cli`: command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_view::ledger::{AccountFilter, LedgerView};
//! use ledger_view::source::{AccountSource, BillSource, MemorySource};
//!
//! let source = MemorySource::sample(now, today);
//! let accounts = AccountSource::list_all(&source)?;
//! let bills = BillSource::list_all(&source)?;
//! let view = LedgerView::new(&accounts, &bills);
//! println!("{}", view.net_worth());
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod source;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
