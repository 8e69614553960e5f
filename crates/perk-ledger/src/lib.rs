//! Core ledger logic for the Perk reward points system.
//!
//! This crate is the heart of Perk. It provides:
//! - [`RewardLedger`] — the component wiring the entry store, scope context,
//!   notification sink, and clock together
//! - The append path: validated writes with eager balance caching for
//!   immediate accruals ([`RewardLedger::append_entry`])
//! - Read paths: paged history and current balance
//!   ([`RewardLedger::history`], [`RewardLedger::balance`])
//! - Lazy balance resolution: missing cached balances are materialized in
//!   chronological order the first time a read observes them, each fill
//!   individually persisted so a crash mid-resolution leaves valid state
//!
//! Balances are scoped per `(customer, store)` pair, or per customer alone
//! when [`ScopeConfig::points_for_all_stores`] is enabled.

pub mod error;
pub mod ledger;
pub mod page;
pub mod scope;

mod query;
mod resolver;
mod writer;

pub use error::{LedgerError, LedgerResult};
pub use ledger::RewardLedger;
pub use page::{HistoryPage, Page};
pub use scope::{FixedStoreContext, ScopeConfig, ScopeContext};
pub use writer::EntryOptions;
