//! Durable entry storage boundary for the Perk reward points ledger.
//!
//! This crate defines:
//! - [`EntryStore`] — the trait the ledger core consumes for insert, update
//!   by identity, and filtered queries
//! - [`EntryFilter`] — scope/visibility predicates applied before the
//!   chronological ordering the balance resolver depends on
//! - [`InMemoryEntryStore`] — reference implementation for tests and
//!   embedding

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryEntryStore;
pub use traits::{EntryFilter, EntryStore};
