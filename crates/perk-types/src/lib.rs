//! Foundation types for the Perk reward points ledger.
//!
//! This crate provides the identity, record, and temporal types used
//! throughout the Perk system. Every other Perk crate depends on
//! `perk-types`.
//!
//! # Key Types
//!
//! - [`CustomerId`], [`StoreId`], [`OrderId`], [`EntryId`] — opaque identity
//!   references; the ledger stores and compares them, never dereferences them
//! - [`PointsEntry`] — a single signed point delta with its cached running
//!   balance
//! - [`EntryDraft`] — an entry awaiting a store-assigned id
//! - [`Clock`] — injectable time source ([`SystemClock`] for production,
//!   [`ManualClock`] for deterministic tests)

pub mod clock;
pub mod entry;
pub mod id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{newest_first, EntryDraft, PointsEntry};
pub use id::{CustomerId, EntryId, OrderId, StoreId};
