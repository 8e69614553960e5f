//! Notification boundary for the Perk reward points ledger.
//!
//! The ledger core emits an event after every successful insert or update.
//! Delivery is fire-and-forget: sinks return nothing and must never block
//! or fail the write path.
//!
//! Three sinks ship with the crate:
//! - [`NoopSink`] — discards everything (the default for embedding)
//! - [`BroadcastSink`] — fan-out over a tokio broadcast channel
//! - [`RecordingSink`] — captures events for test assertions

pub mod event;
pub mod sink;

pub use event::{LedgerEvent, LedgerEventKind};
pub use sink::{BroadcastSink, EventStream, NoopSink, NotificationSink, RecordingSink};
