use std::sync::Mutex;

use perk_types::PointsEntry;
use tokio::sync::broadcast;
use tracing::trace;

use crate::event::{LedgerEvent, LedgerEventKind};

/// Receiver half of a [`BroadcastSink`] subscription.
pub type EventStream = broadcast::Receiver<LedgerEvent>;

/// Observer of entry lifecycle events.
///
/// Fire-and-forget: implementations must not block the write path and have
/// no way to report failure back into it.
pub trait NotificationSink: Send + Sync {
    /// A new entry was persisted.
    fn entry_inserted(&self, entry: &PointsEntry);

    /// An existing entry was persisted with new contents.
    fn entry_updated(&self, entry: &PointsEntry);
}

/// Discards every event. The default sink for embedding and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn entry_inserted(&self, _entry: &PointsEntry) {}

    fn entry_updated(&self, _entry: &PointsEntry) {}
}

/// Fan-out sink over a tokio broadcast channel.
///
/// Send failures (no live receivers) are ignored; slow receivers observe
/// lagged-receiver errors on their end, never back-pressure on the ledger.
pub struct BroadcastSink {
    sender: broadcast::Sender<LedgerEvent>,
}

impl BroadcastSink {
    /// Create a sink whose per-subscriber channel holds up to `capacity`
    /// undelivered events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all subsequent events.
    pub fn subscribe(&self) -> EventStream {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn send(&self, event: LedgerEvent) {
        trace!(kind = %event.kind, entry = %event.entry.id, "notification");
        // No receivers is fine; the ledger does not require acknowledgment.
        let _ = self.sender.send(event);
    }
}

impl NotificationSink for BroadcastSink {
    fn entry_inserted(&self, entry: &PointsEntry) {
        self.send(LedgerEvent::inserted(entry.clone()));
    }

    fn entry_updated(&self, entry: &PointsEntry) {
        self.send(LedgerEvent::updated(entry.clone()));
    }
}

/// Captures every event in order. For test assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event seen so far, in emission order.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    /// Number of events of the given kind.
    pub fn count_of(&self, kind: LedgerEventKind) -> usize {
        self.events()
            .iter()
            .filter(|event| event.kind == kind)
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().expect("sink lock poisoned").clear();
    }

    fn record(&self, event: LedgerEvent) {
        self.events.lock().expect("sink lock poisoned").push(event);
    }
}

impl NotificationSink for RecordingSink {
    fn entry_inserted(&self, entry: &PointsEntry) {
        self.record(LedgerEvent::inserted(entry.clone()));
    }

    fn entry_updated(&self, entry: &PointsEntry) {
        self.record(LedgerEvent::updated(entry.clone()));
    }
}
