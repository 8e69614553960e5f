//! The ledger component.
//!
//! [`RewardLedger`] wires the four collaborators together: the durable
//! entry store, the scope context/config, the notification sink, and the
//! clock. All operations are synchronous and request-scoped; callers that
//! allow concurrent appends for the same scope must serialize them
//! externally (the eager balance on the append path is read-then-insert,
//! not atomic).

use std::sync::Arc;

use perk_notify::{NoopSink, NotificationSink};
use perk_store::EntryStore;
use perk_types::{Clock, SystemClock};

use crate::scope::{ScopeConfig, ScopeContext};

/// Per-customer, per-store reward points ledger.
pub struct RewardLedger {
    pub(crate) store: Arc<dyn EntryStore>,
    pub(crate) context: Arc<dyn ScopeContext>,
    pub(crate) config: ScopeConfig,
    pub(crate) sink: Arc<dyn NotificationSink>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl RewardLedger {
    /// Create a ledger over the given store and scope, with a no-op
    /// notification sink and the system clock.
    pub fn new(
        store: Arc<dyn EntryStore>,
        context: Arc<dyn ScopeContext>,
        config: ScopeConfig,
    ) -> Self {
        Self {
            store,
            context,
            config,
            sink: Arc::new(NoopSink),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the notification sink.
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the clock. Tests inject a `ManualClock` here to simulate
    /// scheduled accruals becoming effective.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The active scope configuration.
    pub fn config(&self) -> ScopeConfig {
        self.config
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use perk_notify::RecordingSink;
    use perk_store::InMemoryEntryStore;
    use perk_types::{CustomerId, ManualClock, StoreId};

    use crate::scope::FixedStoreContext;

    use super::*;

    pub const CUSTOMER: CustomerId = CustomerId::new(1);
    pub const STORE: StoreId = StoreId::new(1);

    pub fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    /// A ledger over fresh in-memory collaborators, frozen at [`epoch`].
    pub struct Harness {
        pub ledger: RewardLedger,
        pub store: Arc<InMemoryEntryStore>,
        pub clock: Arc<ManualClock>,
        pub sink: Arc<RecordingSink>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_config(ScopeConfig::default())
        }

        pub fn with_config(config: ScopeConfig) -> Self {
            let store = Arc::new(InMemoryEntryStore::new());
            let clock = Arc::new(ManualClock::new(epoch()));
            let sink = Arc::new(RecordingSink::new());
            let ledger = RewardLedger::new(
                store.clone(),
                Arc::new(FixedStoreContext::new(STORE)),
                config,
            )
            .with_clock(clock.clone())
            .with_sink(sink.clone());
            Self {
                ledger,
                store,
                clock,
                sink,
            }
        }
    }
}
