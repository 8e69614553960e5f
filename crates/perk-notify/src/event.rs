use std::fmt;

use perk_types::PointsEntry;
use serde::{Deserialize, Serialize};

/// Classification of ledger notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerEventKind {
    /// A new entry was appended to the history.
    EntryInserted,
    /// An existing entry was mutated (a correction or a lazy balance fill).
    EntryUpdated,
}

impl fmt::Display for LedgerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EntryInserted => "EntryInserted",
            Self::EntryUpdated => "EntryUpdated",
        };
        write!(f, "{s}")
    }
}

/// A single notification flowing out of the ledger.
///
/// Carries a full snapshot of the entry as it was persisted, so sinks never
/// have to read back through the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub kind: LedgerEventKind,
    pub entry: PointsEntry,
}

impl LedgerEvent {
    pub fn inserted(entry: PointsEntry) -> Self {
        Self {
            kind: LedgerEventKind::EntryInserted,
            entry,
        }
    }

    pub fn updated(entry: PointsEntry) -> Self {
        Self {
            kind: LedgerEventKind::EntryUpdated,
            entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use perk_types::{CustomerId, EntryId, StoreId};
    use rust_decimal::Decimal;

    use super::*;

    fn entry() -> PointsEntry {
        PointsEntry {
            id: EntryId::new(1),
            customer: CustomerId::new(2),
            store: StoreId::new(3),
            points: 100,
            points_balance: Some(100),
            used_amount: Decimal::ZERO,
            used_with_order: None,
            message: "signup".into(),
            created_on_utc: Utc.timestamp_opt(1_000, 0).unwrap(),
        }
    }

    #[test]
    fn constructors_tag_the_kind() {
        assert_eq!(
            LedgerEvent::inserted(entry()).kind,
            LedgerEventKind::EntryInserted
        );
        assert_eq!(
            LedgerEvent::updated(entry()).kind,
            LedgerEventKind::EntryUpdated
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", LedgerEventKind::EntryInserted), "EntryInserted");
        assert_eq!(format!("{}", LedgerEventKind::EntryUpdated), "EntryUpdated");
    }

    #[test]
    fn event_carries_the_entry_snapshot() {
        let event = LedgerEvent::inserted(entry());
        assert_eq!(event.entry.points, 100);
        assert_eq!(event.entry.message, "signup");
    }
}
