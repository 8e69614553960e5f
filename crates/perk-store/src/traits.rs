use chrono::{DateTime, Utc};
use perk_types::{CustomerId, EntryDraft, EntryId, PointsEntry, StoreId};

use crate::error::StoreResult;

/// Durable, append-oriented storage for ledger entries.
///
/// All implementations must satisfy these invariants:
/// - `insert` assigns entry ids monotonically. Ids are the tie-break for
///   entries sharing a timestamp, so reuse or reordering corrupts balances.
/// - Entries are never deleted; the only field that changes after insert is
///   the cached `points_balance`, via `update`.
/// - `query` applies the filter BEFORE sorting, and returns entries
///   newest-first (`created_on_utc` descending, `id` descending).
/// - All backend I/O errors are propagated, never silently ignored.
pub trait EntryStore: Send + Sync {
    /// Persist a new entry, assigning the next id.
    ///
    /// Returns the stored entry with its assigned [`EntryId`].
    fn insert(&self, draft: EntryDraft) -> StoreResult<PointsEntry>;

    /// Update an existing entry by identity.
    ///
    /// Returns `EntryNotFound` if no entry with this id was ever inserted.
    fn update(&self, entry: &PointsEntry) -> StoreResult<()>;

    /// Fetch a single entry by id. `Ok(None)` if it does not exist.
    fn get(&self, id: EntryId) -> StoreResult<Option<PointsEntry>>;

    /// All entries matching `filter`, newest-first.
    fn query(&self, filter: &EntryFilter) -> StoreResult<Vec<PointsEntry>>;

    /// Number of entries matching `filter`.
    ///
    /// Default implementation materializes the query; backends may override
    /// with a counting scan.
    fn count(&self, filter: &EntryFilter) -> StoreResult<usize> {
        Ok(self.query(filter)?.len())
    }
}

/// Predicates narrowing a query to one scope.
///
/// Unset fields match everything. Visibility of scheduled accruals is
/// controlled by `effective_on_or_before`: set it to "now" to exclude
/// future-dated entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub customer: Option<CustomerId>,
    pub store: Option<StoreId>,
    pub effective_on_or_before: Option<DateTime<Utc>>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one customer.
    pub fn for_customer(mut self, customer: CustomerId) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Restrict to one store.
    pub fn in_store(mut self, store: StoreId) -> Self {
        self.store = Some(store);
        self
    }

    /// Exclude entries whose timestamp is after `cutoff`.
    pub fn effective_by(mut self, cutoff: DateTime<Utc>) -> Self {
        self.effective_on_or_before = Some(cutoff);
        self
    }

    /// Returns `true` if `entry` satisfies every set predicate.
    pub fn matches(&self, entry: &PointsEntry) -> bool {
        if let Some(customer) = self.customer {
            if entry.customer != customer {
                return false;
            }
        }
        if let Some(store) = self.store {
            if entry.store != store {
                return false;
            }
        }
        if let Some(cutoff) = self.effective_on_or_before {
            if entry.created_on_utc > cutoff {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    fn entry(customer: u64, store: u64, secs: i64) -> PointsEntry {
        PointsEntry {
            id: EntryId::new(1),
            customer: CustomerId::new(customer),
            store: StoreId::new(store),
            points: 5,
            points_balance: None,
            used_amount: Decimal::ZERO,
            used_with_order: None,
            message: String::new(),
            created_on_utc: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = EntryFilter::new();
        assert!(filter.matches(&entry(1, 1, 0)));
        assert!(filter.matches(&entry(9, 4, 1_000_000)));
    }

    #[test]
    fn customer_and_store_predicates() {
        let filter = EntryFilter::new()
            .for_customer(CustomerId::new(1))
            .in_store(StoreId::new(2));
        assert!(filter.matches(&entry(1, 2, 0)));
        assert!(!filter.matches(&entry(1, 3, 0)));
        assert!(!filter.matches(&entry(2, 2, 0)));
    }

    #[test]
    fn effective_cutoff_is_inclusive() {
        let cutoff = Utc.timestamp_opt(100, 0).unwrap();
        let filter = EntryFilter::new().effective_by(cutoff);
        assert!(filter.matches(&entry(1, 1, 99)));
        assert!(filter.matches(&entry(1, 1, 100)));
        assert!(!filter.matches(&entry(1, 1, 101)));
    }
}
