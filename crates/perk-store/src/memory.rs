use std::collections::BTreeMap;
use std::sync::RwLock;

use perk_types::{newest_first, EntryDraft, EntryId, PointsEntry};

use crate::error::{StoreError, StoreResult};
use crate::traits::{EntryFilter, EntryStore};

/// In-memory entry store for tests, local demos, and embedding.
///
/// Ids are assigned from a counter starting at 1, so id zero never refers to
/// a stored entry.
pub struct InMemoryEntryStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    next_id: u64,
    entries: BTreeMap<EntryId, PointsEntry>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                next_id: 1,
                entries: BTreeMap::new(),
            }),
        }
    }

    /// Total number of stored entries, across all scopes.
    pub fn len(&self) -> StoreResult<usize> {
        let state = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.entries.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn insert(&self, draft: EntryDraft) -> StoreResult<PointsEntry> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let id = EntryId::new(state.next_id);
        state.next_id += 1;

        let entry = draft.into_entry(id);
        state.entries.insert(id, entry.clone());
        Ok(entry)
    }

    fn update(&self, entry: &PointsEntry) -> StoreResult<()> {
        let mut state = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        match state.entries.get_mut(&entry.id) {
            Some(stored) => {
                *stored = entry.clone();
                Ok(())
            }
            None => Err(StoreError::EntryNotFound(entry.id)),
        }
    }

    fn get(&self, id: EntryId) -> StoreResult<Option<PointsEntry>> {
        let state = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.entries.get(&id).cloned())
    }

    fn query(&self, filter: &EntryFilter) -> StoreResult<Vec<PointsEntry>> {
        let state = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut matched: Vec<PointsEntry> = state
            .entries
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        matched.sort_by(newest_first);
        Ok(matched)
    }
}
