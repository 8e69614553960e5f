//! History paging.
//!
//! Balance resolution needs the full chronological history of a scope, so
//! paging is applied after resolution, never pushed down into the store
//! query.

use perk_types::PointsEntry;

/// A page request: zero-based index plus page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    index: usize,
    size: Option<usize>,
}

impl Page {
    /// Request page `index` with `size` entries per page.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: Some(size),
        }
    }

    /// Request the entire history as one page.
    pub fn all() -> Self {
        Self {
            index: 0,
            size: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` means unbounded.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Slice one page out of a fully resolved history.
    pub(crate) fn of(&self, entries: Vec<PointsEntry>) -> HistoryPage {
        let total = entries.len();
        let entries = match self.size {
            None => entries,
            Some(size) => entries
                .into_iter()
                .skip(self.index.saturating_mul(size))
                .take(size)
                .collect(),
        };
        HistoryPage {
            entries,
            total,
            page_index: self.index,
        }
    }
}

/// One page of a customer's history, newest-first.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryPage {
    /// The entries on this page.
    pub entries: Vec<PointsEntry>,
    /// Total matching entries before paging.
    pub total: usize,
    /// The requested page index.
    pub page_index: usize,
}

impl HistoryPage {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
