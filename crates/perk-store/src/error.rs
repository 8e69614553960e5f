use perk_types::EntryId;
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by entry storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("entry {0} not found")]
    EntryNotFound(EntryId),

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("backend error: {0}")]
    Backend(String),
}
