use perk_store::StoreError;
use perk_types::{EntryId, StoreId};
use thiserror::Error;

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors produced by ledger operations.
///
/// Validation errors are raised before any mutation; queries over an empty
/// history return empty results or a zero balance, never an error. Store
/// failures pass through unchanged — the ledger carries no retry logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("customer reference is missing or unsaved")]
    InvalidCustomer,

    #[error("{0} is not a valid store reference")]
    InvalidStore(StoreId),

    #[error("{0} does not exist")]
    UnknownEntry(EntryId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
