//! Balance scope configuration and request context.
//!
//! A "scope" is the set of entries one balance is computed over: the
//! `(customer, store)` pair by default, or the customer alone when points
//! accumulate across all stores.

use perk_types::StoreId;

/// Controls whether store filtering is applied to balances and histories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeConfig {
    /// When `true`, points earned in any store count toward one shared
    /// balance and store filters are skipped.
    pub points_for_all_stores: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            points_for_all_stores: false,
        }
    }
}

/// Resolves the store a request is executing against.
///
/// Default history views are narrowed to this store unless
/// [`ScopeConfig::points_for_all_stores`] is set.
pub trait ScopeContext: Send + Sync {
    fn current_store(&self) -> StoreId;
}

/// A context pinned to one store. For single-tenant embedding and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedStoreContext {
    store: StoreId,
}

impl FixedStoreContext {
    pub fn new(store: StoreId) -> Self {
        Self { store }
    }
}

impl ScopeContext for FixedStoreContext {
    fn current_store(&self) -> StoreId {
        self.store
    }
}
