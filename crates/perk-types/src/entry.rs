//! The ledger entry record.
//!
//! Entries are append-only: once inserted their deltas never change. The
//! single mutable field is `points_balance`, the cached running balance,
//! which is filled lazily the first time a read observes the entry after it
//! has become effective.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, EntryId, OrderId, StoreId};

/// A single reward points delta in a customer's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    /// Store-assigned identifier; the tie-break when timestamps collide.
    pub id: EntryId,
    /// Owner of the entry.
    pub customer: CustomerId,
    /// Originating store/tenant.
    pub store: StoreId,
    /// Signed delta: positive = accrual, negative = redemption.
    pub points: i64,
    /// Cached running balance as of this entry.
    ///
    /// `None` means "not yet computed", which is distinct from a computed
    /// balance of zero. Never computed while the entry is future-dated.
    pub points_balance: Option<i64>,
    /// Monetary amount redeemed against an order, when this is a spend.
    pub used_amount: Decimal,
    /// The order the points were applied to, if any. Weak reference.
    pub used_with_order: Option<OrderId>,
    /// Free-text annotation.
    pub message: String,
    /// Effective timestamp. May be in the future for scheduled accruals.
    pub created_on_utc: DateTime<Utc>,
}

impl PointsEntry {
    /// Returns `true` if this entry has become effective at `now`.
    ///
    /// Effective entries are visible in default views and participate in
    /// balance computation; future-dated ones exist in storage but are
    /// excluded until their timestamp passes.
    pub fn is_effective(&self, now: DateTime<Utc>) -> bool {
        self.created_on_utc <= now
    }
}

/// An entry awaiting its store-assigned id.
///
/// Drafts carry every [`PointsEntry`] field except `id`; the store mints the
/// id on insert and returns the stored entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub customer: CustomerId,
    pub store: StoreId,
    pub points: i64,
    pub points_balance: Option<i64>,
    pub used_amount: Decimal,
    pub used_with_order: Option<OrderId>,
    pub message: String,
    pub created_on_utc: DateTime<Utc>,
}

impl EntryDraft {
    /// Materialize the draft with the id the store assigned.
    pub fn into_entry(self, id: EntryId) -> PointsEntry {
        PointsEntry {
            id,
            customer: self.customer,
            store: self.store,
            points: self.points,
            points_balance: self.points_balance,
            used_amount: self.used_amount,
            used_with_order: self.used_with_order,
            message: self.message,
            created_on_utc: self.created_on_utc,
        }
    }
}

/// Canonical history ordering: `created_on_utc` descending, then `id`
/// descending.
///
/// Every balance computation depends on this total order; future-dated
/// entries naturally sort to the newest end.
pub fn newest_first(a: &PointsEntry, b: &PointsEntry) -> Ordering {
    b.created_on_utc
        .cmp(&a.created_on_utc)
        .then(b.id.cmp(&a.id))
}
