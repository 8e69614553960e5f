//! The append path.
//!
//! Writes validate their references before touching the store, persist, and
//! then notify. Immediate accruals cache their running balance eagerly;
//! scheduled accruals are inserted with the balance unset and the resolver
//! fills it on the first read after the accrual date passes.

use chrono::{DateTime, Utc};
use perk_store::StoreError;
use perk_types::{CustomerId, EntryDraft, EntryId, OrderId, PointsEntry, StoreId};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::RewardLedger;

/// Optional fields of an appended entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryOptions {
    /// Monetary amount redeemed, when the entry represents a spend.
    pub used_amount: Decimal,
    /// The order the points were applied to.
    pub used_with_order: Option<OrderId>,
    /// Scheduled accrual date. When set, the entry is inserted with its
    /// balance unset and becomes effective once this date passes.
    pub accrues_on: Option<DateTime<Utc>>,
}

impl EntryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn used_amount(mut self, amount: Decimal) -> Self {
        self.used_amount = amount;
        self
    }

    pub fn for_order(mut self, order: OrderId) -> Self {
        self.used_with_order = Some(order);
        self
    }

    pub fn accrues_on(mut self, date: DateTime<Utc>) -> Self {
        self.accrues_on = Some(date);
        self
    }
}

impl RewardLedger {
    /// Append a new entry to a customer's history.
    ///
    /// Fails with [`LedgerError::InvalidCustomer`] /
    /// [`LedgerError::InvalidStore`] before any mutation when a reference is
    /// missing. Immediate accruals are stamped with the current clock time
    /// and carry `previous balance + points` in their cache; scheduled
    /// accruals carry the given date and no cached balance.
    ///
    /// Emits an `EntryInserted` notification after the entry is durable.
    pub fn append_entry(
        &self,
        customer: CustomerId,
        store: StoreId,
        points: i64,
        message: impl Into<String>,
        opts: EntryOptions,
    ) -> LedgerResult<PointsEntry> {
        if !customer.is_valid() {
            return Err(LedgerError::InvalidCustomer);
        }
        if !store.is_valid() {
            return Err(LedgerError::InvalidStore(store));
        }

        let (points_balance, created_on_utc) = match opts.accrues_on {
            Some(date) => (None, date),
            None => {
                let current = self.balance(customer, store)?;
                (Some(current + points), self.clock.now_utc())
            }
        };

        let entry = self.store.insert(EntryDraft {
            customer,
            store,
            points,
            points_balance,
            used_amount: opts.used_amount,
            used_with_order: opts.used_with_order,
            message: message.into(),
            created_on_utc,
        })?;

        debug!(
            entry = %entry.id,
            customer = %customer,
            store = %store,
            points,
            balance = ?entry.points_balance,
            "entry appended"
        );
        self.sink.entry_inserted(&entry);
        Ok(entry)
    }

    /// Persist a mutated entry by identity.
    ///
    /// Used externally for corrections and internally for lazy balance
    /// fills. Fails with [`LedgerError::UnknownEntry`] if the entry was
    /// never inserted. Emits an `EntryUpdated` notification on success.
    pub fn update_entry(&self, entry: &PointsEntry) -> LedgerResult<()> {
        self.store.update(entry).map_err(|err| match err {
            StoreError::EntryNotFound(id) => LedgerError::UnknownEntry(id),
            other => LedgerError::Store(other),
        })?;

        trace!(entry = %entry.id, balance = ?entry.points_balance, "entry updated");
        self.sink.entry_updated(entry);
        Ok(())
    }

    /// Fetch a single entry by id. `Ok(None)` if it does not exist.
    pub fn entry(&self, id: EntryId) -> LedgerResult<Option<PointsEntry>> {
        Ok(self.store.get(id)?)
    }
}
