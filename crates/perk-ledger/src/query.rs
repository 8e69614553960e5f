//! Read paths: paged history and current balance.
//!
//! Both reads are pure except for the lazy balance fills they trigger; the
//! scope filter is always applied before the chronological ordering the
//! resolver depends on.

use perk_store::EntryFilter;
use perk_types::{CustomerId, StoreId};

use crate::error::LedgerResult;
use crate::ledger::RewardLedger;
use crate::page::{HistoryPage, Page};

impl RewardLedger {
    /// One page of a customer's history, newest-first, balances resolved.
    ///
    /// With `show_hidden` false (the default view), future-dated entries are
    /// excluded and, unless points accumulate across all stores, so are
    /// entries from stores other than the context's current store. Passing
    /// an invalid (zero) customer id skips the customer filter.
    ///
    /// Resolution runs over the full filtered history before the page is
    /// cut, so balances are correct on any page.
    pub fn history(
        &self,
        customer: CustomerId,
        show_hidden: bool,
        page: Page,
    ) -> LedgerResult<HistoryPage> {
        let mut filter = EntryFilter::new();
        if customer.is_valid() {
            filter = filter.for_customer(customer);
        }
        if !show_hidden {
            filter = filter.effective_by(self.clock.now_utc());
            if !self.config.points_for_all_stores {
                filter = filter.in_store(self.context.current_store());
            }
        }

        let entries = self.store.query(&filter)?;
        let resolved = self.resolve_balances(entries)?;
        Ok(page.of(resolved))
    }

    /// The customer's current balance in the given store scope.
    ///
    /// Zero when the scope has no effective history. The store filter is
    /// skipped when points accumulate across all stores.
    pub fn balance(&self, customer: CustomerId, store: StoreId) -> LedgerResult<i64> {
        let mut filter = EntryFilter::new()
            .for_customer(customer)
            .effective_by(self.clock.now_utc());
        if !self.config.points_for_all_stores {
            filter = filter.in_store(store);
        }

        let resolved = self.resolve_balances(self.store.query(&filter)?)?;
        // Post-resolution the head balance is always set; default anyway.
        Ok(resolved
            .first()
            .and_then(|entry| entry.points_balance)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use perk_notify::LedgerEventKind;
    use perk_types::{Clock, CustomerId, StoreId};

    use crate::ledger::fixtures::{Harness, CUSTOMER, STORE};
    use crate::scope::ScopeConfig;
    use crate::writer::EntryOptions;
    use crate::Page;

    #[test]
    fn balance_of_empty_history_is_zero() {
        let h = Harness::new();
        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 0);
    }

    #[test]
    fn signup_accrual_is_immediately_visible() {
        let h = Harness::new();
        h.ledger
            .append_entry(CUSTOMER, STORE, 100, "signup", EntryOptions::new())
            .unwrap();
        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 100);
    }

    #[test]
    fn history_returns_balances_newest_first() {
        let h = Harness::new();
        h.ledger
            .append_entry(CUSTOMER, STORE, 100, "signup", EntryOptions::new())
            .unwrap();
        h.clock.advance(Duration::minutes(1));
        h.ledger
            .append_entry(CUSTOMER, STORE, -30, "redeemed", EntryOptions::new())
            .unwrap();

        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 70);

        let page = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        let balances: Vec<Option<i64>> =
            page.entries.iter().map(|e| e.points_balance).collect();
        assert_eq!(balances, vec![Some(70), Some(100)]);
        let points: Vec<i64> = page.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![-30, 100]);
    }

    #[test]
    fn scheduled_accrual_becomes_effective_when_time_passes() {
        let h = Harness::new();
        h.clock.advance(Duration::days(-1));
        h.ledger
            .append_entry(CUSTOMER, STORE, 20, "purchase", EntryOptions::new())
            .unwrap();
        h.clock.advance(Duration::days(1));

        let accrual_date = h.clock.now_utc() + Duration::days(1);
        h.ledger
            .append_entry(
                CUSTOMER,
                STORE,
                50,
                "promo",
                EntryOptions::new().accrues_on(accrual_date),
            )
            .unwrap();

        // Today: the scheduled +50 is invisible.
        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 20);

        // Past the accrual date it materializes at 70 and stays there.
        h.clock.advance(Duration::days(2));
        let page = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        assert_eq!(page.entries[0].points_balance, Some(70));
        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 70);
        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 70);
    }

    #[test]
    fn repeated_balance_reads_perform_no_extra_writes() {
        let h = Harness::new();
        h.clock.advance(Duration::days(-1));
        h.ledger
            .append_entry(CUSTOMER, STORE, 20, "", EntryOptions::new())
            .unwrap();
        h.clock.advance(Duration::days(1));
        h.ledger
            .append_entry(
                CUSTOMER,
                STORE,
                50,
                "",
                EntryOptions::new().accrues_on(h.clock.now_utc() - Duration::hours(1)),
            )
            .unwrap();

        let first = h.ledger.balance(CUSTOMER, STORE).unwrap();
        h.sink.clear();
        let second = h.ledger.balance(CUSTOMER, STORE).unwrap();

        assert_eq!(first, second);
        assert_eq!(h.sink.count_of(LedgerEventKind::EntryUpdated), 0);
    }

    #[test]
    fn default_history_hides_future_entries_but_show_hidden_reveals_them() {
        let h = Harness::new();
        h.ledger
            .append_entry(CUSTOMER, STORE, 10, "", EntryOptions::new())
            .unwrap();
        h.ledger
            .append_entry(
                CUSTOMER,
                STORE,
                50,
                "scheduled",
                EntryOptions::new().accrues_on(h.clock.now_utc() + Duration::days(3)),
            )
            .unwrap();

        let visible = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        assert_eq!(visible.total, 1);

        let all = h.ledger.history(CUSTOMER, true, Page::all()).unwrap();
        assert_eq!(all.total, 2);
        assert_eq!(all.entries[0].points_balance, None);
    }

    #[test]
    fn per_store_scope_keeps_balances_independent() {
        let h = Harness::new();
        let other_store = StoreId::new(2);
        h.ledger
            .append_entry(CUSTOMER, STORE, 100, "", EntryOptions::new())
            .unwrap();
        h.ledger
            .append_entry(CUSTOMER, other_store, 40, "", EntryOptions::new())
            .unwrap();

        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 100);
        assert_eq!(h.ledger.balance(CUSTOMER, other_store).unwrap(), 40);

        // Default history is scoped to the context's current store.
        let page = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.entries[0].points, 100);
    }

    #[test]
    fn cross_store_accumulation_merges_scopes() {
        let h = Harness::with_config(ScopeConfig {
            points_for_all_stores: true,
        });
        h.ledger
            .append_entry(CUSTOMER, STORE, 100, "", EntryOptions::new())
            .unwrap();
        h.clock.advance(Duration::minutes(1));
        h.ledger
            .append_entry(CUSTOMER, StoreId::new(2), 40, "", EntryOptions::new())
            .unwrap();

        assert_eq!(h.ledger.balance(CUSTOMER, STORE).unwrap(), 140);
        assert_eq!(h.ledger.balance(CUSTOMER, StoreId::new(2)).unwrap(), 140);

        let page = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn history_filters_other_customers() {
        let h = Harness::new();
        h.ledger
            .append_entry(CUSTOMER, STORE, 100, "", EntryOptions::new())
            .unwrap();
        h.ledger
            .append_entry(CustomerId::new(2), STORE, 500, "", EntryOptions::new())
            .unwrap();

        let page = h.ledger.history(CUSTOMER, false, Page::all()).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.entries[0].points, 100);
        assert_eq!(h.ledger.balance(CustomerId::new(2), STORE).unwrap(), 500);
    }

    #[test]
    fn history_pages_after_resolving_the_full_set() {
        let h = Harness::new();
        for i in 0..5i64 {
            h.ledger
                .append_entry(CUSTOMER, STORE, 10, "", EntryOptions::new())
                .unwrap();
            h.clock.advance(Duration::minutes(i + 1));
        }

        let page = h.ledger.history(CUSTOMER, false, Page::new(1, 2)).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.entries.len(), 2);
        // Newest-first: page 1 holds the 3rd and 2nd entries.
        let balances: Vec<Option<i64>> =
            page.entries.iter().map(|e| e.points_balance).collect();
        assert_eq!(balances, vec![Some(30), Some(20)]);
    }
}
