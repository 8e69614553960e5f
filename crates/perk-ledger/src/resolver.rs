//! Lazy balance resolution.
//!
//! The resolver fills missing cached balances over one scope's newest-first
//! history. Each fill is persisted individually through the write path, so
//! an interrupted resolution leaves already-filled entries durable and the
//! next read resumes where it stopped.

use perk_types::PointsEntry;
use tracing::debug;

use crate::error::LedgerResult;
use crate::ledger::RewardLedger;

impl RewardLedger {
    /// Fill every unset balance of an already-effective entry in `entries`.
    ///
    /// `entries` must be one scope's history sorted newest-first
    /// (`created_on_utc` desc, `id` desc). The sequence comes back with the
    /// same entries in the same order.
    ///
    /// Walking oldest to newest: a set balance is adopted as the running
    /// balance and never overwritten — retroactive corrections do not
    /// re-propagate to later entries. An unset balance on an effective
    /// entry is filled with `points + running` and persisted immediately.
    /// Future-dated entries stay unset and do not advance the running
    /// balance.
    pub(crate) fn resolve_balances(
        &self,
        mut entries: Vec<PointsEntry>,
    ) -> LedgerResult<Vec<PointsEntry>> {
        if entries.is_empty() {
            return Ok(entries);
        }

        let now = self.clock.now_utc();
        let mut running: Option<i64> = None;
        let mut filled = 0usize;

        for entry in entries.iter_mut().rev() {
            match entry.points_balance {
                Some(balance) => running = Some(balance),
                None if entry.is_effective(now) => {
                    let balance = entry.points + running.unwrap_or(0);
                    entry.points_balance = Some(balance);
                    self.update_entry(entry)?;
                    running = Some(balance);
                    filled += 1;
                }
                // Scheduled accrual still in the future: not materialized.
                None => {}
            }
        }

        if filled > 0 {
            debug!(filled, "materialized cached balances");
        }
        Ok(entries)
    }
}
