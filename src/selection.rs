//! Multi-select over record ids, plus the two-phase bulk action flow.
//!
//! A bulk action is *announced* synchronously ([`SelectionController::begin_bulk`])
//! and *settled* later by whoever owns the timer
//! ([`SelectionController::settle_bulk`]). The controller never sleeps itself.

use crate::error::{DashboardError, DashboardResult};
use crate::notify::{NotificationLevel, NotificationSink};
use std::collections::BTreeSet;
use std::fmt;

/// Bulk actions available on selected tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Cancel,
    Refund,
}

impl BulkAction {
    /// Verb used in the "pending" notification
    pub fn verb(&self) -> &'static str {
        match self {
            BulkAction::Cancel => "cancellation",
            BulkAction::Refund => "refund",
        }
    }

    /// Past participle used in the completion notification
    pub fn past(&self) -> &'static str {
        match self {
            BulkAction::Cancel => "cancelled",
            BulkAction::Refund => "refunded",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Snapshot of an announced bulk action awaiting settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBulk {
    pub action: BulkAction,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: BTreeSet<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Tri-state "select all": if the selection is as large as `all_ids`,
    /// clear it, otherwise select everything in `all_ids`.
    pub fn select_all<S: AsRef<str>>(&mut self, all_ids: &[S]) {
        if self.selected.len() == all_ids.len() {
            self.selected.clear();
        } else {
            self.selected = all_ids.iter().map(|id| id.as_ref().to_string()).collect();
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Drop ids that no longer satisfy `exists`. Returns the number pruned.
    pub fn prune<F>(&mut self, exists: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let before = self.selected.len();
        self.selected.retain(|id| exists(id));
        let pruned = before - self.selected.len();
        if pruned > 0 {
            log::debug!("Selection: pruned {} stale ids", pruned);
        }
        pruned
    }

    /// Announce phase of a bulk action.
    ///
    /// Fails with [`DashboardError::EmptySelection`] without notifying when
    /// nothing is selected.
    pub fn begin_bulk<N: NotificationSink>(
        &self,
        action: BulkAction,
        sink: &mut N,
    ) -> DashboardResult<PendingBulk> {
        if self.selected.is_empty() {
            return Err(DashboardError::EmptySelection);
        }

        let ids: Vec<String> = self.selected.iter().cloned().collect();
        sink.notify(
            &format!("Running {} on {} selected tickets...", action.verb(), ids.len()),
            NotificationLevel::Info,
        );
        log::info!("Bulk {}: announced for {} records", action, ids.len());

        Ok(PendingBulk { action, ids })
    }

    /// Settle phase: run `on_complete`, clear the selection, report success.
    pub fn settle_bulk<N, F>(&mut self, pending: &PendingBulk, sink: &mut N, on_complete: F)
    where
        N: NotificationSink,
        F: FnOnce(&PendingBulk),
    {
        on_complete(pending);
        self.selected.clear();
        sink.notify(
            &format!("✅ Tickets {} successfully.", pending.action.past()),
            NotificationLevel::Success,
        );
        log::info!("Bulk {}: settled for {} records", pending.action, pending.ids.len());
    }
}
