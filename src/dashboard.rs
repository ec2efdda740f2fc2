//! The dashboard session: single owner of all mutable dashboard state.
//!
//! Presentation code talks to it through two doors only. [`Dashboard::apply`]
//! takes a [`DashboardEvent`], and [`Dashboard::view`] returns a read-only
//! [`DashboardView`]. Events that need time to pass come back as a
//! [`Command`] for the caller to schedule. The result is fed back in later as
//! another event, so every mutation happens on whichever task owns the
//! `Dashboard`.

use crate::error::DashboardResult;
use crate::navigation::{ActivePanel, LayoutContext, NavigationController, Panel, ViewKind};
use crate::notify::NotificationSink;
use crate::operations::{AsyncOperation, OperationKind, OperationTracker, Outcome, PricingState, StartOutcome};
use crate::selection::{BulkAction, PendingBulk, SelectionController};
use crate::store::{Record, RecordStore, SyncItem};
use crate::sync::SyncOutcome;
use std::collections::BTreeSet;

/// Inputs accepted by the dashboard core
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    // User intents
    Toggle(String),
    SelectAll,
    ClearSelection,
    BulkApply(BulkAction),
    Start(OperationKind),
    SwitchTo(Panel),
    SwitchToLabel(String),
    ToggleDrawer,
    SetViewportWidth(u16),

    // Continuations posted back by scheduled work
    ExportProgress(u8),
    Settle { kind: OperationKind, outcome: Outcome },
    BulkSettled(PendingBulk),
    SyncSettled(SyncOutcome),
}

/// Deferred work the caller must schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RunExport,
    RunSync,
    ActivatePricing,
    SettleBulk(PendingBulk),
}

/// Read-only projection for the renderer
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub active: &'a ActivePanel,
    pub view: ViewKind,
    pub selection: &'a BTreeSet<String>,
    pub records: &'a [Record],
    pub operations: [AsyncOperation; 3],
    pub pricing: PricingState,
    pub drawer_open: bool,
    pub layout: LayoutContext,
    pub sync_cache: &'a [SyncItem],
}

impl DashboardView<'_> {
    pub fn operation(&self, kind: OperationKind) -> &AsyncOperation {
        let index = OperationKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        &self.operations[index]
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Whether the "select all" checkbox should render checked
    pub fn all_selected(&self) -> bool {
        !self.records.is_empty() && self.selection.len() == self.records.len()
    }
}

pub struct Dashboard<N: NotificationSink> {
    store: RecordStore,
    selection: SelectionController,
    operations: OperationTracker,
    navigation: NavigationController,
    notifier: N,
}

impl<N: NotificationSink> Dashboard<N> {
    pub fn new(records: Vec<Record>, initial_panel: Panel, narrow_width: u16, notifier: N) -> Self {
        Self {
            store: RecordStore::new(records),
            selection: SelectionController::new(),
            operations: OperationTracker::new(),
            navigation: NavigationController::new(initial_panel, narrow_width),
            notifier,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn operations(&self) -> &OperationTracker {
        &self.operations
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Apply an event, absorbing recoverable errors.
    ///
    /// Errors are logged and leave the state untouched; nothing here ends the
    /// session.
    pub fn apply(&mut self, event: DashboardEvent) -> Option<Command> {
        match self.try_apply(event) {
            Ok(command) => command,
            Err(e) => {
                log::info!("Dashboard: ignored event ({})", e);
                None
            }
        }
    }

    /// Apply an event, surfacing recoverable errors to the caller
    pub fn try_apply(&mut self, event: DashboardEvent) -> DashboardResult<Option<Command>> {
        match event {
            DashboardEvent::Toggle(id) => {
                self.selection.toggle(&id);
                Ok(None)
            }
            DashboardEvent::SelectAll => {
                let ids = self.store.ids();
                self.selection.select_all(&ids);
                Ok(None)
            }
            DashboardEvent::ClearSelection => {
                self.selection.clear();
                Ok(None)
            }
            DashboardEvent::BulkApply(action) => {
                let store = &self.store;
                self.selection.prune(|id| store.contains(id));
                let pending = self.selection.begin_bulk(action, &mut self.notifier)?;
                Ok(Some(Command::SettleBulk(pending)))
            }
            DashboardEvent::BulkSettled(pending) => {
                self.settle_bulk(&pending);
                Ok(None)
            }
            DashboardEvent::Start(kind) => match self.operations.start(kind, &mut self.notifier)? {
                StartOutcome::Started => Ok(Some(match kind {
                    OperationKind::Export => Command::RunExport,
                    OperationKind::Sync => Command::RunSync,
                    OperationKind::PricingToggle => Command::ActivatePricing,
                })),
                StartOutcome::Deactivated => Ok(None),
            },
            DashboardEvent::ExportProgress(percent) => {
                self.operations.report_progress(OperationKind::Export, percent);
                Ok(None)
            }
            DashboardEvent::Settle { kind, outcome } => {
                self.operations.settle(kind, outcome, &mut self.notifier);
                Ok(None)
            }
            DashboardEvent::SyncSettled(outcome) => {
                if !self.operations.is_running(OperationKind::Sync) {
                    log::debug!("Dashboard: dropped sync result with no sync running");
                    return Ok(None);
                }
                let settlement = match &outcome {
                    SyncOutcome::Live(_) => Outcome::Success,
                    SyncOutcome::Fallback { reason, .. } => Outcome::Fallback { reason: reason.clone() },
                };
                self.store.set_sync_cache(outcome.into_items());
                self.operations.settle(OperationKind::Sync, settlement, &mut self.notifier);
                Ok(None)
            }
            DashboardEvent::SwitchTo(panel) => {
                let previous = self.navigation.switch_to(panel);
                self.after_switch(&previous);
                Ok(None)
            }
            DashboardEvent::SwitchToLabel(label) => {
                let previous = self.navigation.switch_to_label(&label);
                self.after_switch(&previous);
                Ok(None)
            }
            DashboardEvent::ToggleDrawer => {
                self.navigation.toggle_drawer();
                Ok(None)
            }
            DashboardEvent::SetViewportWidth(width) => {
                self.navigation.set_viewport_width(width);
                Ok(None)
            }
        }
    }

    /// Selections belong to the tickets panel; leaving it drops them.
    fn after_switch(&mut self, previous: &ActivePanel) {
        if previous.is(Panel::Tickets) && !self.navigation.active().is(Panel::Tickets) {
            self.selection.clear();
        }
    }

    fn settle_bulk(&mut self, pending: &PendingBulk) {
        let store = &mut self.store;
        self.selection.settle_bulk(pending, &mut self.notifier, |pending| {
            let status = pending.action.past();
            let replaced = store.replace_where(&pending.ids, |record| {
                record.with_attr(crate::demo::ticket::STATUS, status)
            });
            log::debug!("Bulk {}: replaced {} records", pending.action, replaced);
        });
    }

    /// Swap in a new record list and drop selections that no longer resolve
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.store.set_records(records);
        let store = &self.store;
        self.selection.prune(|id| store.contains(id));
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            active: self.navigation.active(),
            view: self.navigation.active().view(),
            selection: self.selection.selected(),
            records: self.store.records(),
            operations: self.operations.snapshot(),
            pricing: self.operations.pricing_state(),
            drawer_open: self.navigation.is_drawer_open(),
            layout: self.navigation.layout(),
            sync_cache: self.store.sync_cache(),
        }
    }
}
