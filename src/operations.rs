//! Lifecycle tracking for long-running, user-triggered operations.
//!
//! Each [`OperationKind`] runs `Idle → Running → Settled → Idle`. The tracker
//! only records transitions and emits notifications. Timers and real work are
//! driven from outside (see `ui::core::task_manager`), so fixed delays can be
//! swapped for genuine async work without touching this contract.
//!
//! Dynamic pricing layers a persistent flag on top of the lifecycle:
//! `Inactive → Activating → Active → Inactive`, where the last step skips the
//! running phase entirely.

use crate::constants::{
    EXPORT_COMPLETED, EXPORT_STARTED, OPERATION_FAILED, PRICING_ACTIVATED, PRICING_DEACTIVATED,
    SYNC_COMPLETED, SYNC_FALLBACK, SYNC_STARTED,
};
use crate::error::{DashboardError, DashboardResult};
use crate::notify::{NotificationLevel, NotificationSink};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Export,
    Sync,
    PricingToggle,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [OperationKind::Export, OperationKind::Sync, OperationKind::PricingToggle];

    fn index(self) -> usize {
        match self {
            OperationKind::Export => 0,
            OperationKind::Sync => 1,
            OperationKind::PricingToggle => 2,
        }
    }

    /// Whether the operation reports numeric progress
    pub fn has_progress(self) -> bool {
        matches!(self, OperationKind::Export)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Export => "export",
            OperationKind::Sync => "data sync",
            OperationKind::PricingToggle => "dynamic pricing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// How a running operation finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completed against the real source
    Success,
    /// Completed, but on substitute data; still a success to the rest of the system
    Fallback { reason: String },
    Failure { reason: String },
}

impl Outcome {
    fn status(&self) -> OperationStatus {
        match self {
            Outcome::Success | Outcome::Fallback { .. } => OperationStatus::Succeeded,
            Outcome::Failure { .. } => OperationStatus::Failed,
        }
    }
}

/// Result of a successful `start` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The operation entered `Running`; the caller must schedule its work
    Started,
    /// Pricing was active and has been switched off without running
    Deactivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingState {
    Inactive,
    Activating,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncOperation {
    pub kind: OperationKind,
    pub status: OperationStatus,
    pub progress: u8,
    /// Terminal status of the most recent run, kept for display
    pub last_settlement: Option<OperationStatus>,
    last_reported: Option<u8>,
}

impl AsyncOperation {
    fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            status: OperationStatus::Idle,
            progress: 0,
            last_settlement: None,
            last_reported: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == OperationStatus::Running
    }
}

#[derive(Debug, Clone)]
pub struct OperationTracker {
    operations: [AsyncOperation; 3],
    pricing_active: bool,
}

impl Default for OperationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationTracker {
    pub fn new() -> Self {
        Self {
            operations: OperationKind::ALL.map(AsyncOperation::new),
            pricing_active: false,
        }
    }

    pub fn get(&self, kind: OperationKind) -> &AsyncOperation {
        &self.operations[kind.index()]
    }

    fn get_mut(&mut self, kind: OperationKind) -> &mut AsyncOperation {
        &mut self.operations[kind.index()]
    }

    pub fn is_running(&self, kind: OperationKind) -> bool {
        self.get(kind).is_running()
    }

    pub fn snapshot(&self) -> [AsyncOperation; 3] {
        self.operations.clone()
    }

    pub fn pricing_state(&self) -> PricingState {
        if self.is_running(OperationKind::PricingToggle) {
            PricingState::Activating
        } else if self.pricing_active {
            PricingState::Active
        } else {
            PricingState::Inactive
        }
    }

    pub fn is_pricing_active(&self) -> bool {
        self.pricing_active
    }

    /// Start an operation.
    ///
    /// Rejected with [`DashboardError::DuplicateOperation`] while the same kind
    /// is running; the running instance is left untouched.
    pub fn start<N: NotificationSink>(&mut self, kind: OperationKind, sink: &mut N) -> DashboardResult<StartOutcome> {
        if self.is_running(kind) {
            return Err(DashboardError::DuplicateOperation(kind));
        }

        if kind == OperationKind::PricingToggle && self.pricing_active {
            self.pricing_active = false;
            sink.notify(PRICING_DEACTIVATED, NotificationLevel::Info);
            log::info!("Operation {}: deactivated", kind);
            return Ok(StartOutcome::Deactivated);
        }

        let op = self.get_mut(kind);
        op.status = OperationStatus::Running;
        op.progress = 0;
        op.last_reported = None;

        match kind {
            OperationKind::Export => sink.notify(EXPORT_STARTED, NotificationLevel::Info),
            OperationKind::Sync => sink.notify(SYNC_STARTED, NotificationLevel::Info),
            OperationKind::PricingToggle => {}
        }
        log::info!("Operation {}: started", kind);

        Ok(StartOutcome::Started)
    }

    /// Record a progress observation for a running export.
    ///
    /// Returns the accepted value, or `None` if the operation is not running,
    /// has indeterminate progress, or the value does not strictly increase.
    pub fn report_progress(&mut self, kind: OperationKind, percent: u8) -> Option<u8> {
        if !kind.has_progress() {
            return None;
        }

        let op = self.get_mut(kind);
        if !op.is_running() {
            return None;
        }

        let percent = percent.min(100);
        if op.last_reported.is_some_and(|last| percent <= last) {
            log::debug!("Operation {}: ignoring non-increasing progress {}", kind, percent);
            return None;
        }

        op.progress = percent;
        op.last_reported = Some(percent);
        Some(percent)
    }

    /// Settle a running operation and return it to `Idle`.
    ///
    /// Returns the terminal status, or `None` if nothing was running.
    pub fn settle<N: NotificationSink>(
        &mut self,
        kind: OperationKind,
        outcome: Outcome,
        sink: &mut N,
    ) -> Option<OperationStatus> {
        if !self.is_running(kind) {
            log::warn!("Operation {}: settle ignored, not running", kind);
            return None;
        }

        let status = outcome.status();
        let (message, level) = settlement_notice(kind, &outcome);
        sink.notify(&message, level);

        if kind == OperationKind::PricingToggle && status == OperationStatus::Succeeded {
            self.pricing_active = true;
        }

        let op = self.get_mut(kind);
        op.last_settlement = Some(status);
        op.status = OperationStatus::Idle;
        op.progress = 0;
        op.last_reported = None;

        log::info!("Operation {}: settled {:?} ({:?})", kind, status, outcome);
        Some(status)
    }
}

fn settlement_notice(kind: OperationKind, outcome: &Outcome) -> (String, NotificationLevel) {
    let level = match outcome {
        Outcome::Success => NotificationLevel::Success,
        Outcome::Fallback { .. } => NotificationLevel::Info,
        Outcome::Failure { .. } => NotificationLevel::Error,
    };

    let message = match (kind, outcome) {
        (_, Outcome::Failure { reason }) => format!("{}: {} ({})", OPERATION_FAILED, kind, reason),
        (OperationKind::Sync, Outcome::Fallback { .. }) => SYNC_FALLBACK.to_string(),
        (OperationKind::Sync, _) => SYNC_COMPLETED.to_string(),
        (OperationKind::Export, _) => EXPORT_COMPLETED.to_string(),
        (OperationKind::PricingToggle, _) => PRICING_ACTIVATED.to_string(),
    };

    (message, level)
}
