use opsboard::constants::{
    EXPORT_COMPLETED, EXPORT_STARTED, PRICING_ACTIVATED, PRICING_DEACTIVATED, SYNC_COMPLETED, SYNC_FALLBACK,
    SYNC_STARTED,
};
use opsboard::error::DashboardError;
use opsboard::notify::NotificationLevel;
use opsboard::operations::{
    OperationKind, OperationStatus, OperationTracker, Outcome, PricingState, StartOutcome,
};

type Sink = Vec<(String, NotificationLevel)>;

#[test]
fn test_new_tracker_is_idle() {
    let tracker = OperationTracker::new();
    for kind in OperationKind::ALL {
        let op = tracker.get(kind);
        assert_eq!(op.status, OperationStatus::Idle);
        assert_eq!(op.progress, 0);
        assert!(op.last_settlement.is_none());
    }
    assert_eq!(tracker.pricing_state(), PricingState::Inactive);
}

#[test]
fn test_export_lifecycle() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    assert_eq!(tracker.start(OperationKind::Export, &mut sink), Ok(StartOutcome::Started));
    assert!(tracker.is_running(OperationKind::Export));
    assert_eq!(sink, vec![(EXPORT_STARTED.to_string(), NotificationLevel::Info)]);

    let mut observations = Vec::new();
    for percent in (0..=100).step_by(10) {
        if let Some(accepted) = tracker.report_progress(OperationKind::Export, percent) {
            observations.push(accepted);
        }
    }
    assert_eq!(observations.len(), 11);
    assert_eq!(tracker.get(OperationKind::Export).progress, 100);

    let status = tracker.settle(OperationKind::Export, Outcome::Success, &mut sink);
    assert_eq!(status, Some(OperationStatus::Succeeded));

    let op = tracker.get(OperationKind::Export);
    assert_eq!(op.status, OperationStatus::Idle);
    assert_eq!(op.progress, 0);
    assert_eq!(op.last_settlement, Some(OperationStatus::Succeeded));
    assert_eq!(sink[1], (EXPORT_COMPLETED.to_string(), NotificationLevel::Success));
}

#[test]
fn test_duplicate_start_keeps_progress() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    tracker.start(OperationKind::Export, &mut sink).unwrap();
    tracker.report_progress(OperationKind::Export, 0);
    tracker.report_progress(OperationKind::Export, 40);

    let result = tracker.start(OperationKind::Export, &mut sink);
    assert_eq!(result, Err(DashboardError::DuplicateOperation(OperationKind::Export)));
    assert_eq!(tracker.get(OperationKind::Export).progress, 40);
    assert_eq!(sink.len(), 1);

    tracker.settle(OperationKind::Export, Outcome::Success, &mut sink);
    let completions = sink.iter().filter(|(m, _)| m == EXPORT_COMPLETED).count();
    assert_eq!(completions, 1);
}

#[test]
fn test_progress_must_strictly_increase() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();
    tracker.start(OperationKind::Export, &mut sink).unwrap();

    assert_eq!(tracker.report_progress(OperationKind::Export, 30), Some(30));
    assert_eq!(tracker.report_progress(OperationKind::Export, 30), None);
    assert_eq!(tracker.report_progress(OperationKind::Export, 20), None);
    assert_eq!(tracker.report_progress(OperationKind::Export, 250), Some(100));
    assert_eq!(tracker.get(OperationKind::Export).progress, 100);
}

#[test]
fn test_progress_ignored_when_idle_or_indeterminate() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    assert_eq!(tracker.report_progress(OperationKind::Export, 10), None);

    tracker.start(OperationKind::Sync, &mut sink).unwrap();
    assert_eq!(tracker.report_progress(OperationKind::Sync, 10), None);
}

#[test]
fn test_settle_when_not_running_is_ignored() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    assert_eq!(tracker.settle(OperationKind::Sync, Outcome::Success, &mut sink), None);
    assert!(sink.is_empty());
}

#[test]
fn test_sync_fallback_notifies_info() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    tracker.start(OperationKind::Sync, &mut sink).unwrap();
    assert_eq!(sink[0], (SYNC_STARTED.to_string(), NotificationLevel::Info));

    let outcome = Outcome::Fallback {
        reason: "no endpoint configured".to_string(),
    };
    assert_eq!(tracker.settle(OperationKind::Sync, outcome, &mut sink), Some(OperationStatus::Succeeded));
    assert_eq!(sink[1], (SYNC_FALLBACK.to_string(), NotificationLevel::Info));
}

#[test]
fn test_sync_live_notifies_success() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    tracker.start(OperationKind::Sync, &mut sink).unwrap();
    tracker.settle(OperationKind::Sync, Outcome::Success, &mut sink);
    assert_eq!(sink[1], (SYNC_COMPLETED.to_string(), NotificationLevel::Success));
}

#[test]
fn test_failure_notifies_error_and_returns_to_idle() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    tracker.start(OperationKind::Export, &mut sink).unwrap();
    let outcome = Outcome::Failure {
        reason: "disk full".to_string(),
    };
    assert_eq!(tracker.settle(OperationKind::Export, outcome, &mut sink), Some(OperationStatus::Failed));

    let op = tracker.get(OperationKind::Export);
    assert_eq!(op.status, OperationStatus::Idle);
    assert_eq!(op.last_settlement, Some(OperationStatus::Failed));
    assert_eq!(sink[1].1, NotificationLevel::Error);
    assert!(sink[1].0.contains("disk full"));
}

#[test]
fn test_pricing_two_call_sequence() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    // First call: Inactive -> Activating, silent until settled
    assert_eq!(tracker.start(OperationKind::PricingToggle, &mut sink), Ok(StartOutcome::Started));
    assert_eq!(tracker.pricing_state(), PricingState::Activating);
    assert!(sink.is_empty());

    tracker.settle(OperationKind::PricingToggle, Outcome::Success, &mut sink);
    assert_eq!(tracker.pricing_state(), PricingState::Active);
    assert!(tracker.is_pricing_active());

    // Second call: Active -> Inactive immediately, never running
    assert_eq!(tracker.start(OperationKind::PricingToggle, &mut sink), Ok(StartOutcome::Deactivated));
    assert!(!tracker.is_running(OperationKind::PricingToggle));
    assert_eq!(tracker.pricing_state(), PricingState::Inactive);

    assert_eq!(
        sink,
        vec![
            (PRICING_ACTIVATED.to_string(), NotificationLevel::Success),
            (PRICING_DEACTIVATED.to_string(), NotificationLevel::Info),
        ]
    );
}

#[test]
fn test_pricing_duplicate_while_activating() {
    let mut tracker = OperationTracker::new();
    let mut sink = Sink::new();

    tracker.start(OperationKind::PricingToggle, &mut sink).unwrap();
    assert!(tracker.start(OperationKind::PricingToggle, &mut sink).is_err());
    assert_eq!(tracker.pricing_state(), PricingState::Activating);
}

#[test]
fn test_operation_display_names() {
    assert_eq!(OperationKind::Export.to_string(), "export");
    assert_eq!(OperationKind::Sync.to_string(), "data sync");
    assert_eq!(OperationKind::PricingToggle.to_string(), "dynamic pricing");
    assert!(OperationKind::Export.has_progress());
    assert!(!OperationKind::Sync.has_progress());
}
