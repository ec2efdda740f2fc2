//! Notification sink and the toast queue that backs it in the TUI.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Anything the dashboard core can report to. Fire-and-forget.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, level: NotificationLevel);
}

/// Collects notifications in order; handy for headless use and tests.
impl NotificationSink for Vec<(String, NotificationLevel)> {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        self.push((message.to_string(), level));
    }
}

/// A toast notification message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }
}

/// Bounded queue of visible toasts; the oldest drop off first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    max_visible: usize,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(max_visible: usize, lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: max_visible.max(1),
            lifetime,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        while self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop toasts older than the configured lifetime
    pub fn prune_expired(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < lifetime);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(4))
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        log::debug!("Toast ({:?}): {}", level, message);
        self.push(Toast::new(message, level));
    }
}
