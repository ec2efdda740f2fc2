//! Timed continuations for dashboard operations.
//!
//! Every spawned task only sleeps and posts [`Action`]s back through the
//! channel. The app loop applies them in arrival order, so dashboard state
//! keeps a single writer.

use super::actions::Action;
use crate::dashboard::DashboardEvent;
use crate::operations::{OperationKind, Outcome};
use crate::selection::{BulkAction, PendingBulk};
use crate::sync::SyncService;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    ExportFinished,
    SyncFinished { fallback: bool },
    PricingActivated,
    BulkSettled(BulkAction),
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn_tracked<Fut>(&mut self, description: String, future: Fut) -> TaskId
    where
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        log::debug!("Task {}: spawned '{}'", task_id, description);
        let task = BackgroundTask {
            id: task_id,
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Report export progress from 0 to 100 in `step` increments, one every
    /// `interval`, then settle the export.
    pub fn spawn_export(&mut self, step: u8, interval: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();
        let step = step.max(1);

        self.spawn_tracked("Export report".to_string(), async move {
            let mut percent: u8 = 0;
            loop {
                let _ = action_sender.send(DashboardEvent::ExportProgress(percent).into());
                tokio::time::sleep(interval).await;
                if percent >= 100 {
                    break;
                }
                percent = percent.saturating_add(step).min(100);
            }

            let _ = action_sender.send(
                DashboardEvent::Settle {
                    kind: OperationKind::Export,
                    outcome: Outcome::Success,
                }
                .into(),
            );
            TaskResult::ExportFinished
        })
    }

    /// Fetch sync data (or fall back) and post the outcome
    pub fn spawn_sync(&mut self, sync_service: SyncService) -> TaskId {
        let action_sender = self.action_sender.clone();

        self.spawn_tracked("Background sync".to_string(), async move {
            let outcome = sync_service.fetch().await;
            let fallback = outcome.is_fallback();
            let _ = action_sender.send(DashboardEvent::SyncSettled(outcome).into());
            TaskResult::SyncFinished { fallback }
        })
    }

    pub fn spawn_pricing_activation(&mut self, delay: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();

        self.spawn_tracked("Activate dynamic pricing".to_string(), async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(
                DashboardEvent::Settle {
                    kind: OperationKind::PricingToggle,
                    outcome: Outcome::Success,
                }
                .into(),
            );
            TaskResult::PricingActivated
        })
    }

    pub fn spawn_bulk_settlement(&mut self, pending: PendingBulk, delay: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Bulk {} of {} tickets", pending.action, pending.ids.len());

        self.spawn_tracked(description, async move {
            tokio::time::sleep(delay).await;
            let action = pending.action;
            let _ = action_sender.send(DashboardEvent::BulkSettled(pending).into());
            TaskResult::BulkSettled(action)
        })
    }

    /// Forget tasks whose futures have completed; returns their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Task {}: '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Abort everything still running
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
