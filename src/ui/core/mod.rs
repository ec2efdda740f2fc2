//! Core UI plumbing for opsboard.
//!
//! - [`actions`] - actions flowing from keys and background tasks into the app
//! - [`component`] - the trait every screen region implements
//! - [`event_handler`] - non-blocking terminal event polling
//! - [`task_manager`] - timed continuations for dashboard operations
//!
//! Components turn key presses into [`Action`]s. The app component applies
//! them to the dashboard and hands any returned command to the
//! [`TaskManager`]. Each task posts its results back as further actions.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskResult};
