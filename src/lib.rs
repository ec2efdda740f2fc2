//! opsboard - a terminal operations dashboard for a theatre venue
//!
//! This library keeps one in-memory session of venue data (tickets, sync
//! results, long-running operations) and renders it with Ratatui. All state
//! changes go through [`dashboard::Dashboard`]; timed work is scheduled by the
//! UI and fed back in as events.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`dashboard`] - The session core and its event/command protocol
//! * [`navigation`] - Panels, the sidebar, and narrow-layout drawer state
//! * [`operations`] - Export, sync, and dynamic pricing lifecycles
//! * [`selection`] - Ticket selection and bulk actions
//! * [`sync`] - External data sync with a fixed fallback dataset
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

pub mod dashboard;

/// Fixed demo data
pub mod demo;

pub mod error;

/// File logging setup
pub mod logger;

pub mod navigation;

/// Notification sinks and the toast queue
pub mod notify;

pub mod operations;

pub mod selection;

/// In-memory record store
pub mod store;

pub mod sync;

/// Terminal user interface components and rendering
pub mod ui;

pub use dashboard::{Command, Dashboard, DashboardEvent, DashboardView};
pub use error::{DashboardError, DashboardResult};
