//! Constants used throughout the application
//!
//! This module centralizes notification text, UI copy, and layout limits so
//! the core and the renderer agree on wording.

// Export
pub const EXPORT_STARTED: &str = "Compiling strategic data...";
pub const EXPORT_COMPLETED: &str = "✅ Cloud report generated successfully.";

// Dynamic pricing
pub const PRICING_ACTIVATED: &str =
    "✅ Dynamic pricing enabled. The system is now optimising revenue for every seat.";
pub const PRICING_DEACTIVATED: &str = "Dynamic pricing for the theatre has been switched off.";

// Data sync
pub const SYNC_STARTED: &str = "Syncing data from external systems...";
pub const SYNC_COMPLETED: &str = "✅ Data refreshed successfully.";
pub const SYNC_FALLBACK: &str = "Direct connection failed. Using the backup data snapshot.";

// Generic failure prefix for operations settled with a failure outcome
pub const OPERATION_FAILED: &str = "❌ Operation failed";

// UI copy
pub const HOME_TITLE: &str = "Central Operations Room";
pub const SYNC_EMPTY_HINT: &str = "No data yet. Press 's' to sync with external systems.";
pub const PLACEHOLDER_HINT: &str = "This section is being prepared.";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_DIR_NAME: &str = "opsboard";
pub const LOCAL_CONFIG_FILE: &str = "opsboard.toml";
pub const LOG_FILE_NAME: &str = "opsboard.log";

// UI Layout Constants
/// Sidebar width in columns when docked
pub const SIDEBAR_WIDTH: u16 = 28;
/// Smallest accepted narrow-layout threshold
pub const NARROW_WIDTH_MIN: u16 = 40;
/// Largest accepted narrow-layout threshold
pub const NARROW_WIDTH_MAX: u16 = 400;
/// Default terminal width below which the sidebar becomes a drawer
pub const NARROW_WIDTH_DEFAULT: u16 = 100;
/// Upper bound for any configured simulated delay, in milliseconds
pub const MAX_DELAY_MS: u64 = 60_000;
