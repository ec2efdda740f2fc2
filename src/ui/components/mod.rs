//! Reusable UI components

pub mod panel_component;
pub mod sidebar_component;
pub mod status_bar;
pub mod toast_overlay;
pub mod views;

// Component exports
pub use panel_component::PanelComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use toast_overlay::ToastOverlay;
