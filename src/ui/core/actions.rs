use crate::dashboard::DashboardEvent;

/// Which half of the screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Panel,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Panel,
            Focus::Panel => Focus::Sidebar,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Everything that touches dashboard state, from keys or background tasks
    Dashboard(DashboardEvent),

    // UI-only
    CycleFocus,

    // App control
    Quit,
    None,
}

impl From<DashboardEvent> for Action {
    fn from(event: DashboardEvent) -> Self {
        Action::Dashboard(event)
    }
}
