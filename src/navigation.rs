//! Panel navigation and the sidebar drawer.

use std::fmt;

/// Every panel reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Home,
    Engagement,
    Shows,
    Tickets,
    DataIntegration,
    Audience,
    Customers,
    DemandForecast,
    DynamicPricing,
    LiveMonitoring,
    ProfitCenter,
    Reports,
    Wallet,
    Settings,
}

/// Sidebar order. The renderer and key navigation both walk this table.
pub const SIDEBAR: [Panel; 14] = [
    Panel::Home,
    Panel::Engagement,
    Panel::Shows,
    Panel::Tickets,
    Panel::DataIntegration,
    Panel::Audience,
    Panel::Customers,
    Panel::DemandForecast,
    Panel::DynamicPricing,
    Panel::LiveMonitoring,
    Panel::ProfitCenter,
    Panel::Reports,
    Panel::Wallet,
    Panel::Settings,
];

/// Which renderer draws a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Engagement,
    Shows,
    Tickets,
    DataIntegration,
    Audience,
    LiveMonitoring,
    Placeholder,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::Home => "Home",
            Panel::Engagement => "Audience Engagement",
            Panel::Shows => "Show Management",
            Panel::Tickets => "Ticket Management",
            Panel::DataIntegration => "Data Integration",
            Panel::Audience => "Audience",
            Panel::Customers => "Customers",
            Panel::DemandForecast => "Demand Forecast",
            Panel::DynamicPricing => "Dynamic Pricing",
            Panel::LiveMonitoring => "Live Monitoring",
            Panel::ProfitCenter => "Profit Center",
            Panel::Reports => "Reports & KPIs",
            Panel::Wallet => "Wallet",
            Panel::Settings => "Settings",
        }
    }

    /// Stable lowercase key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            Panel::Home => "home",
            Panel::Engagement => "engagement",
            Panel::Shows => "shows",
            Panel::Tickets => "tickets",
            Panel::DataIntegration => "data_integration",
            Panel::Audience => "audience",
            Panel::Customers => "customers",
            Panel::DemandForecast => "demand_forecast",
            Panel::DynamicPricing => "dynamic_pricing",
            Panel::LiveMonitoring => "live_monitoring",
            Panel::ProfitCenter => "profit_center",
            Panel::Reports => "reports",
            Panel::Wallet => "wallet",
            Panel::Settings => "settings",
        }
    }

    pub fn view(self) -> ViewKind {
        match self {
            Panel::Home => ViewKind::Home,
            Panel::Engagement => ViewKind::Engagement,
            Panel::Shows => ViewKind::Shows,
            Panel::Tickets => ViewKind::Tickets,
            Panel::DataIntegration => ViewKind::DataIntegration,
            Panel::Audience => ViewKind::Audience,
            Panel::LiveMonitoring => ViewKind::LiveMonitoring,
            Panel::Customers
            | Panel::DemandForecast
            | Panel::DynamicPricing
            | Panel::ProfitCenter
            | Panel::Reports
            | Panel::Wallet
            | Panel::Settings => ViewKind::Placeholder,
        }
    }

    /// Resolve a sidebar label or config key
    pub fn from_label(label: &str) -> Option<Panel> {
        let label = label.trim();
        SIDEBAR
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(label) || p.key() == label)
    }

    pub fn sidebar_index(self) -> usize {
        SIDEBAR.iter().position(|p| *p == self).unwrap_or(0)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The panel currently on screen. Unknown labels are kept so the placeholder
/// view can title itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePanel {
    Known(Panel),
    Unlisted(String),
}

impl Default for ActivePanel {
    fn default() -> Self {
        ActivePanel::Known(Panel::Home)
    }
}

impl ActivePanel {
    pub fn view(&self) -> ViewKind {
        match self {
            ActivePanel::Known(panel) => panel.view(),
            ActivePanel::Unlisted(_) => ViewKind::Placeholder,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ActivePanel::Known(panel) => panel.label(),
            ActivePanel::Unlisted(label) => label,
        }
    }

    pub fn panel(&self) -> Option<Panel> {
        match self {
            ActivePanel::Known(panel) => Some(*panel),
            ActivePanel::Unlisted(_) => None,
        }
    }

    pub fn is(&self, panel: Panel) -> bool {
        self.panel() == Some(panel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutContext {
    #[default]
    Wide,
    Narrow,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    active: ActivePanel,
    drawer_open: bool,
    layout: LayoutContext,
    narrow_width: u16,
}

impl NavigationController {
    pub fn new(initial: Panel, narrow_width: u16) -> Self {
        Self {
            active: ActivePanel::Known(initial),
            drawer_open: false,
            layout: LayoutContext::Wide,
            narrow_width,
        }
    }

    pub fn active(&self) -> &ActivePanel {
        &self.active
    }

    pub fn layout(&self) -> LayoutContext {
        self.layout
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Switch panels. Returns the panel that was active before.
    pub fn switch_to(&mut self, panel: Panel) -> ActivePanel {
        self.set_active(ActivePanel::Known(panel))
    }

    /// Switch by label; unknown labels render the placeholder
    pub fn switch_to_label(&mut self, label: &str) -> ActivePanel {
        let target = match Panel::from_label(label) {
            Some(panel) => ActivePanel::Known(panel),
            None => {
                log::warn!("Navigation: unknown panel label '{}', using placeholder", label);
                ActivePanel::Unlisted(label.to_string())
            }
        };
        self.set_active(target)
    }

    fn set_active(&mut self, target: ActivePanel) -> ActivePanel {
        log::info!("Navigation: {} -> {}", self.active.title(), target.title());
        let previous = std::mem::replace(&mut self.active, target);
        if self.layout == LayoutContext::Narrow {
            self.drawer_open = false;
        }
        previous
    }

    /// Update the layout context from the current viewport width
    pub fn set_viewport_width(&mut self, width: u16) {
        let layout = if width < self.narrow_width {
            LayoutContext::Narrow
        } else {
            LayoutContext::Wide
        };
        if layout != self.layout {
            log::debug!("Navigation: layout {:?} -> {:?} at width {}", self.layout, layout, width);
            self.layout = layout;
            // The drawer only exists in narrow layouts
            if layout == LayoutContext::Wide {
                self.drawer_open = false;
            }
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// No-op in wide layouts, where the sidebar is docked
    pub fn toggle_drawer(&mut self) {
        if self.layout == LayoutContext::Narrow {
            self.drawer_open = !self.drawer_open;
        }
    }
}
