use crate::config::{Config, TimingConfig};
use crate::dashboard::{Command, Dashboard, DashboardEvent};
use crate::demo;
use crate::navigation::{ActivePanel, LayoutContext};
use crate::notify::ToastQueue;
use crate::sync::SyncService;
use crate::ui::components::{PanelComponent, SidebarComponent, StatusBar, ToastOverlay};
use crate::ui::core::{
    actions::{Action, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Session core
    dashboard: Dashboard<ToastQueue>,

    // Component composition
    sidebar: SidebarComponent,
    panel: PanelComponent,
    focus: Focus,

    // Services
    sync_service: SyncService,
    timing: TimingConfig,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    last_active: ActivePanel,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, sync_service: SyncService) -> Self {
        let initial = config.ui.initial_panel();
        let toasts = ToastQueue::new(config.ui.max_toasts, config.ui.toast_lifetime());
        let dashboard = Dashboard::new(demo::tickets(), initial, config.ui.narrow_width, toasts);
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut app = Self {
            last_active: dashboard.navigation().active().clone(),
            dashboard,
            sidebar: SidebarComponent::new(initial),
            panel: PanelComponent::new(),
            focus: Focus::default(),
            sync_service,
            timing: config.timing.clone(),
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dashboard(&self) -> &Dashboard<ToastQueue> {
        &self.dashboard
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Which component receives keys once global shortcuts are ruled out.
    ///
    /// In narrow layouts the sidebar only exists as a drawer, so it owns
    /// input exactly while the drawer is open.
    pub fn effective_focus(&self) -> Focus {
        match self.dashboard.navigation().layout() {
            LayoutContext::Wide => self.focus,
            LayoutContext::Narrow if self.dashboard.navigation().is_drawer_open() => Focus::Sidebar,
            LayoutContext::Narrow => Focus::Panel,
        }
    }

    /// Push dashboard state down into the components
    fn sync_component_data(&mut self) {
        let active = self.dashboard.navigation().active().clone();
        if active != self.last_active {
            if let Some(panel) = active.panel() {
                self.sidebar.sync_cursor(panel);
            }
            self.last_active = active;
        }

        self.panel.update_data(self.dashboard.view().view, self.dashboard.store().ids());

        let focus = self.effective_focus();
        self.sidebar.focused = focus == Focus::Sidebar;
        self.panel.focused = focus == Focus::Panel;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        use crate::operations::OperationKind;

        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Esc => {
                if self.dashboard.navigation().is_drawer_open() {
                    DashboardEvent::ToggleDrawer.into()
                } else {
                    log::info!("Global key: Esc - quitting application");
                    Action::Quit
                }
            }
            KeyCode::Tab => Action::CycleFocus,
            KeyCode::Char('e') => DashboardEvent::Start(OperationKind::Export).into(),
            KeyCode::Char('s') => DashboardEvent::Start(OperationKind::Sync).into(),
            KeyCode::Char('p') => DashboardEvent::Start(OperationKind::PricingToggle).into(),
            KeyCode::Char('m') if self.dashboard.navigation().layout() == LayoutContext::Narrow => {
                DashboardEvent::ToggleDrawer.into()
            }
            _ => Action::None,
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.handle_global_key(key);
        if !matches!(action, Action::None) {
            return action;
        }

        match self.effective_focus() {
            Focus::Sidebar => self.sidebar.handle_key_events(key),
            Focus::Panel => self.panel.handle_key_events(key),
        }
    }

    /// Apply an action and schedule whatever follow-up work it produces
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Dashboard(event) => {
                log::debug!("Dashboard: applying {:?}", event);
                if let Some(command) = self.dashboard.apply(event) {
                    self.schedule(command);
                }
            }
            Action::CycleFocus => {
                self.focus = self.focus.toggled();
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::None => {}
        }
        self.sync_component_data();
    }

    fn schedule(&mut self, command: Command) {
        let task_id = match command {
            Command::RunExport => self
                .task_manager
                .spawn_export(self.timing.export_step, self.timing.export_step_interval()),
            Command::RunSync => self.task_manager.spawn_sync(self.sync_service.clone()),
            Command::ActivatePricing => self
                .task_manager
                .spawn_pricing_activation(self.timing.pricing_activation()),
            Command::SettleBulk(pending) => self
                .task_manager
                .spawn_bulk_settlement(pending, self.timing.bulk_action()),
        };
        log::debug!("Scheduled background task {}", task_id);
    }

    /// Apply every action posted by background tasks; returns how many ran
    pub fn process_background_actions(&mut self) -> usize {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed = self.task_manager.cleanup_finished_tasks();
        if !completed.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed.len());
        }

        let count = actions.len();
        for action in actions {
            self.handle_action(action);
        }
        count
    }

    /// Expire old toasts
    pub fn tick(&mut self, now: Instant) {
        self.dashboard.notifier_mut().prune_expired(now);
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.handle_key_events(key);
                self.handle_action(action);
            }
            EventType::Resize(width, _) => {
                self.handle_action(DashboardEvent::SetViewportWidth(width).into());
            }
            EventType::Tick => {
                self.process_background_actions();
                self.tick(Instant::now());
            }
            EventType::Key(_) | EventType::Other => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (top, status) = LayoutManager::main_layout(rect);
        let view = self.dashboard.view();

        match view.layout {
            LayoutContext::Wide => {
                let (sidebar_area, panel_area) = LayoutManager::docked_layout(top);
                self.sidebar.as_drawer = false;
                self.sidebar.render(f, sidebar_area, &view);
                self.panel.render(f, panel_area, &view);
            }
            LayoutContext::Narrow => {
                self.panel.render(f, top, &view);
                if view.drawer_open {
                    self.sidebar.as_drawer = true;
                    self.sidebar.render(f, LayoutManager::drawer_rect(top), &view);
                }
            }
        }

        StatusBar::render(f, status, &view);
        ToastOverlay::render(f, top, self.dashboard.notifier());
    }
}
