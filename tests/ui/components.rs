use super::buffer_text;
use opsboard::dashboard::{Dashboard, DashboardEvent};
use opsboard::demo;
use opsboard::navigation::{Panel, ViewKind};
use opsboard::notify::{NotificationLevel, NotificationSink, ToastQueue};
use opsboard::operations::OperationKind;
use opsboard::selection::BulkAction;
use opsboard::sync::SyncOutcome;
use opsboard::ui::components::{PanelComponent, SidebarComponent, StatusBar, ToastOverlay};
use opsboard::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

type Sink = Vec<(String, NotificationLevel)>;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn dashboard_on(panel: Panel) -> Dashboard<Sink> {
    Dashboard::new(demo::tickets(), panel, 100, Sink::new())
}

fn render_panel(dash: &Dashboard<Sink>, panel: &mut PanelComponent) -> String {
    panel.update_data(dash.view().view, dash.store().ids());
    let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
    terminal.draw(|f| panel.render(f, f.area(), &dash.view())).unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_tickets_table_shows_records_and_checkboxes() {
    let mut dash = dashboard_on(Panel::Tickets);
    dash.apply(DashboardEvent::Toggle("#TK-9285".to_string()));

    let mut panel = PanelComponent::new();
    let text = render_panel(&dash, &mut panel);

    for id in ["#TK-9284", "#TK-9285", "#TK-9286", "#TK-9287"] {
        assert!(text.contains(id), "missing {} in\n{}", id, text);
    }
    assert!(text.contains("[x]"));
    assert!(text.contains("[ ]"));
    assert!(text.contains("1 selected"));
    assert!(text.contains("Sara Mahmoud"));
}

#[test]
fn test_ticket_keys_map_to_dashboard_events() {
    let dash = dashboard_on(Panel::Tickets);
    let mut panel = PanelComponent::new();
    panel.update_data(ViewKind::Tickets, dash.store().ids());
    assert_eq!(panel.cursor(), Some(0));

    let action = panel.handle_key_events(key(KeyCode::Char(' ')));
    assert!(matches!(action, Action::Dashboard(DashboardEvent::Toggle(ref id)) if id == "#TK-9284"));

    panel.handle_key_events(key(KeyCode::Char('j')));
    let action = panel.handle_key_events(key(KeyCode::Char(' ')));
    assert!(matches!(action, Action::Dashboard(DashboardEvent::Toggle(ref id)) if id == "#TK-9285"));

    // The cursor stops at the last row
    for _ in 0..10 {
        panel.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(panel.cursor(), Some(3));

    assert!(matches!(
        panel.handle_key_events(key(KeyCode::Char('a'))),
        Action::Dashboard(DashboardEvent::SelectAll)
    ));
    assert!(matches!(
        panel.handle_key_events(key(KeyCode::Char('x'))),
        Action::Dashboard(DashboardEvent::ClearSelection)
    ));
    assert!(matches!(
        panel.handle_key_events(key(KeyCode::Char('c'))),
        Action::Dashboard(DashboardEvent::BulkApply(BulkAction::Cancel))
    ));
    assert!(matches!(
        panel.handle_key_events(key(KeyCode::Char('f'))),
        Action::Dashboard(DashboardEvent::BulkApply(BulkAction::Refund))
    ));
}

#[test]
fn test_panel_keys_ignored_outside_tickets() {
    let dash = dashboard_on(Panel::Home);
    let mut panel = PanelComponent::new();
    panel.update_data(ViewKind::Home, dash.store().ids());

    assert!(matches!(panel.handle_key_events(key(KeyCode::Char(' '))), Action::None));
    assert!(matches!(panel.handle_key_events(key(KeyCode::Char('c'))), Action::None));
}

#[test]
fn test_data_integration_empty_then_filled() {
    let mut dash = dashboard_on(Panel::DataIntegration);
    let mut panel = PanelComponent::new();

    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("No data yet"));

    dash.apply(DashboardEvent::Start(OperationKind::Sync));
    dash.apply(DashboardEvent::SyncSettled(SyncOutcome::Fallback {
        items: demo::sync_fallback(),
        reason: "offline".to_string(),
    }));

    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("Gate A sales sync"));
    assert!(text.contains("Smart lighting control"));
    assert!(!text.contains("No data yet"));
}

#[test]
fn test_audience_zone_pick() {
    let dash = dashboard_on(Panel::Audience);
    let mut panel = PanelComponent::new();

    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("No zone picked"));
    assert_eq!(panel.picked_zone(), None);

    panel.handle_key_events(key(KeyCode::Char('j')));
    panel.handle_key_events(key(KeyCode::Char('j')));
    assert!(matches!(panel.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert_eq!(panel.picked_zone(), Some(2));

    let text = render_panel(&dash, &mut panel);
    let marked = text.lines().find(|line| line.contains('◆')).unwrap();
    assert!(marked.contains("Orchestra - front"));
    assert!(text.contains("Orchestra - front · 98% of 64 seats · $45,000"));

    // The cursor stops at the last zone
    for _ in 0..20 {
        panel.handle_key_events(key(KeyCode::Down));
    }
    panel.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(panel.picked_zone(), Some(demo::ZONES.len() - 1));
}

#[test]
fn test_placeholder_uses_panel_title() {
    let mut dash = dashboard_on(Panel::Home);
    dash.apply(DashboardEvent::SwitchTo(Panel::Wallet));
    let mut panel = PanelComponent::new();

    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("Wallet"));
    assert!(text.contains("This section is being prepared."));
}

#[test]
fn test_home_shows_pricing_state() {
    let mut dash = dashboard_on(Panel::Home);
    let mut panel = PanelComponent::new();

    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("Central Operations Room"));
    assert!(text.contains("Dynamic pricing: off"));

    dash.apply(DashboardEvent::Start(OperationKind::PricingToggle));
    let text = render_panel(&dash, &mut panel);
    assert!(text.contains("activating"));
}

#[test]
fn test_sidebar_navigation_wraps_and_commits() {
    let mut sidebar = SidebarComponent::new(Panel::Home);
    assert_eq!(sidebar.cursor_panel(), Panel::Home);

    sidebar.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(sidebar.cursor_panel(), Panel::Settings);

    sidebar.handle_key_events(key(KeyCode::Down));
    assert_eq!(sidebar.cursor_panel(), Panel::Home);

    for _ in 0..3 {
        sidebar.handle_key_events(key(KeyCode::Char('j')));
    }
    let action = sidebar.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::Dashboard(DashboardEvent::SwitchTo(Panel::Tickets))));

    sidebar.handle_key_events(key(KeyCode::End));
    assert_eq!(sidebar.cursor_panel(), Panel::Settings);
    sidebar.handle_key_events(key(KeyCode::Char('g')));
    assert_eq!(sidebar.cursor_panel(), Panel::Home);
}

#[test]
fn test_sidebar_renders_every_label() {
    let dash = dashboard_on(Panel::Shows);
    let mut sidebar = SidebarComponent::new(Panel::Shows);
    let mut terminal = Terminal::new(TestBackend::new(30, 18)).unwrap();
    terminal.draw(|f| sidebar.render(f, f.area(), &dash.view())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("opsboard"));
    assert!(text.contains("Home"));
    assert!(text.contains("Ticket Management"));
    assert!(text.contains("Settings"));
    assert!(text.contains("▌ Show Management"));
}

#[test]
fn test_status_bar_reports_running_operations() {
    let mut dash = dashboard_on(Panel::Tickets);
    let idle = StatusBar::status_text(&dash.view());
    assert!(idle.contains("q: quit"));
    assert!(idle.contains("c: cancel"));

    dash.apply(DashboardEvent::Start(OperationKind::Export));
    dash.apply(DashboardEvent::ExportProgress(0));
    dash.apply(DashboardEvent::ExportProgress(40));
    let busy = StatusBar::status_text(&dash.view());
    assert!(busy.contains("export 40%"));
}

#[test]
fn test_toast_overlay_shows_newest_first() {
    let mut toasts = ToastQueue::default();
    toasts.notify("first message", NotificationLevel::Info);
    toasts.notify("second message", NotificationLevel::Success);

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|f| ToastOverlay::render(f, f.area(), &toasts)).unwrap();

    let text = buffer_text(&terminal);
    let first = text.find("first message").unwrap();
    let second = text.find("second message").unwrap();
    assert!(second < first);
    assert!(text.contains("Done"));
}
