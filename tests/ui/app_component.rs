use super::buffer_text;
use opsboard::config::Config;
use opsboard::demo::ticket;
use opsboard::navigation::{LayoutContext, Panel};
use opsboard::operations::{OperationKind, PricingState};
use opsboard::sync::SyncService;
use opsboard::ui::core::{EventType, Focus};
use opsboard::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn new_app() -> AppComponent {
    AppComponent::new(&Config::default(), SyncService::new(None, Duration::from_millis(1500)))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn render(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    buffer_text(&terminal)
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = new_app();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());

    let mut app = new_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_tab_cycles_focus() {
    let mut app = new_app();
    assert_eq!(app.focus(), Focus::Sidebar);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Panel);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Sidebar);
}

#[tokio::test]
async fn test_sidebar_keys_switch_panels() {
    let mut app = new_app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('j'));
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.dashboard().navigation().active().is(Panel::Tickets));

    let text = render(&mut app, 120, 30);
    assert!(text.contains("#TK-9284"));
}

#[tokio::test(start_paused = true)]
async fn test_bulk_cancel_end_to_end() {
    let mut app = new_app();
    app.handle_action(opsboard::DashboardEvent::SwitchTo(Panel::Tickets).into());
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.dashboard().selection().len(), 2);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.active_task_count(), 1);
    assert_eq!(app.dashboard().notifier().len(), 1);

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(app.process_background_actions(), 1);

    let store = app.dashboard().store();
    assert_eq!(store.get("#TK-9284").unwrap().attr(ticket::STATUS), Some("cancelled"));
    assert_eq!(store.get("#TK-9285").unwrap().attr(ticket::STATUS), Some("cancelled"));
    assert!(app.dashboard().selection().is_empty());
    assert_eq!(app.dashboard().notifier().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_export_runs_to_completion() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('e'));
    assert!(app.dashboard().operations().is_running(OperationKind::Export));

    // A second press while running changes nothing
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.active_task_count(), 1);

    let text = render(&mut app, 120, 30);
    assert!(text.contains("Compiling strategic data..."));

    // 11 steps of 200 ms, then the settlement
    tokio::time::sleep(Duration::from_millis(2400)).await;
    app.process_background_actions();

    let export = app.dashboard().operations().get(OperationKind::Export);
    assert!(!export.is_running());
    assert_eq!(export.progress, 0);
}

#[tokio::test(start_paused = true)]
async fn test_pricing_toggle_end_to_end() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.dashboard().operations().pricing_state(), PricingState::Activating);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    app.process_background_actions();
    assert_eq!(app.dashboard().operations().pricing_state(), PricingState::Active);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.dashboard().operations().pricing_state(), PricingState::Inactive);
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_sync_falls_back_without_endpoint() {
    let mut app = new_app();
    app.handle_action(opsboard::DashboardEvent::SwitchTo(Panel::DataIntegration).into());
    press(&mut app, KeyCode::Char('s'));

    tokio::time::sleep(Duration::from_millis(1600)).await;
    app.process_background_actions();

    assert_eq!(app.dashboard().store().sync_cache().len(), 4);
    let text = render(&mut app, 120, 30);
    assert!(text.contains("Gate A sales sync"));
}

#[tokio::test]
async fn test_narrow_layout_uses_drawer() {
    let mut app = new_app();
    app.handle_event(EventType::Resize(60, 30));
    assert_eq!(app.dashboard().navigation().layout(), LayoutContext::Narrow);
    assert_eq!(app.effective_focus(), Focus::Panel);

    let text = render(&mut app, 60, 30);
    assert!(!text.contains("Ticket Management"));

    press(&mut app, KeyCode::Char('m'));
    assert!(app.dashboard().navigation().is_drawer_open());
    assert_eq!(app.effective_focus(), Focus::Sidebar);

    let text = render(&mut app, 60, 30);
    assert!(text.contains("Ticket Management"));

    // Picking a panel closes the drawer
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert!(app.dashboard().navigation().active().is(Panel::Engagement));
    assert!(!app.dashboard().navigation().is_drawer_open());

    // Esc closes an open drawer instead of quitting
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());
    assert!(!app.dashboard().navigation().is_drawer_open());
}

#[tokio::test]
async fn test_toasts_expire_on_tick() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.dashboard().notifier().len(), 1);

    app.tick(Instant::now() + Duration::from_secs(5));
    assert!(app.dashboard().notifier().is_empty());
}
