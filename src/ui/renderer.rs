//! Terminal setup and the main event loop

use crate::config::Config;
use crate::dashboard::DashboardEvent;
use crate::sync::SyncService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::EventHandler;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the dashboard until the user quits
pub async fn run_app(config: Config) -> Result<()> {
    let sync_service = SyncService::from_config(&config.sync, config.timing.sync_fallback());
    if !sync_service.has_source() {
        log::info!("Sync: no endpoint configured, syncs will use fallback data");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, sync_service);
    let mut event_handler = EventHandler::default();

    let result = run_ui(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main UI loop
pub async fn run_ui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    // The layout depends on the width we actually start with
    let size = terminal.size()?;
    app.handle_action(DashboardEvent::SetViewportWidth(size.width).into());

    loop {
        terminal.draw(|f| app.render(f, f.area()))?;

        let event = event_handler.next_event().await?;
        app.handle_event(event);

        if app.should_quit() {
            log::info!("Shutting down");
            break;
        }
    }

    Ok(())
}
