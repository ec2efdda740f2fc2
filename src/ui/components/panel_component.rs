//! The main area: dispatches to a view renderer by [`ViewKind`] and owns the
//! ticket cursor and the audience zone pick.

use super::views;
use crate::dashboard::{DashboardEvent, DashboardView};
use crate::demo;
use crate::navigation::ViewKind;
use crate::selection::BulkAction;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::TableState, Frame};

pub struct PanelComponent {
    /// Ids of the records currently listed, refreshed from the dashboard view
    record_ids: Vec<String>,
    view: ViewKind,
    table_state: TableState,
    zone_state: TableState,
    picked_zone: Option<usize>,
    pub focused: bool,
}

impl Default for PanelComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelComponent {
    pub fn new() -> Self {
        Self {
            record_ids: Vec::new(),
            view: ViewKind::Home,
            table_state: TableState::default(),
            zone_state: TableState::default().with_selected(Some(0)),
            picked_zone: None,
            focused: false,
        }
    }

    pub fn update_data(&mut self, view: ViewKind, record_ids: Vec<String>) {
        self.view = view;
        self.record_ids = record_ids;
        self.clamp_cursor();
    }

    pub fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Zone chosen in the audience view, if any
    pub fn picked_zone(&self) -> Option<usize> {
        self.picked_zone
    }

    fn clamp_cursor(&mut self) {
        if self.record_ids.is_empty() {
            self.table_state.select(None);
        } else {
            let index = self.table_state.selected().unwrap_or(0).min(self.record_ids.len() - 1);
            self.table_state.select(Some(index));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.record_ids.is_empty() {
            return;
        }
        let len = self.record_ids.len() as isize;
        let current = self.table_state.selected().unwrap_or(0) as isize;
        self.table_state.select(Some((current + delta).clamp(0, len - 1) as usize));
    }

    fn id_at_cursor(&self) -> Option<&String> {
        self.table_state.selected().and_then(|i| self.record_ids.get(i))
    }

    fn handle_ticket_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.id_at_cursor() {
                Some(id) => DashboardEvent::Toggle(id.clone()).into(),
                None => Action::None,
            },
            KeyCode::Char('a') => DashboardEvent::SelectAll.into(),
            KeyCode::Char('x') => DashboardEvent::ClearSelection.into(),
            KeyCode::Char('c') => DashboardEvent::BulkApply(BulkAction::Cancel).into(),
            KeyCode::Char('f') => DashboardEvent::BulkApply(BulkAction::Refund).into(),
            _ => Action::None,
        }
    }

    fn handle_zone_keys(&mut self, key: KeyEvent) -> Action {
        let last = demo::ZONES.len() - 1;
        let current = self.zone_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.zone_state.select(Some(current.saturating_sub(1))),
            KeyCode::Down | KeyCode::Char('j') => self.zone_state.select(Some((current + 1).min(last))),
            KeyCode::Char(' ') | KeyCode::Enter => self.picked_zone = Some(current),
            _ => {}
        }
        Action::None
    }
}

impl Component for PanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.view {
            ViewKind::Tickets => self.handle_ticket_keys(key),
            ViewKind::Audience => self.handle_zone_keys(key),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &DashboardView<'_>) {
        match view.view {
            ViewKind::Home => views::render_home(f, rect, view),
            ViewKind::Engagement => views::render_engagement(f, rect),
            ViewKind::Shows => views::render_shows(f, rect),
            ViewKind::Tickets => views::render_tickets(f, rect, view, &mut self.table_state, self.focused),
            ViewKind::DataIntegration => views::render_data_integration(f, rect, view),
            ViewKind::Audience => {
                views::render_audience(f, rect, &mut self.zone_state, self.picked_zone, self.focused)
            }
            ViewKind::LiveMonitoring => views::render_live_monitoring(f, rect),
            ViewKind::Placeholder => views::render_placeholder(f, rect, view.active.title()),
        }
    }
}
