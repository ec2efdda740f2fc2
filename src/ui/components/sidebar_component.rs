//! Sidebar navigation between dashboard panels.
//!
//! The cursor moves independently of the active panel; `Enter` commits it.
//! In narrow layouts the same component is drawn as a drawer overlay.

use crate::dashboard::{DashboardEvent, DashboardView};
use crate::navigation::{Panel, SIDEBAR};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    cursor: usize,
    list_state: ListState,
    pub focused: bool,
    /// Drawn over the panel instead of docked beside it
    pub as_drawer: bool,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(Panel::Home)
    }
}

impl SidebarComponent {
    pub fn new(initial: Panel) -> Self {
        let cursor = initial.sidebar_index();
        let mut list_state = ListState::default();
        list_state.select(Some(cursor));
        Self {
            cursor,
            list_state,
            focused: true,
            as_drawer: false,
        }
    }

    pub fn cursor_panel(&self) -> Panel {
        SIDEBAR[self.cursor]
    }

    /// Keep the cursor on the active panel after external navigation
    pub fn sync_cursor(&mut self, panel: Panel) {
        self.cursor = panel.sidebar_index();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = SIDEBAR.len() as isize;
        self.cursor = ((self.cursor as isize + delta).rem_euclid(len)) as usize;
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = SIDEBAR.len() - 1;
                Action::None
            }
            KeyCode::Enter => DashboardEvent::SwitchTo(self.cursor_panel()).into(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &DashboardView<'_>) {
        let items: Vec<ListItem> = SIDEBAR
            .iter()
            .map(|panel| {
                let active = view.active.is(*panel);
                let marker = if active { "▌ " } else { "  " };
                let style = if active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(panel.label(), style),
                ]))
            })
            .collect();

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .title(" opsboard "),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        self.list_state.select(Some(self.cursor));
        if self.as_drawer {
            f.render_widget(Clear, rect);
        }
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
