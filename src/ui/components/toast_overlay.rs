//! Transient notifications stacked in the top-right corner.

use crate::notify::{NotificationLevel, ToastQueue};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ToastOverlay;

impl ToastOverlay {
    fn level_style(level: NotificationLevel) -> (Color, &'static str) {
        match level {
            NotificationLevel::Info => (Color::Cyan, "Info"),
            NotificationLevel::Success => (Color::Green, "Done"),
            NotificationLevel::Error => (Color::Red, "Error"),
        }
    }

    /// Newest toast on top
    pub fn render(f: &mut Frame, area: Rect, toasts: &ToastQueue) {
        for (index, toast) in toasts.iter().rev().enumerate() {
            let Some(rect) = LayoutManager::toast_rect(area, index as u16) else {
                break;
            };
            let (color, title) = Self::level_style(toast.level);
            let paragraph = Paragraph::new(toast.message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", title))
                        .border_style(Style::default().fg(color)),
                );
            f.render_widget(Clear, rect);
            f.render_widget(paragraph, rect);
        }
    }
}
