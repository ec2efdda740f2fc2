//! Status bar component

use crate::dashboard::DashboardView;
use crate::navigation::{LayoutContext, ViewKind};
use crate::operations::OperationKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// One-line status bar
pub struct StatusBar;

impl StatusBar {
    pub fn status_text(view: &DashboardView<'_>) -> String {
        let running: Vec<String> = OperationKind::ALL
            .iter()
            .filter(|kind| view.operation(**kind).is_running())
            .map(|kind| {
                let op = view.operation(*kind);
                if kind.has_progress() {
                    format!("{} {}%", kind, op.progress)
                } else {
                    kind.to_string()
                }
            })
            .collect();

        if !running.is_empty() {
            return format!("⟳ Running: {}", running.join(" • "));
        }

        let mut hints = vec!["Tab: focus", "e: export", "s: sync", "p: pricing"];
        if view.view == ViewKind::Tickets {
            hints.push("Space: select • a: all • c: cancel • f: refund");
        }
        if view.view == ViewKind::Audience {
            hints.push("j/k: zone • Enter: pick");
        }
        if view.layout == LayoutContext::Narrow {
            hints.push("m: menu");
        }
        hints.push("q: quit");
        hints.join(" • ")
    }

    pub fn render(f: &mut Frame, area: Rect, view: &DashboardView<'_>) {
        let busy = OperationKind::ALL.iter().any(|kind| view.operation(*kind).is_running());
        let color = if busy { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::status_text(view))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
