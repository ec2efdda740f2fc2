//! Layout management and calculations

use crate::constants::SIDEBAR_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split into the working area and a one-line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));
        (top_area, status_area)
    }

    /// Docked sidebar on the left, active panel on the right
    #[must_use]
    pub fn docked_layout(area: Rect) -> (Rect, Rect) {
        let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Drawer overlay hugging the left edge of the working area
    #[must_use]
    pub fn drawer_rect(area: Rect) -> Rect {
        let width = SIDEBAR_WIDTH.min(area.width);
        Rect::new(area.x, area.y, width, area.height)
    }

    /// Toast stack in the top-right corner, one row of height 3 per toast
    #[must_use]
    pub fn toast_rect(area: Rect, index: u16) -> Option<Rect> {
        let width = (area.width / 2).max(30).min(area.width);
        let y = area.y + 1 + index * 3;
        if y + 3 > area.y + area.height {
            return None;
        }
        Some(Rect::new(area.x + area.width - width, y, width, 3))
    }
}
