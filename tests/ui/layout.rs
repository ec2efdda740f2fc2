use opsboard::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_status_line() {
    let (top, status) = LayoutManager::main_layout(Rect::new(0, 0, 100, 30));
    assert_eq!(top, Rect::new(0, 0, 100, 29));
    assert_eq!(status, Rect::new(0, 29, 100, 1));
}

#[test]
fn test_docked_layout_caps_sidebar_width() {
    let (sidebar, panel) = LayoutManager::docked_layout(Rect::new(0, 0, 120, 30));
    assert_eq!(sidebar.width, 28);
    assert_eq!(panel.x, 28);
    assert_eq!(panel.width, 92);

    // Never more than a third of a small terminal
    let (sidebar, _) = LayoutManager::docked_layout(Rect::new(0, 0, 60, 30));
    assert_eq!(sidebar.width, 20);
}

#[test]
fn test_drawer_rect_hugs_left_edge() {
    let drawer = LayoutManager::drawer_rect(Rect::new(0, 0, 60, 20));
    assert_eq!(drawer, Rect::new(0, 0, 28, 20));
}

#[test]
fn test_toast_rects_stack_until_space_runs_out() {
    let area = Rect::new(0, 0, 100, 10);
    assert_eq!(LayoutManager::toast_rect(area, 0), Some(Rect::new(50, 1, 50, 3)));
    assert_eq!(LayoutManager::toast_rect(area, 1), Some(Rect::new(50, 4, 50, 3)));
    assert_eq!(LayoutManager::toast_rect(area, 2), Some(Rect::new(50, 7, 50, 3)));
    assert_eq!(LayoutManager::toast_rect(area, 3), None);
}
