//! Layout helpers for the guide TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum usable terminal width.
pub const MIN_WIDTH: u16 = 40;

/// Minimum usable terminal height.
pub const MIN_HEIGHT: u16 = 8;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub nav: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Nav bar on top, status bar at the bottom, content in between.
pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    MainLayout {
        nav: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Whether `area` is too small to draw the guide.
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_splits_rows() {
        let layout = main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.nav.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 22);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_is_too_small() {
        assert!(!is_too_small(Rect::new(0, 0, 80, 24)));
        assert!(is_too_small(Rect::new(0, 0, 39, 24)));
        assert!(is_too_small(Rect::new(0, 0, 80, 7)));
        assert!(!is_too_small(Rect::new(0, 0, 40, 8)));
    }
}
