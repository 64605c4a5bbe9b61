//! Navigation bar widget.

use crate::ui::theme::{Styles, Symbols};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Opens outside the guide.
    pub external: bool,
}

/// Horizontal list of links, with the active view highlighted.
#[derive(Debug, Clone)]
pub struct NavBar<'a> {
    links: &'a [NavLink],
    active: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn new(links: &'a [NavLink]) -> Self {
        Self {
            links,
            active: None,
        }
    }

    /// Set the index of the link pointing at the active view.
    #[must_use]
    pub fn active(mut self, index: Option<usize>) -> Self {
        self.active = index;
        self
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut spans = Vec::new();
        for (i, link) in self.links.iter().enumerate() {
            let is_active = self.active == Some(i);

            if i > 0 {
                spans.push(Span::styled(" | ", Styles::dim()));
            }

            spans.push(Span::styled(
                format!("[{}] ", i + 1),
                if is_active {
                    Styles::highlight()
                } else {
                    Styles::dim()
                },
            ));

            let style = if is_active {
                Styles::highlight()
            } else {
                Styles::default()
            };
            spans.push(Span::styled(link.label.clone(), style));
            if link.external {
                spans.push(Span::styled(Symbols::EXTERNAL, Styles::dim()));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn links() -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home".into(),
                href: "#home".into(),
                external: false,
            },
            NavLink {
                label: "arduino.cc".into(),
                href: "https://www.arduino.cc".into(),
                external: true,
            },
        ]
    }

    #[test]
    fn test_renders_numbered_links() {
        let links = links();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new(&links).active(Some(0)).render(area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @"[1] Home | [2] arduino.cc ->");
    }

    #[test]
    fn test_active_link_is_highlighted() {
        let links = links();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new(&links).active(Some(0)).render(area, &mut buf);

        // "[1] " starts at column 0, "Home" at column 4
        assert_eq!(buf[(4, 0)].style().fg, Styles::highlight().fg);
    }
}
