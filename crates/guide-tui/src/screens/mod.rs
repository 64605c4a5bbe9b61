//! Screen definitions for the guide TUI.

pub mod guide;
pub mod learning;
pub mod tutorial;

use crate::app::App;
use guide_engine::KeyValueStore;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render<S: KeyValueStore>(&self, app: &App<S>, area: Rect, buf: &mut Buffer);
}

/// Shown instead of the guide when the terminal is too small.
pub fn render_too_small(area: Rect, buf: &mut Buffer) {
    use crate::ui::theme::Styles;
    use ratatui::widgets::{Paragraph, Wrap};

    Paragraph::new("Terminal too small. Resize to at least 40x8.")
        .style(Styles::warning())
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
