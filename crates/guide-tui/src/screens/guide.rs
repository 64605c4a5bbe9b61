//! The single guide screen: nav bar, active view, status bar.

use guide_engine::KeyValueStore;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::learning::learning_lines;
use super::tutorial::stepper_lines;
use super::{render_too_small, Screen};
use crate::app::{App, Mode, LEARNING_VIEW, TUTORIAL_VIEW};
use crate::text::{render_markdown, wrap_lines, MarkdownStyles};
use crate::ui::layout::{is_too_small, main_layout};
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, NavBar, StatusBar};

pub struct GuideScreen;

impl Screen for GuideScreen {
    fn render<S: KeyValueStore>(&self, app: &App<S>, area: Rect, buf: &mut Buffer) {
        if is_too_small(area) {
            render_too_small(area, buf);
            return;
        }
        let layout = main_layout(area);

        NavBar::new(&app.nav)
            .active(app.active_nav())
            .render(layout.nav, buf);

        render_content(app, layout.content, buf);

        match app.mode {
            Mode::Prompt => render_prompt(&app.prompt, layout.status, buf),
            Mode::Browse => {
                let address = app.router.address().to_string();
                StatusBar::new("NAV")
                    .hints(hints(app))
                    .message(app.message.as_deref())
                    .right(&address)
                    .render(layout.status, buf);
            }
        }
    }
}

fn hints<S: KeyValueStore>(app: &App<S>) -> Vec<KeyHint> {
    let mut hints = vec![
        KeyHint::new("1-9", "Go"),
        KeyHint::new("←/→", "Back/Fwd"),
    ];
    if app.current_view_is(TUTORIAL_VIEW) {
        hints.push(KeyHint::new("n/p", "Step"));
    } else if app.current_view_is(LEARNING_VIEW) {
        hints.push(KeyHint::new("Space", "Toggle"));
    }
    hints.push(KeyHint::new(":", "Jump"));
    hints.push(KeyHint::new("q", "Quit"));
    hints
}

/// Body of the active view plus any view-specific content.
pub fn content_lines<S: KeyValueStore>(app: &App<S>) -> Vec<Line<'static>> {
    let styles = MarkdownStyles::default();
    let mut lines = app
        .router
        .current_view()
        .map(|view| render_markdown(view.body(), &styles))
        .unwrap_or_default();

    let extra = if app.current_view_is(TUTORIAL_VIEW) {
        app.stepper
            .as_ref()
            .map(|stepper| stepper_lines(stepper, &styles))
    } else if app.current_view_is(LEARNING_VIEW) {
        Some(learning_lines(
            &app.progress,
            app.router.store(),
            app.learning_cursor,
        ))
    } else {
        None
    };

    if let Some(extra) = extra {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(extra);
    }
    lines
}

fn render_content<S: KeyValueStore>(app: &App<S>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(format!(" {} ", app.view_title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = wrap_lines(content_lines(app), usize::from(inner.width.saturating_sub(1)));
    Paragraph::new(lines)
        .style(Styles::default())
        .scroll((app.router.scroll(), 0))
        .render(inner, buf);
}

fn render_prompt(input: &str, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(" # ", Styles::key_hint()),
        Span::styled(input.to_string(), Styles::default()),
        Span::styled("_", Styles::highlight()),
        Span::styled("   Enter go  Esc cancel", Styles::dim()),
    ]);
    buf.set_style(area, Styles::status_bar());
    buf.set_line(area.x, area.y, &line, area.width);
}
