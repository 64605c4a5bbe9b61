//! Markdown styling configuration.

use ratatui::style::{Modifier, Style};

use crate::ui::theme::Palette;

/// Styles for rendering markdown elements.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    pub h1: Style,
    pub h2: Style,
    /// H3 and below.
    pub h3: Style,
    pub code: Style,
    pub code_block: Style,
    pub emphasis: Style,
    pub strong: Style,
    pub list_marker: Style,
    pub link: Style,
    pub text: Style,
}

impl MarkdownStyles {
    pub fn from_palette() -> Self {
        Self {
            h1: Style::default()
                .fg(Palette::ACCENT)
                .add_modifier(Modifier::BOLD),
            h2: Style::default().fg(Palette::FG).add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Palette::ACCENT_LIGHT)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Palette::CODE).bg(Palette::SURFACE),
            code_block: Style::default().fg(Palette::CODE).bg(Palette::SURFACE),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(Palette::DIM),
            link: Style::default()
                .fg(Palette::ACCENT_LIGHT)
                .add_modifier(Modifier::UNDERLINED),
            text: Style::default().fg(Palette::FG),
        }
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::from_palette()
    }
}
