//! Theme and styling definitions for the guide TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(24, 32, 36);
    pub const FG: Color = Color::Rgb(222, 228, 230);
    pub const DIM: Color = Color::Rgb(136, 150, 156);

    // Arduino teal
    pub const ACCENT: Color = Color::Rgb(0, 151, 157);
    pub const ACCENT_LIGHT: Color = Color::Rgb(98, 174, 178);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(38, 52, 58);
    pub const STATUS_KEY_BG: Color = Color::Rgb(0, 100, 106);

    // Code blocks
    pub const CODE: Color = Color::Rgb(232, 196, 120);
    pub const SURFACE: Color = Color::Rgb(34, 44, 50);

    // Status colors
    pub const SUCCESS: Color = Color::Rgb(130, 220, 130);
    pub const WARNING: Color = Color::Rgb(240, 200, 100);

    // Border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(0, 151, 157);
}

/// Checklist and accordion symbols (ASCII-safe).
pub struct Symbols;

impl Symbols {
    pub const DONE: &'static str = "[x]";
    pub const TODO: &'static str = "[ ]";
    pub const EXPANDED: &'static str = "v";
    pub const COLLAPSED: &'static str = ">";
    pub const CURSOR: &'static str = "> ";
    pub const EXTERNAL: &'static str = " ->";
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted/selected item.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Palette::SUCCESS).bg(Palette::BG)
    }

    pub fn warning() -> Style {
        Style::default().fg(Palette::WARNING).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

/// Progress bar rendering.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn progress_bar(progress: f32, width: usize) -> String {
    let filled = ((progress * width as f32).round() as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
