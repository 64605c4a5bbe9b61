//! Text rendering utilities.
//!
//! - [`render_markdown`] - Render a view body to styled ratatui Lines
//! - [`MarkdownStyles`] - Style configuration for markdown elements
//! - [`wrap_lines`] - Width-aware wrapping that keeps span styles
//! - [`visual_width`] - Terminal cell width of a string

mod markdown;
mod styles;
mod width;
mod wrap;

pub use markdown::render_markdown;
pub use styles::MarkdownStyles;
pub use width::visual_width;
pub use wrap::wrap_lines;
