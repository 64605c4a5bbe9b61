//! UI module for the guide TUI.

pub mod layout;
pub mod theme;
pub mod widgets;
