//! Reusable widgets for the guide TUI.

pub mod nav_bar;
pub mod status_bar;

pub use nav_bar::NavBar;
pub use status_bar::{KeyHint, StatusBar};
