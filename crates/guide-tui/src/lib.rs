//! guide-tui: terminal front end for the Arduino guide
//!
//! This crate renders the guide's views in a terminal and feeds key presses
//! to the router as link clicks, history traversal and typed fragments.
//! It includes:
//! - Nav bar and status bar widgets
//! - Markdown rendering of view bodies
//! - The tutorial stepper and the learning path accordion

mod app;
mod event;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
mod ui;

use screens::Screen as ScreenTrait;

pub use app::{learning_rows, App, LearningRow, Mode};
pub use event::{Action, Event, EventHandler};
pub use guide_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use guide_engine::{Address, GuideConfig, KeyValueStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI until the user quits.
///
/// `start` is the address the guide is opened at; a missing fragment
/// resumes the last saved selection from `store`.
pub async fn run_tui<S: KeyValueStore>(
    config: &GuideConfig,
    store: S,
    start: Address,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, store, start)?;

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 4 Hz tick rate
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::guide::GuideScreen.render(app, area, frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_key(key),
            // Resize redraws on the next pass
            Some(Event::Tick | Event::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, create_test_terminal};

    #[test]
    fn test_version() {
        assert!(!tui_version().is_empty());
    }

    #[test]
    fn test_draws_into_terminal() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                let area = frame.area();
                screens::guide::GuideScreen.render(&app, area, frame.buffer_mut());
            })
            .unwrap();

        let screen = test_utils::buffer_to_string(terminal.backend().buffer());
        assert!(screen.starts_with("[1] Home"));
    }

    #[test]
    fn test_quit_key_sets_flag() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut app = create_test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
