//! Application state and update logic for the guide TUI.
//!
//! Every navigation goes through the router: nav entries are links, the
//! home key is the home button, Left/Right are the browser's back and
//! forward buttons and `:` is the address bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guide_engine::{
    Activation, Address, ConfigError, GuideConfig, KeyValueStore, LinkOutcome, ProgressTracker,
    Router, Stepper, TutorialCatalog, ViewId,
};

use crate::event::Action;
use crate::ui::widgets::nav_bar::NavLink;

/// View ids with dedicated content below their body.
pub const TUTORIAL_VIEW: &str = "tutorial";
pub const LEARNING_VIEW: &str = "learning";

const EXTERNAL_LINK: (&str, &str) = ("arduino.cc", "https://www.arduino.cc");

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    /// Typing a fragment into the address prompt.
    Prompt,
}

/// One selectable row of the learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningRow {
    Card(usize),
    Item { card: usize, item: usize },
}

/// Rows in display order: every card, with the items of the expanded one.
pub fn learning_rows(tracker: &ProgressTracker) -> Vec<LearningRow> {
    let mut rows = Vec::new();
    for (c, card) in tracker.path().cards.iter().enumerate() {
        rows.push(LearningRow::Card(c));
        if tracker.expanded() == Some(c) {
            rows.extend((0..card.items.len()).map(|i| LearningRow::Item { card: c, item: i }));
        }
    }
    rows
}

pub struct App<S> {
    pub router: Router<S>,
    pub progress: ProgressTracker,
    pub stepper: Option<Stepper>,
    pub nav: Vec<NavLink>,
    /// Nav entry last selected with Tab/Shift-Tab.
    pub nav_cursor: usize,
    /// Selected row of the learning path.
    pub learning_cursor: usize,
    pub mode: Mode,
    pub prompt: String,
    /// One-shot message shown in the status bar.
    pub message: Option<String>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Build the app and run startup resolution for `start`.
    pub fn new(config: &GuideConfig, store: S, start: Address) -> Result<Self, ConfigError> {
        let mut router = config.router(store)?;

        let mut nav: Vec<NavLink> = router
            .views()
            .iter()
            .filter(|v| !v.id().is_fallback())
            .map(|v| NavLink {
                label: v.title().to_string(),
                href: format!("#{}", v.id()),
                external: false,
            })
            .collect();
        nav.push(NavLink {
            label: EXTERNAL_LINK.0.to_string(),
            href: EXTERNAL_LINK.1.to_string(),
            external: true,
        });

        let (stepper, message) =
            match Stepper::load(&TutorialCatalog::builtin(), &config.tutorial) {
                Ok(stepper) => (Some(stepper), None),
                Err(e) => (None, Some(e.to_string())),
            };

        router.load(start);

        let mut app = Self {
            router,
            progress: ProgressTracker::new(config.learning_path.clone()),
            stepper,
            nav,
            nav_cursor: 0,
            learning_cursor: 0,
            mode: Mode::Browse,
            prompt: String::new(),
            message,
            should_quit: false,
        };
        app.sync_nav_cursor();
        Ok(app)
    }

    /// Index of the nav link pointing at the active view.
    pub fn active_nav(&self) -> Option<usize> {
        let href = format!("#{}", self.router.current());
        self.nav.iter().position(|l| l.href == href)
    }

    pub fn current_view_is(&self, id: &str) -> bool {
        self.router.current().as_str() == id
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Nav(index) => self.click_nav(index),
            Action::NextNav => {
                let index = (self.nav_cursor + 1) % self.nav.len();
                self.click_nav(index);
            }
            Action::PrevNav => {
                let index = (self.nav_cursor + self.nav.len() - 1) % self.nav.len();
                self.click_nav(index);
            }
            Action::Home => {
                let activation = self.router.navigate_home();
                self.after_activation(&activation);
            }
            Action::Back => self.traverse(true),
            Action::Forward => self.traverse(false),
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::Select => self.select(),
            Action::NextStep => self.step(true),
            Action::PrevStep => self.step(false),
            Action::Prompt => {
                self.mode = Mode::Prompt;
                self.prompt.clear();
            }
            Action::None => {}
        }
    }

    /// Key handling while the address prompt is open.
    pub fn handle_prompt_key(&mut self, key: KeyEvent) {
        if crate::event::key_to_action(key) == Action::Quit
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.prompt.clear();
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
                let input = std::mem::take(&mut self.prompt);
                let fragment = input.trim().trim_start_matches('#');
                match self.router.enter_fragment(fragment) {
                    Some(activation) => self.after_activation(&activation),
                    None => self.message = Some(format!("Already at #{fragment}")),
                }
            }
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Char(c) => self.prompt.push(c),
            _ => {}
        }
    }

    /// Route a key to the prompt or to an action, depending on mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Prompt => self.handle_prompt_key(key),
            Mode::Browse => self.handle_action(crate::event::key_to_action(key)),
        }
    }

    fn click_nav(&mut self, index: usize) {
        let Some(link) = self.nav.get(index) else {
            return;
        };
        let href = link.href.clone();
        self.nav_cursor = index;

        match self.router.click(&href) {
            LinkOutcome::Intercepted(activation) => self.after_activation(&activation),
            LinkOutcome::PassThrough(href) => {
                self.message = Some(format!("Opens outside the guide: {href}"));
            }
        }
    }

    fn traverse(&mut self, back: bool) {
        let (possible, label) = if back {
            (self.router.history().can_go_back(), "back")
        } else {
            (self.router.history().can_go_forward(), "forward")
        };
        if !possible {
            self.message = Some(format!("Nothing to go {label} to"));
            return;
        }

        let activation = if back {
            self.router.back()
        } else {
            self.router.forward()
        };
        match activation {
            Some(activation) => self.after_activation(&activation),
            // Moved between entries with the same fragment
            None => self.message = None,
        }
    }

    fn after_activation(&mut self, activation: &Activation) {
        self.message = activation
            .fell_back
            .then(|| format!("No section named \"{}\"", activation.requested));
        self.learning_cursor = 0;
        self.sync_nav_cursor();
    }

    fn sync_nav_cursor(&mut self) {
        if let Some(index) = self.active_nav() {
            self.nav_cursor = index;
        }
    }

    fn move_up(&mut self) {
        if self.current_view_is(LEARNING_VIEW) {
            self.learning_cursor = self.learning_cursor.saturating_sub(1);
        } else {
            self.router.scroll_by(-1);
        }
    }

    fn move_down(&mut self) {
        if self.current_view_is(LEARNING_VIEW) {
            let rows = learning_rows(&self.progress).len();
            if self.learning_cursor + 1 < rows {
                self.learning_cursor += 1;
            }
        } else {
            self.router.scroll_by(1);
        }
    }

    fn select(&mut self) {
        if !self.current_view_is(LEARNING_VIEW) {
            return;
        }
        let Some(row) = learning_rows(&self.progress).get(self.learning_cursor).copied() else {
            return;
        };

        match row {
            LearningRow::Card(card) => {
                if let Err(e) = self.progress.toggle_expanded(card) {
                    self.message = Some(e.to_string());
                    return;
                }
                // Collapsing a card above shifts the rows
                self.learning_cursor = learning_rows(&self.progress)
                    .iter()
                    .position(|r| *r == LearningRow::Card(card))
                    .unwrap_or(0);
            }
            LearningRow::Item { card, item } => {
                let result = self.progress.toggle(self.router.store_mut(), card, item);
                self.message = match result {
                    Ok(_) => None,
                    Err(e) => Some(format!("Progress not saved: {e}")),
                };
            }
        }
    }

    fn step(&mut self, forward: bool) {
        if !self.current_view_is(TUTORIAL_VIEW) {
            return;
        }
        if let Some(stepper) = self.stepper.as_mut() {
            if forward {
                stepper.next_step();
            } else {
                stepper.prev_step();
            }
        }
    }

    /// Title of the view on screen.
    pub fn view_title(&self) -> &str {
        self.router
            .current_view()
            .map_or(ViewId::FALLBACK, |v| v.title())
    }
}
