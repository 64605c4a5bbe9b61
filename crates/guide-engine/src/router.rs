//! View router.
//!
//! Single source of truth for which view is on screen. Every change goes
//! through [`Router::activate`]; the other entry points (link clicks,
//! back/forward, startup) decide the target and whether the change is
//! durable, then call it.
//!
//! Unknown ids are not errors: they resolve to the fallback view. Storage
//! failures are logged and otherwise ignored, so no operation here fails.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::address::{Address, Href};
use crate::history::{History, Traversal};
use crate::store::KeyValueStore;
use crate::view::{View, ViewId, ViewRegistry};

/// Default key of the persisted selection.
pub const DEFAULT_STORAGE_KEY: &str = "arduino-last-page";

/// What a single activation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activation {
    /// Id that was asked for.
    pub requested: String,
    /// View that is now active.
    pub resolved: ViewId,
    /// Whether the fallback view was substituted.
    pub fell_back: bool,
    /// Whether `resolved` reached the store.
    pub persisted: bool,
}

/// Result of clicking a navigational link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Handled in-page: view activated and a history entry pushed.
    Intercepted(Activation),
    /// Left to default handling by the host.
    PassThrough(Href),
}

/// One host event, mapped to one router call by [`Router::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Fresh document load at the given address.
    Load(Address),
    /// Click on a link with this href.
    LinkClick(String),
    /// Home button.
    Home,
    /// Browser back button.
    Back,
    /// Browser forward button.
    Forward,
    /// Fragment typed into the address bar.
    EnterFragment(String),
}

/// Result of [`Router::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Activated(Activation),
    Link(LinkOutcome),
    /// History traversal or fragment entry that changed nothing on screen.
    Unchanged,
}

impl Dispatched {
    pub fn activation(&self) -> Option<&Activation> {
        match self {
            Self::Activated(a) | Self::Link(LinkOutcome::Intercepted(a)) => Some(a),
            Self::Link(LinkOutcome::PassThrough(_)) | Self::Unchanged => None,
        }
    }
}

pub struct Router<S> {
    views: ViewRegistry,
    current: ViewId,
    history: History,
    scroll: u16,
    storage_key: String,
    home: ViewId,
    store: S,
}

impl<S: KeyValueStore> Router<S> {
    /// Create a router over `views`, with no view active yet. Call
    /// [`Router::load`] to run startup resolution.
    pub fn new(views: ViewRegistry, store: S, document: Address) -> Self {
        Self {
            views,
            current: ViewId::fallback(),
            history: History::new(document),
            scroll: 0,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            home: ViewId::new(ViewId::HOME),
            store,
        }
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = ViewId::new(home);
        self
    }

    /// Show the view `id`, or the fallback view when there is none.
    ///
    /// When `persist` is set the resolved id is written to the store.
    /// Scroll resets to the top on every call, including re-activation of
    /// the view already on screen.
    pub fn activate(&mut self, id: &str, persist: bool) -> Activation {
        self.views.deactivate_all();

        let fell_back = !self.views.set_active(id);
        let resolved = if fell_back {
            warn!(requested = %id, "Unknown view, showing fallback");
            self.views.set_active(ViewId::FALLBACK);
            ViewId::fallback()
        } else {
            ViewId::new(id)
        };

        let persisted = persist && self.persist_selection(resolved.as_str());

        self.current = resolved.clone();
        self.scroll = 0;

        debug!(requested = %id, resolved = %resolved, persist, persisted, "Activated view");
        Activation {
            requested: id.to_string(),
            resolved,
            fell_back,
            persisted,
        }
    }

    /// Activate the home view and push a history entry for it.
    pub fn navigate_home(&mut self) -> Activation {
        let home = self.home.clone();
        let activation = self.activate(home.as_str(), true);
        self.push_fragment(home.as_str());
        activation
    }

    /// Handle a click on a navigational link.
    ///
    /// Same-document targets are intercepted: the view is activated durably
    /// and a history entry for the fragment is pushed. Everything else is
    /// passed through untouched.
    pub fn click(&mut self, href: &str) -> LinkOutcome {
        let href = Href::parse(href);
        let Some(id) = href
            .same_document_target(self.history.current())
            .map(str::to_string)
        else {
            debug!(href = %href, "Link passed through");
            return LinkOutcome::PassThrough(href);
        };

        let activation = self.activate(&id, true);
        self.push_fragment(&id);
        LinkOutcome::Intercepted(activation)
    }

    /// Browser back button.
    pub fn back(&mut self) -> Option<Activation> {
        let traversal = self.history.back()?;
        self.on_traversal(&traversal)
    }

    /// Browser forward button.
    pub fn forward(&mut self) -> Option<Activation> {
        let traversal = self.history.forward()?;
        self.on_traversal(&traversal)
    }

    /// A fragment typed into the address bar. Re-entering the current
    /// fragment changes nothing; any other pushes an entry and shows the view.
    pub fn enter_fragment(&mut self, id: &str) -> Option<Activation> {
        let from = self.history.current().clone();
        if from.fragment_or_empty() == id {
            return None;
        }
        let to = from.with_fragment(id);
        self.history.push(to.clone());
        self.on_traversal(&Traversal { from, to })
    }

    /// Startup resolution for a fresh load of `address`.
    ///
    /// A fragment in the address wins and is activated durably. Without
    /// one, the persisted selection (or the home view) is activated and the
    /// current history entry is rewritten to carry it.
    pub fn load(&mut self, address: Address) -> Activation {
        self.history.replace(address.clone());

        if let Some(fragment) = address.fragment.as_deref().filter(|f| !f.is_empty()) {
            info!(fragment, "Restoring view from address");
            return self.activate(fragment, true);
        }

        let last = self
            .stored_selection()
            .unwrap_or_else(|| self.home.to_string());
        info!(view = %last, "Restoring last view");

        let activation = self.activate(&last, true);
        self.history.replace(address.with_fragment(&last));
        activation
    }

    /// Route one host event to the matching operation.
    pub fn dispatch(&mut self, event: NavigationEvent) -> Dispatched {
        match event {
            NavigationEvent::Load(address) => Dispatched::Activated(self.load(address)),
            NavigationEvent::LinkClick(href) => Dispatched::Link(self.click(&href)),
            NavigationEvent::Home => Dispatched::Activated(self.navigate_home()),
            NavigationEvent::Back => self.back().map_or(Dispatched::Unchanged, Dispatched::Activated),
            NavigationEvent::Forward => self
                .forward()
                .map_or(Dispatched::Unchanged, Dispatched::Activated),
            NavigationEvent::EnterFragment(id) => self
                .enter_fragment(&id)
                .map_or(Dispatched::Unchanged, Dispatched::Activated),
        }
    }

    pub fn current(&self) -> &ViewId {
        &self.current
    }

    /// The view currently on screen.
    pub fn current_view(&self) -> Option<&View> {
        self.views.get(self.current.as_str())
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn address(&self) -> &Address {
        self.history.current()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta);
        self.scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX);
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Persisted selection, if readable and set.
    pub fn stored_selection(&self) -> Option<String> {
        match self.store.get(&self.storage_key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(error = %e, "Storage unavailable, ignoring saved view");
                None
            }
        }
    }

    /// Forget the persisted selection.
    pub fn clear_selection(&mut self) {
        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!(error = %e, "Could not clear saved view");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Back/forward rule: replaying history never persists.
    fn on_traversal(&mut self, traversal: &Traversal) -> Option<Activation> {
        if !traversal.fragment_changed() {
            return None;
        }
        Some(self.activate(traversal.to.fragment_or_empty(), false))
    }

    fn push_fragment(&mut self, id: &str) {
        let next = self.history.current().with_fragment(id);
        self.history.push(next);
    }

    fn persist_selection(&mut self, id: &str) -> bool {
        match self.store.set(&self.storage_key, id) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, view = %id, "Storage unavailable, view not saved");
                false
            }
        }
    }
}
