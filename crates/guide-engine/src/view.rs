//! View declarations and the keyed view registry.
//!
//! A view is one of the mutually exclusive content sections the guide can
//! display. The set of views is fixed when the registry is built; afterwards
//! only the active flag changes, and only through the router.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a view, as used in address fragments and link targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    /// Id of the view shown when a requested id has no match.
    pub const FALLBACK: &'static str = "notfound";

    /// Id of the landing view.
    pub const HOME: &'static str = "home";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == Self::FALLBACK
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static declaration of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub id: ViewId,
    pub title: String,
    /// Markdown content rendered when the view is active.
    #[serde(default)]
    pub body: String,
}

impl ViewSpec {
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: ViewId::new(id),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// A declared view together with its activation state.
#[derive(Debug, Clone)]
pub struct View {
    spec: ViewSpec,
    is_active: bool,
}

impl View {
    pub fn id(&self) -> &ViewId {
        &self.spec.id
    }

    pub fn title(&self) -> &str {
        &self.spec.title
    }

    pub fn body(&self) -> &str {
        &self.spec.body
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("view id cannot be empty")]
    EmptyId,

    #[error("duplicate view id: {0}")]
    Duplicate(String),

    #[error("no fallback view declared (expected id \"{}\")", ViewId::FALLBACK)]
    MissingFallback,
}

/// Keyed lookup from id to view, built once from the declared set.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<View>,
    index: HashMap<ViewId, usize>,
}

impl ViewRegistry {
    /// Build a registry from declarations, keeping declaration order.
    pub fn new(specs: Vec<ViewSpec>) -> Result<Self, ViewError> {
        let mut views = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        for spec in specs {
            if spec.id.as_str().is_empty() {
                return Err(ViewError::EmptyId);
            }
            if index.contains_key(&spec.id) {
                return Err(ViewError::Duplicate(spec.id.to_string()));
            }
            index.insert(spec.id.clone(), views.len());
            views.push(View {
                spec,
                is_active: false,
            });
        }

        if !index.contains_key(&ViewId::fallback()) {
            return Err(ViewError::MissingFallback);
        }

        Ok(Self { views, index })
    }

    /// The stock set of views shipped with the guide.
    pub fn builtin() -> Self {
        Self::new(builtin_specs()).expect("builtin views are well-formed")
    }

    pub fn get(&self, id: &str) -> Option<&View> {
        self.index.get(id).map(|&i| &self.views[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Views in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Position of a view in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Views currently flagged active.
    pub fn active(&self) -> impl Iterator<Item = &View> {
        self.views.iter().filter(|v| v.is_active)
    }

    pub(crate) fn deactivate_all(&mut self) {
        for view in &mut self.views {
            view.is_active = false;
        }
    }

    /// Flag a view active. Returns false when no such view exists.
    pub(crate) fn set_active(&mut self, id: &str) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.views[i].is_active = true;
                true
            }
            None => false,
        }
    }
}

// HashMap<ViewId, _> lookups by &str.
impl std::borrow::Borrow<str> for ViewId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Declarations for the stock guide views.
pub fn builtin_specs() -> Vec<ViewSpec> {
    vec![
        ViewSpec::new(
            "home",
            "Home",
            "# Arduino Guide\n\n\
             A hands-on introduction to the Arduino platform.\n\n\
             - **Examples** collects short sketches you can copy into the IDE.\n\
             - **Tutorial** walks through a first circuit step by step.\n\
             - **Learning Path** tracks what you have already covered.\n\n\
             Pick a section from the navigation bar to get started.",
        ),
        ViewSpec::new(
            "examples",
            "Examples",
            "# Examples\n\n\
             Short, commented sketches covering the core Arduino functions.\n\n\
             - Blink LED: `pinMode`, `digitalWrite`, `delay`\n\
             - Button input: `digitalRead`\n\
             - PWM fade: `analogWrite`\n\
             - Analog sensor: `analogRead`\n\
             - Serial monitor: `Serial.begin`, `Serial.println`\n\
             - Timers: `millis` for non-blocking code",
        ),
        ViewSpec::new(
            "tutorial",
            "Tutorial",
            "# Tutorial\n\nFollow the steps below to build your first circuit.",
        ),
        ViewSpec::new(
            "learning",
            "Learning Path",
            "# Learning Path\n\nMark topics as done while you work through them.",
        ),
        ViewSpec::new(
            "feedback",
            "Feedback",
            "# Feedback\n\n\
             Found a mistake or have an idea for a new example? \
             Write to guidecommunity.contacts@gmail.com.",
        ),
        ViewSpec::new(
            ViewId::FALLBACK,
            "Not Found",
            "# Page not found\n\n\
             The section you asked for does not exist. \
             Press `H` to return home.",
        ),
    ]
}
