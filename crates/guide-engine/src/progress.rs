//! Learning-path progress.
//!
//! Each checklist item is stored under `lp_<label>` with the value `"1"`
//! while done; unchecking removes the key. A card is done when all of its
//! items are.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{KeyValueStore, StoreError};

/// Prefix of every progress key in the store.
pub const KEY_PREFIX: &str = "lp_";

const DONE: &str = "1";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("no card at index {0}")]
    NoSuchCard(usize),

    #[error("card {card} has no item at index {item}")]
    NoSuchItem { card: usize, item: usize },

    #[error("no item labelled \"{0}\"")]
    UnknownLabel(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One group of related topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub items: Vec<String>,
}

impl Card {
    pub fn new(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Store key for an item label.
pub fn item_key(label: &str) -> String {
    format!("{KEY_PREFIX}{}", label.trim())
}

/// Completion counts for a card or the whole path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub done: usize,
    pub total: usize,
}

impl Tally {
    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f32 / self.total as f32
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub cards: Vec<Card>,
}

impl LearningPath {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Stock Arduino learning path.
    pub fn builtin() -> Self {
        Self::new(vec![
            Card::new("Basics", &["What is Arduino", "Installing the IDE", "Uploading a sketch"]),
            Card::new("Digital I/O", &["Blink LED", "Button input", "Button + LED"]),
            Card::new("Analog", &["PWM fade", "Analog sensor", "Joystick"]),
            Card::new("Beyond", &["Serial monitor", "Timers with millis", "OLED display"]),
        ])
    }

    fn card(&self, card: usize) -> Result<&Card, ProgressError> {
        self.cards.get(card).ok_or(ProgressError::NoSuchCard(card))
    }

    fn item(&self, card: usize, item: usize) -> Result<&str, ProgressError> {
        self.card(card)?
            .items
            .get(item)
            .map(String::as_str)
            .ok_or(ProgressError::NoSuchItem { card, item })
    }

    /// Locate an item by its label, ignoring surrounding whitespace.
    pub fn find(&self, label: &str) -> Option<(usize, usize)> {
        let label = label.trim();
        self.cards.iter().enumerate().find_map(|(c, card)| {
            card.items
                .iter()
                .position(|i| i.trim() == label)
                .map(|i| (c, i))
        })
    }
}

/// Checklist state over a [`LearningPath`], plus which card is expanded.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    path: LearningPath,
    expanded: Option<usize>,
}

impl ProgressTracker {
    pub fn new(path: LearningPath) -> Self {
        Self {
            path,
            expanded: None,
        }
    }

    pub fn path(&self) -> &LearningPath {
        &self.path
    }

    pub fn is_done<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        label: &str,
    ) -> Result<bool, ProgressError> {
        Ok(store.get(&item_key(label))?.as_deref() == Some(DONE))
    }

    /// Flip an item. Returns the new state.
    pub fn toggle<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        card: usize,
        item: usize,
    ) -> Result<bool, ProgressError> {
        let label = self.path.item(card, item)?;
        let key = item_key(label);
        let done = self.is_done(&*store, label)?;

        if done {
            store.remove(&key)?;
        } else {
            store.set(&key, DONE)?;
        }
        Ok(!done)
    }

    /// Flip the item with this label.
    pub fn toggle_label<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        label: &str,
    ) -> Result<bool, ProgressError> {
        let (card, item) = self
            .path
            .find(label)
            .ok_or_else(|| ProgressError::UnknownLabel(label.trim().to_string()))?;
        self.toggle(store, card, item)
    }

    pub fn card_tally<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        card: usize,
    ) -> Result<Tally, ProgressError> {
        let card = self.path.card(card)?;
        let mut done = 0;
        for label in &card.items {
            if self.is_done(store, label)? {
                done += 1;
            }
        }
        Ok(Tally {
            done,
            total: card.items.len(),
        })
    }

    /// A card with no items counts as done.
    pub fn card_done<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        card: usize,
    ) -> Result<bool, ProgressError> {
        Ok(self.card_tally(store, card)?.is_complete())
    }

    /// Totals over every card.
    pub fn summary<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Tally, ProgressError> {
        let mut total = Tally { done: 0, total: 0 };
        for card in 0..self.path.cards.len() {
            let tally = self.card_tally(store, card)?;
            total.done += tally.done;
            total.total += tally.total;
        }
        Ok(total)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Expand `card`, collapsing any other; collapse it if already open.
    pub fn toggle_expanded(&mut self, card: usize) -> Result<(), ProgressError> {
        self.path.card(card)?;
        self.expanded = if self.expanded == Some(card) {
            None
        } else {
            Some(card)
        };
        Ok(())
    }
}
