//! Session history for a single document.
//!
//! Mirrors the browser's joint session history: a list of entries and a
//! cursor. Pushing drops every entry ahead of the cursor.

use crate::address::Address;

/// A move between two history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub from: Address,
    pub to: Address,
}

impl Traversal {
    /// Whether the move changes the fragment, which is what triggers a
    /// hash change in the page.
    pub fn fragment_changed(&self) -> bool {
        self.from.fragment != self.to.fragment
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Address>,
    index: usize,
}

impl History {
    pub fn new(initial: Address) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Address {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Address] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn push(&mut self, address: Address) {
        self.entries.truncate(self.index + 1);
        self.entries.push(address);
        self.index = self.entries.len() - 1;
    }

    pub fn replace(&mut self, address: Address) {
        self.entries[self.index] = address;
    }

    pub fn back(&mut self) -> Option<Traversal> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.current().clone();
        self.index -= 1;
        Some(Traversal {
            from,
            to: self.current().clone(),
        })
    }

    pub fn forward(&mut self) -> Option<Traversal> {
        if !self.can_go_forward() {
            return None;
        }
        let from = self.current().clone();
        self.index += 1;
        Some(Traversal {
            from,
            to: self.current().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::parse(s)
    }

    #[test]
    fn test_push_moves_cursor() {
        let mut history = History::new(addr("index.html#home"));
        history.push(addr("index.html#examples"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 1);
        assert_eq!(history.current(), &addr("index.html#examples"));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new(addr("index.html#home"));
        history.push(addr("index.html#a"));
        history.push(addr("index.html#b"));
        history.back();
        history.back();
        history.push(addr("index.html#c"));

        let fragments: Vec<&str> = history
            .entries()
            .iter()
            .map(Address::fragment_or_empty)
            .collect();
        assert_eq!(fragments, vec!["home", "c"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = History::new(addr("index.html"));
        history.replace(addr("index.html#examples"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().fragment_or_empty(), "examples");
    }

    #[test]
    fn test_back_and_forward_at_edges() {
        let mut history = History::new(addr("index.html#home"));
        assert!(history.back().is_none());
        assert!(history.forward().is_none());

        history.push(addr("index.html#feedback"));
        let back = history.back().unwrap();
        assert_eq!(back.from, addr("index.html#feedback"));
        assert_eq!(back.to, addr("index.html#home"));
        assert!(back.fragment_changed());

        let forward = history.forward().unwrap();
        assert_eq!(forward.to, addr("index.html#feedback"));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_same_fragment_traversal_is_not_a_change() {
        let mut history = History::new(addr("index.html#home"));
        history.push(addr("index.html#home"));
        let traversal = history.back().unwrap();
        assert!(!traversal.fragment_changed());
    }
}
