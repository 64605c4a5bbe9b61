//! Document addresses and link classification.
//!
//! An [`Address`] is the page path plus an optional fragment, the part of the
//! location the router keeps in sync with the active view. [`Href`] sorts a
//! navigational link into the cases the router treats differently.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `scheme ":"` prefix as defined by RFC 3986.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid scheme regex"));

/// Location of the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub path: String,
    pub fragment: Option<String>,
}

impl Address {
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            fragment: fragment.map(str::to_string),
        }
    }

    /// Parse `path#fragment`. An empty fragment (`path#`) counts as none.
    pub fn parse(input: &str) -> Self {
        match input.split_once('#') {
            Some((path, fragment)) => Self {
                path: path.to_string(),
                fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
            },
            None => Self {
                path: input.to_string(),
                fragment: None,
            },
        }
    }

    /// Fragment as read by the page: empty when absent.
    pub fn fragment_or_empty(&self) -> &str {
        self.fragment.as_deref().unwrap_or("")
    }

    /// Same document, different fragment.
    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self {
            path: self.path.clone(),
            fragment: Some(fragment.to_string()),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{fragment}", self.path),
            None => f.write_str(&self.path),
        }
    }
}

/// A navigational link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Href {
    /// No href, or only whitespace.
    Empty,
    /// `#id`, always in the current document. The id may be empty.
    Fragment(String),
    /// `page#id`, in the current document only when the path matches.
    PageFragment { page: String, id: String },
    /// Relative page without a fragment.
    Document(String),
    /// Anything starting with a URI scheme (`https:`, `mailto:`, ...).
    External(String),
}

impl Href {
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        if href.is_empty() {
            return Self::Empty;
        }
        if SCHEME.is_match(href) {
            return Self::External(href.to_string());
        }
        if let Some(id) = href.strip_prefix('#') {
            return Self::Fragment(id.to_string());
        }
        match href.split_once('#') {
            Some((page, id)) => Self::PageFragment {
                page: page.to_string(),
                id: id.to_string(),
            },
            None => Self::Document(href.to_string()),
        }
    }

    /// View id this link activates without leaving `current`, if any.
    pub fn same_document_target(&self, current: &Address) -> Option<&str> {
        match self {
            Self::Fragment(id) => Some(id),
            Self::PageFragment { page, id } if current.path.ends_with(page.as_str()) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Fragment(id) => write!(f, "#{id}"),
            Self::PageFragment { page, id } => write!(f, "{page}#{id}"),
            Self::Document(page) => f.write_str(page),
            Self::External(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_with_fragment() {
        let addr = Address::parse("index.html#examples");
        assert_eq!(addr.path, "index.html");
        assert_eq!(addr.fragment.as_deref(), Some("examples"));
        assert_eq!(addr.to_string(), "index.html#examples");
    }

    #[test]
    fn test_parse_address_without_fragment() {
        let addr = Address::parse("index.html");
        assert_eq!(addr.fragment, None);
        assert_eq!(addr.fragment_or_empty(), "");

        let addr = Address::parse("index.html#");
        assert_eq!(addr.fragment, None);
    }

    #[test]
    fn test_href_fragment() {
        assert_eq!(Href::parse("#feedback"), Href::Fragment("feedback".into()));
        assert_eq!(Href::parse("#"), Href::Fragment(String::new()));
    }

    #[test]
    fn test_href_external_schemes() {
        for url in [
            "https://www.arduino.cc",
            "http://example.com/#top",
            "mailto:guidecommunity.contacts@gmail.com",
            "ftp://files.example.com",
        ] {
            assert_eq!(Href::parse(url), Href::External(url.into()), "{url}");
        }
    }

    #[test]
    fn test_href_page_fragment() {
        assert_eq!(
            Href::parse("index.html#tutorial"),
            Href::PageFragment {
                page: "index.html".into(),
                id: "tutorial".into()
            }
        );
        assert_eq!(Href::parse("Feedback.html"), Href::Document("Feedback.html".into()));
        assert_eq!(Href::parse("   "), Href::Empty);
    }

    #[test]
    fn test_same_document_target() {
        let current = Address::parse("/site/index.html#home");

        assert_eq!(
            Href::parse("#examples").same_document_target(&current),
            Some("examples")
        );
        assert_eq!(
            Href::parse("index.html#examples").same_document_target(&current),
            Some("examples")
        );
        assert_eq!(
            Href::parse("Feedback.html#form").same_document_target(&current),
            None
        );
        assert_eq!(
            Href::parse("https://arduino.cc/#x").same_document_target(&current),
            None
        );
    }

    #[test]
    fn test_href_display_roundtrips_input() {
        for href in ["#home", "index.html#tutorial", "Feedback.html", "https://arduino.cc"] {
            assert_eq!(Href::parse(href).to_string(), href);
        }
    }
}
