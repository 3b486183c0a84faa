#![forbid(unsafe_code)]

//! Page identifiers and URL-fragment parsing.
//!
//! A page is addressed by the id of its view container, which doubles as the
//! URL fragment (`#projects`). The set of valid ids is open-ended: any
//! container the host reports is navigable.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of the landing page, used when the fragment is empty or unknown.
pub const HOME: &str = "home";

/// Identifier of one view container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
    /// Create a page id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The landing page id.
    #[must_use]
    pub fn home() -> Self {
        Self(HOME.to_owned())
    }

    /// Parse a URL fragment.
    ///
    /// Accepts both `"#about"` and `"about"`. Returns `None` for an empty
    /// fragment so callers can apply their own default.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_owned()))
        }
    }

    /// Borrow the raw identifier.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
