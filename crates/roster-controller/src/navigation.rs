//! Navigation state
//!
//! The URL is the source of truth for the committed query. The controller
//! reads it on mount and writes it on every commit with replace semantics,
//! so typing never grows the back/forward history.

use crate::error::NavigationError;
use url::Url;

/// Access to the navigable location
pub trait Navigator {
    /// Current URL
    fn current(&self) -> &Url;

    /// Swap the current history entry for `url`
    fn replace(&mut self, url: Url);
}

/// Read `param` from the query string; absent means empty
#[must_use]
pub fn query_from_url(url: &Url, param: &str) -> String {
    url.query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// Copy of `url` whose `param` carries `query`
///
/// An empty query removes the parameter. Other parameters are kept.
#[must_use]
pub fn url_with_query(url: &Url, param: &str, query: &str) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut next = url.clone();
    next.set_query(None);
    if !kept.is_empty() || !query.is_empty() {
        let mut pairs = next.query_pairs_mut();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if !query.is_empty() {
            pairs.append_pair(param, query);
        }
    }
    next
}

/// In-memory browser-style history
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    index: usize,
    replaces: usize,
    pushes: usize,
}

impl MemoryHistory {
    /// History with a single entry
    #[inline]
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            entries: vec![url],
            index: 0,
            replaces: 0,
            pushes: 0,
        }
    }

    /// History starting at the parsed `url`
    ///
    /// # Errors
    /// `NavigationError::InvalidUrl` if `url` does not parse
    pub fn parse(url: &str) -> Result<Self, NavigationError> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Add a new entry after the current one, dropping forward entries
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index += 1;
        self.pushes += 1;
    }

    /// Step back; false if already at the oldest entry
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward; false if already at the newest entry
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether history is empty (never true)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of replace writes so far
    #[inline]
    #[must_use]
    pub fn replace_count(&self) -> usize {
        self.replaces
    }

    /// Number of push writes so far
    #[inline]
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.pushes
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    fn replace(&mut self, url: Url) {
        tracing::trace!(%url, "history replace");
        self.entries[self.index] = url;
        self.replaces += 1;
    }
}
