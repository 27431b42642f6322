//! What the rendering layer sees

use roster_core::{SearchErrorKind, SearchResult};

/// Snapshot of controller state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchView<'a> {
    /// Text the input shows, possibly ahead of the committed query
    pub display_value: &'a str,
    /// Latest applied result
    pub result: Option<&'a SearchResult>,
    /// Showing an older result while a newer query is in flight
    pub is_stale: bool,
    /// No result yet and a fetch is in flight
    pub is_loading: bool,
    /// Failure of the most recent fetch, cleared by the next commit
    pub error: Option<SearchErrorKind>,
}

impl SearchView<'_> {
    /// Whether the displayed result answers the committed query
    #[inline]
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.result.is_some() && !self.is_stale && self.error.is_none()
    }

    /// "Showing N of M results" counts, if a result is present
    #[must_use]
    pub fn counts(&self) -> Option<(usize, usize)> {
        self.result.map(|r| (r.items.len(), r.match_count))
    }
}
