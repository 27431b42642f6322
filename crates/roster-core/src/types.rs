//! Core types for Roster
//!
//! Defines the records exchanged between the search service and its callers:
//! - Person records and their identifiers
//! - Search results (one capped page plus the total match count)
//! - Request epochs used to correlate fetches with commits

use serde::{Deserialize, Serialize};

/// Stable, 1-based person identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl PersonId {
    /// Get numeric value
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person in the directory
///
/// Generated once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,
    /// Display name, the only searchable field
    pub full_name: String,
    /// Contact address
    pub email: String,
    /// Department or job role
    pub role: String,
}

impl Person {
    /// Create new person
    #[inline]
    #[must_use]
    pub fn new(
        id: u32,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonId(id),
            full_name: full_name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// One page of search results
///
/// Each response fully replaces the previous one; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Matches sorted by full name, at most `page_size` of them
    pub items: Vec<Person>,
    /// Total matches before capping
    pub match_count: usize,
    /// Page size the service was configured with
    pub page_size: usize,
}

impl SearchResult {
    /// Create a result page
    #[inline]
    #[must_use]
    pub fn new(items: Vec<Person>, match_count: usize, page_size: usize) -> Self {
        Self {
            items,
            match_count,
            page_size,
        }
    }

    /// Result with no matches
    #[inline]
    #[must_use]
    pub fn empty(page_size: usize) -> Self {
        Self::new(Vec::new(), 0, page_size)
    }

    /// Whether more matches exist than were returned
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.match_count > self.items.len()
    }

    /// Full names of the returned items, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|p| p.full_name.as_str())
    }
}

/// Monotonic request counter tagging each committed query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(pub u64);

impl Epoch {
    /// Epoch before any commit
    pub const ZERO: Epoch = Epoch(0);

    /// The following epoch
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get numeric value
    #[inline]
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
