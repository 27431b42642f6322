//! Locale-aware name ordering
//!
//! Names compare under root-locale collation at secondary strength, so case
//! is ignored and accented letters sort next to their base letter
//! (`Émile` before `Eve`). Names equal under collation fall back to
//! code-point order, keeping the ordering total.

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use std::fmt;

/// Total order over full names
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    /// Root-locale collator; falls back to lowercase comparison if the
    /// collation data cannot be loaded
    #[must_use]
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "collation data unavailable, sorting by lowercase");
                None
            }
        };
        Self { collator }
    }

    /// Compare two full names
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("collating", &self.collator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&'static str]) -> Vec<&'static str> {
        let collator = NameCollator::new();
        let mut names = names.to_vec();
        names.sort_by(|a, b| collator.compare(a, b));
        names
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Frank Adams", "Émile Zola", "Eve Baker"]),
            vec!["Émile Zola", "Eve Baker", "Frank Adams"]
        );
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(
            sorted(&["bob Brown", "Alice Johnson", "Bob Adams"]),
            vec!["Alice Johnson", "Bob Adams", "bob Brown"]
        );
    }

    #[test]
    fn accent_breaks_tie_after_base_letter() {
        assert_eq!(sorted(&["Zoë Park", "Zoe Park"]), vec!["Zoe Park", "Zoë Park"]);
    }

    #[test]
    fn case_only_difference_is_still_ordered() {
        let collator = NameCollator::new();
        assert_ne!(collator.compare("ann lee", "Ann Lee"), Ordering::Equal);
        assert_eq!(collator.compare("Ann Lee", "Ann Lee"), Ordering::Equal);
    }
}
