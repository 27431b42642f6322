//! Latency-simulating search over the directory
//!
//! The delay is part of the contract: it gives callers overlapping requests
//! whose completion order differs from their issue order.

use crate::directory::Directory;
use async_trait::async_trait;
use roster_core::{Epoch, Latency, SearchBackend, SearchError, SearchResult, ServiceConfig};
use std::sync::Arc;

/// Deterministic people search with an artificial delay
#[derive(Debug, Clone)]
pub struct MockSearchService {
    directory: Arc<Directory>,
    page_size: usize,
    latency: Latency,
}

impl MockSearchService {
    /// Create service over `directory` with the default latency
    #[inline]
    #[must_use]
    pub fn new(directory: Arc<Directory>, page_size: usize) -> Self {
        Self {
            directory,
            page_size,
            latency: Latency::default(),
        }
    }

    /// Build the directory and service described by `config`
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let directory = if config.classic {
            Directory::classic()
        } else {
            Directory::generate(config.people, config.seed)
        };
        tracing::info!(
            people = directory.len(),
            page_size = config.page_size,
            latency = ?config.latency,
            "search service ready"
        );
        Self::new(Arc::new(directory), config.page_size).with_latency(config.latency)
    }

    /// With latency policy
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Backing directory
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    /// Items per page
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Latency policy
    #[inline]
    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Run `query` without delay
    ///
    /// Matches are case-insensitive substrings of the full name; the empty
    /// query matches everyone. `match_count` counts every match, `items` holds
    /// the first `page_size` of them in name order.
    #[must_use]
    pub fn query(&self, query: &str) -> SearchResult {
        let mut items = Vec::with_capacity(self.page_size);
        let mut match_count = 0;
        for person in self.directory.matching(query) {
            if items.len() < self.page_size {
                items.push(person.clone());
            }
            match_count += 1;
        }
        SearchResult::new(items, match_count, self.page_size)
    }

    /// Run `query` after the configured delay, echoing `epoch` back
    pub async fn search(&self, query: &str, epoch: Epoch) -> (Epoch, SearchResult) {
        let delay = self.latency.delay_for(query);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let result = self.query(query);
        tracing::debug!(
            %epoch,
            query,
            matches = result.match_count,
            delay_ms = roster_core::saturating_millis(delay),
            "search resolved"
        );
        (epoch, result)
    }
}

#[async_trait]
impl SearchBackend for MockSearchService {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let (_, result) = MockSearchService::search(self, query, Epoch::ZERO).await;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Person;
    use std::time::Duration;

    fn service(page_size: usize) -> MockSearchService {
        MockSearchService::new(Arc::new(Directory::classic()), page_size)
    }

    #[test]
    fn empty_query_returns_first_page() {
        let result = service(5).query("");
        assert_eq!(result.match_count, 40);
        assert_eq!(result.page_size, 5);
        assert_eq!(
            result.names().collect::<Vec<_>>(),
            vec![
                "Alice Johnson",
                "Anna Jones",
                "Ben Knight",
                "Bob Brown",
                "Charlie Davis"
            ]
        );
    }

    #[test]
    fn no_matches() {
        let result = service(5).query("zzz");
        assert_eq!(result, SearchResult::empty(5));
    }

    #[test]
    fn query_is_not_trimmed() {
        let dir = Directory::from_people(vec![
            Person::new(1, "Jane Smith", "j@example.com", "Marketing"),
            Person::new(2, "Janeway", "k@example.com", "Command"),
        ]);
        let svc = MockSearchService::new(Arc::new(dir), 10);

        assert_eq!(svc.query("jane").match_count, 2);
        assert_eq!(svc.query("jane ").match_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn search_waits_for_latency() {
        let svc = service(10).with_latency(Latency::fixed(Duration::from_millis(1000)));
        let start = tokio::time::Instant::now();

        let (epoch, result) = svc.search("an", Epoch(7)).await;

        assert_eq!(epoch, Epoch(7));
        assert!(result.match_count > 0);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn non_empty_only_latency_skips_empty_query() {
        let svc = service(10).with_latency(Latency::NonEmptyOnly { ms: 500 });
        let start = tokio::time::Instant::now();

        svc.search("", Epoch(1)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);

        svc.search("a", Epoch(2)).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn backend_never_fails() {
        let backend: Arc<dyn SearchBackend> =
            Arc::new(service(3).with_latency(Latency::None));
        let result = backend.search("jo").await.unwrap();
        assert_eq!(result.page_size, 3);
    }

    #[test]
    fn from_config_classic() {
        let config = ServiceConfig {
            classic: true,
            ..ServiceConfig::default()
        }
        .with_page_size(4);
        let svc = MockSearchService::from_config(&config);

        assert_eq!(svc.directory().len(), 40);
        assert_eq!(svc.page_size(), 4);
        assert_eq!(svc.latency(), config.latency);
    }
}
