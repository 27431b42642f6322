//! Testing utilities for Roster workspace
//!
//! Shared fixtures and a scriptable search backend.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{Latency, Person, SearchBackend, SearchError, SearchResult};
use roster_service::{Directory, MockSearchService};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// The fixed 40-person team, 10 per page, no latency
pub fn classic_service() -> MockSearchService {
    MockSearchService::new(Arc::new(Directory::classic()), 10).with_latency(Latency::None)
}

/// Service over the given people
pub fn service_with(people: Vec<Person>, page_size: usize) -> MockSearchService {
    MockSearchService::new(Arc::new(Directory::from_people(people)), page_size)
        .with_latency(Latency::None)
}

pub fn jane_smith() -> Person {
    Person::new(2, "Jane Smith", "janesmith@example.com", "Marketing")
}

/// Backend with per-query delays and failures
///
/// Results come from the wrapped service; the wrapped service's own latency
/// is ignored. Delay lookup order: queued per-call delays, then per-query
/// delays, then the default delay.
#[derive(Debug)]
pub struct ScriptedBackend {
    service: MockSearchService,
    default_delay: Duration,
    delays: HashMap<String, Duration>,
    call_delays: Mutex<VecDeque<Duration>>,
    failures: Mutex<HashMap<String, SearchError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(service: MockSearchService) -> Self {
        Self {
            service,
            default_delay: Duration::ZERO,
            delays: HashMap::new(),
            call_delays: Mutex::new(VecDeque::new()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Delays consumed one per call, in call order
    pub fn with_call_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.call_delays.lock().extend(delays);
        self
    }

    pub fn with_failure(self, query: &str, error: SearchError) -> Self {
        self.fail(query, error);
        self
    }

    /// Make `query` fail from now on
    pub fn fail(&self, query: &str, error: SearchError) {
        self.failures.lock().insert(query.to_string(), error);
    }

    /// Make `query` succeed again
    pub fn recover(&self, query: &str) {
        self.failures.lock().remove(query);
    }

    /// Queries received so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// What the wrapped service answers for `query`
    pub fn expected(&self, query: &str) -> SearchResult {
        self.service.query(query)
    }

    fn delay_for(&self, query: &str) -> Duration {
        if let Some(delay) = self.call_delays.lock().pop_front() {
            return delay;
        }
        self.delays.get(query).copied().unwrap_or(self.default_delay)
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        self.calls.lock().push(query.to_string());
        let delay = self.delay_for(query);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failures.lock().get(query).cloned();
        match failure {
            Some(error) => Err(error),
            None => Ok(self.service.query(query)),
        }
    }
}
