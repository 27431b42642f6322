//! Search controller
//!
//! Owns the search state for one mounted search UI:
//! - `display_value` follows every keystroke immediately
//! - `committed_query` follows the URL and changes only on commit
//! - every commit bumps `request_epoch` and issues exactly one fetch
//! - a settlement is applied only if its epoch is the current one
//!
//! Fetches run as spawned tasks and report back over a channel drained by
//! the controller itself, so all state changes happen through `&mut self`.

use crate::debounce::Debouncer;
use crate::navigation::{query_from_url, url_with_query, Navigator};
use crate::view::SearchView;
use roster_core::{
    ControllerConfig, Epoch, SearchBackend, SearchError, SearchErrorKind, SearchResult,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Controller-owned search state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    /// What the input shows
    pub display_value: String,
    /// Last query actually submitted
    pub committed_query: String,
    /// Latest applied result
    pub latest_result: Option<SearchResult>,
    /// A fetch for `committed_query` is in flight
    pub is_pending: bool,
    /// Epoch of the latest commit
    pub request_epoch: Epoch,
    /// Failure of the latest fetch
    pub last_error: Option<SearchErrorKind>,
}

impl ControllerState {
    fn new(query: String) -> Self {
        Self {
            display_value: query.clone(),
            committed_query: query,
            latest_result: None,
            is_pending: false,
            request_epoch: Epoch::ZERO,
            last_error: None,
        }
    }
}

/// How a settlement was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Result became the latest result
    Applied,
    /// Fetch failed; previous result kept
    Failed(SearchErrorKind),
    /// Superseded by a newer commit and dropped
    Stale,
}

/// Something the controller did while being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A debounced input was committed
    Committed(Epoch),
    /// A debounced input matched the committed query; nothing fetched
    Coalesced,
    /// A fetch settled
    Settled {
        epoch: Epoch,
        outcome: SettleOutcome,
    },
}

#[derive(Debug)]
struct Settlement {
    epoch: Epoch,
    outcome: Result<SearchResult, SearchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrlWrite {
    Replace,
    Skip,
}

/// Mediates between keystrokes, the URL and the search backend
pub struct SearchController<B: SearchBackend + ?Sized + 'static, N: Navigator> {
    backend: Arc<B>,
    navigator: N,
    config: ControllerConfig,
    state: ControllerState,
    debouncer: Debouncer,
    settlements_tx: mpsc::UnboundedSender<Settlement>,
    settlements_rx: mpsc::UnboundedReceiver<Settlement>,
    in_flight: usize,
    fetches_issued: u64,
}

impl<B: SearchBackend + ?Sized + 'static, N: Navigator> SearchController<B, N> {
    /// Mount a controller on the current navigation state
    ///
    /// The query is read from the URL and committed without writing the URL
    /// back. The first fetch is always issued, even for an empty query.
    ///
    /// Must be called inside a tokio runtime.
    pub fn mount(backend: Arc<B>, navigator: N, config: ControllerConfig) -> Self {
        let initial = query_from_url(navigator.current(), &config.query_param);
        let (settlements_tx, settlements_rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(config.commit);

        let mut controller = Self {
            backend,
            navigator,
            config,
            state: ControllerState::new(initial.clone()),
            debouncer,
            settlements_tx,
            settlements_rx,
            in_flight: 0,
            fetches_issued: 0,
        };
        tracing::debug!(query = %initial, "search controller mounted");
        controller.issue(initial, UrlWrite::Skip);
        controller
    }

    /// Handle a keystroke
    ///
    /// The display value changes at once; the commit follows the configured
    /// policy.
    pub fn on_input(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.state.display_value.clone_from(&raw);
        if let Some(query) = self.debouncer.schedule(raw, Instant::now()) {
            self.commit_inner(query);
        }
    }

    /// Promote `query` to the committed query
    ///
    /// Returns the new epoch, or `None` if `query` is already committed (no
    /// fetch is issued then). Cancels any pending debounced input.
    pub fn commit(&mut self, query: impl Into<String>) -> Option<Epoch> {
        self.debouncer.cancel();
        self.commit_inner(query.into())
    }

    /// Re-read the URL after external navigation (back/forward)
    ///
    /// Both the display value and the committed query follow the URL; the URL
    /// itself is not written.
    pub fn resync(&mut self) -> Option<Epoch> {
        let query = query_from_url(self.navigator.current(), &self.config.query_param);
        self.debouncer.cancel();
        self.state.display_value.clone_from(&query);
        if query == self.state.committed_query {
            return None;
        }
        Some(self.issue(query, UrlWrite::Skip))
    }

    /// Commit a debounced input whose window has elapsed
    pub fn tick(&mut self) -> Option<ControllerEvent> {
        let query = self.debouncer.take_due(Instant::now())?;
        Some(match self.commit_inner(query) {
            Some(epoch) => ControllerEvent::Committed(epoch),
            None => ControllerEvent::Coalesced,
        })
    }

    /// Apply everything that is ready without waiting
    pub fn drain_ready(&mut self) -> Vec<ControllerEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.tick() {
            events.push(event);
        }
        while let Ok(settlement) = self.settlements_rx.try_recv() {
            events.push(self.receive(settlement));
        }
        events
    }

    /// Wait for the next settlement or debounce deadline and apply it
    ///
    /// Returns `None` when no fetch is in flight and no input is pending.
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        let deadline = self.debouncer.deadline();
        if self.in_flight == 0 && deadline.is_none() {
            return None;
        }

        tokio::select! {
            Some(settlement) = self.settlements_rx.recv(), if self.in_flight > 0 => {
                Some(self.receive(settlement))
            }
            () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                self.tick()
            }
        }
    }

    /// Drive until nothing is in flight or pending
    pub async fn settle_all(&mut self) -> Vec<ControllerEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            events.push(event);
        }
        events
    }

    /// Current rendering snapshot
    #[must_use]
    pub fn current_view(&self) -> SearchView<'_> {
        let result = self.state.latest_result.as_ref();
        SearchView {
            display_value: &self.state.display_value,
            result,
            is_stale: self.state.is_pending && result.is_some(),
            is_loading: self.state.is_pending && result.is_none(),
            error: self.state.last_error,
        }
    }

    /// Full controller state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Last committed query
    #[inline]
    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.state.committed_query
    }

    /// Epoch of the latest commit
    #[inline]
    #[must_use]
    pub fn request_epoch(&self) -> Epoch {
        self.state.request_epoch
    }

    /// Number of fetches issued since mount
    #[inline]
    #[must_use]
    pub fn fetch_count(&self) -> u64 {
        self.fetches_issued
    }

    /// Number of fetches not yet received back
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Navigation state
    #[inline]
    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable navigation state, for driving back/forward
    ///
    /// Call [`SearchController::resync`] after moving.
    #[inline]
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Tear down, handing back the navigator
    ///
    /// Fetches still in flight finish on their own; their results are lost.
    pub fn unmount(self) -> N {
        tracing::debug!(
            in_flight = self.in_flight,
            epoch = %self.state.request_epoch,
            "search controller unmounted"
        );
        self.navigator
    }

    fn commit_inner(&mut self, query: String) -> Option<Epoch> {
        if query == self.state.committed_query {
            tracing::trace!(query = %query, "commit skipped, query unchanged");
            return None;
        }
        Some(self.issue(query, UrlWrite::Replace))
    }

    fn issue(&mut self, query: String, write: UrlWrite) -> Epoch {
        let epoch = self.state.request_epoch.next();
        self.state.request_epoch = epoch;
        self.state.committed_query.clone_from(&query);
        self.state.is_pending = true;
        self.state.last_error = None;

        if write == UrlWrite::Replace {
            let url = url_with_query(
                self.navigator.current(),
                &self.config.query_param,
                &query,
            );
            self.navigator.replace(url);
        }

        tracing::debug!(%epoch, query = %query, "query committed");
        self.spawn_fetch(epoch, query);
        epoch
    }

    fn spawn_fetch(&mut self, epoch: Epoch, query: String) {
        let backend = Arc::clone(&self.backend);
        let tx = self.settlements_tx.clone();
        self.in_flight += 1;
        self.fetches_issued += 1;

        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { SearchBackend::search(&*backend, &query).await });
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                // a panicking backend still settles its epoch
                Err(e) => {
                    tracing::error!(%epoch, error = %e, "search task aborted");
                    Err(SearchError::ServiceUnavailable(format!("search task aborted: {e}")))
                }
            };
            // receiver gone means the controller was unmounted
            let _ = tx.send(Settlement { epoch, outcome });
        });
    }

    fn receive(&mut self, settlement: Settlement) -> ControllerEvent {
        self.in_flight = self.in_flight.saturating_sub(1);
        let outcome = self.settle(settlement.epoch, settlement.outcome);
        ControllerEvent::Settled {
            epoch: settlement.epoch,
            outcome,
        }
    }

    fn settle(
        &mut self,
        epoch: Epoch,
        outcome: Result<SearchResult, SearchError>,
    ) -> SettleOutcome {
        if epoch < self.state.request_epoch {
            tracing::trace!(%epoch, current = %self.state.request_epoch, "stale response dropped");
            return SettleOutcome::Stale;
        }
        debug_assert_eq!(epoch, self.state.request_epoch);

        self.state.is_pending = false;
        match outcome {
            Ok(result) => {
                tracing::debug!(%epoch, matches = result.match_count, "result applied");
                self.state.latest_result = Some(result);
                self.state.last_error = None;
                SettleOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%epoch, error = %err, "search failed");
                let kind = err.kind();
                self.state.last_error = Some(kind);
                SettleOutcome::Failed(kind)
            }
        }
    }
}

impl<B: SearchBackend + ?Sized + 'static, N: Navigator + std::fmt::Debug> std::fmt::Debug
    for SearchController<B, N>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("navigator", &self.navigator)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
