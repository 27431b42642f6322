//! HTTP routes
//!
//! - `GET /search?query=<text>` → one result page
//! - `GET /health` → liveness and directory size

use crate::error::ApiErrorResponse;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use roster_core::{Epoch, SearchResult};
use roster_service::MockSearchService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search service shared by all requests
    pub service: Arc<MockSearchService>,
}

impl AppState {
    /// Create state around `service`
    #[inline]
    #[must_use]
    pub fn new(service: Arc<MockSearchService>) -> Self {
        Self { service }
    }
}

/// `GET /search` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Search text; absent means everyone
    #[serde(default)]
    pub query: Option<String>,
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub people: usize,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run a search, honoring the service's simulated latency
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    let query = params.query.unwrap_or_default();
    // the wire protocol carries no epoch; callers correlate on their side
    let (_, result) = state.service.search(&query, Epoch::ZERO).await;
    tracing::debug!(query = %query, matches = result.match_count, "search served");
    Json(result)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        people: state.service.directory().len(),
    })
}

async fn not_found() -> ApiErrorResponse {
    ApiErrorResponse::not_found("no such route")
}
