//! Roster HTTP - search endpoint and client
//!
//! Exposes `MockSearchService` as `GET /search?query=<text>` returning
//! `{items, matchCount, pageSize}`, and provides `HttpSearchBackend`, a
//! `SearchBackend` that calls such an endpoint.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod routes;

pub use client::{HttpSearchBackend, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiErrorResponse, ClientError};
pub use routes::{router, AppState, HealthResponse, SearchParams};

use std::future::Future;
use tokio::net::TcpListener;

/// Serve the router on `listener` until `shutdown` resolves
///
/// # Errors
/// I/O errors from the listener
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
