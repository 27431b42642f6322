//! HTTP search backend
//!
//! Talks to a `GET /search` endpoint and maps transport failures onto
//! `SearchError` so the controller can flag them in its view.

use crate::error::{ApiError, ClientError};
use async_trait::async_trait;
use reqwest::StatusCode;
use roster_core::{saturating_millis, SearchBackend, SearchError, SearchResult};
use std::time::Duration;
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// `SearchBackend` over HTTP
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpSearchBackend {
    /// Backend for the server at `base` (e.g. `http://127.0.0.1:3000/`)
    ///
    /// # Errors
    /// - `ClientError::InvalidBaseUrl` if `base` cannot be joined with `search`
    /// - `ClientError::Build` if the HTTP client cannot be built
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = base
            .join("search")
            .map_err(|source| ClientError::InvalidBaseUrl {
                url: base.to_string(),
                source,
            })?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Endpoint URL requests go to
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport(&self, err: &reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout {
                after_ms: saturating_millis(self.timeout),
            }
        } else {
            SearchError::ServiceUnavailable(err.to_string())
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| self.map_transport(&e))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.message,
                Err(_) => status.to_string(),
            };
            return Err(SearchError::Validation(message));
        }
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.endpoint, "search endpoint failed");
            return Err(SearchError::ServiceUnavailable(format!(
                "search endpoint answered {status}"
            )));
        }

        response
            .json::<SearchResult>()
            .await
            .map_err(|e| self.map_transport(&e))
    }
}
