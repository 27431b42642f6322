//! Search backend abstraction
//!
//! The controller only knows how to ask "search this query and tell me the
//! result". The in-process mock service, the HTTP client, and test doubles all
//! implement this trait.

use crate::error::SearchError;
use crate::types::SearchResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous query execution
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run `query` and resolve with a single result page
    ///
    /// Calls may overlap and may complete in any order.
    ///
    /// # Errors
    /// - `SearchError::ServiceUnavailable` / `SearchError::Timeout` on transport failure
    /// - `SearchError::Validation` if the backend rejects the query
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError>;
}

#[async_trait]
impl<T: SearchBackend + ?Sized> SearchBackend for Arc<T> {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        (**self).search(query).await
    }
}
