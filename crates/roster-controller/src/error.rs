//! Error types for the search controller

/// Navigation errors
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// Location is not an absolute URL
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
