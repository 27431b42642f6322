//! Error types for Roster
//!
//! Provides error handling for:
//! - Search transport failures (unavailable backend, timeouts)
//! - Malformed queries
//! - Configuration loading

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Search failure returned by a backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Query rejected by the backend
    #[error("invalid query: {0}")]
    Validation(String),

    /// Backend could not be reached or answered with a failure
    #[error("search service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Backend did not answer in time
    #[error("search timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },
}

impl SearchError {
    /// Classification exposed to the rendering layer
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            Self::Validation(_) => SearchErrorKind::Validation,
            Self::ServiceUnavailable(_) => SearchErrorKind::ServiceUnavailable,
            Self::Timeout { .. } => SearchErrorKind::Timeout,
        }
    }

    /// Whether the failure happened in transport rather than in the query
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_) | Self::Timeout { .. })
    }
}

/// Search failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchErrorKind {
    /// Malformed query
    Validation,
    /// Backend unreachable
    ServiceUnavailable,
    /// Backend too slow
    Timeout,
}

impl std::fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Validation => "validation",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value out of range
    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
