//! Roster Core - shared contract types
//!
//! The vocabulary shared by the search service, the search controller and
//! the HTTP layer:
//! - `Person` records and `SearchResult` pages
//! - `Epoch` tags correlating fetches with commits
//! - The `SearchBackend` trait every query executor implements
//! - Configuration and error types

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

pub use backend::SearchBackend;
pub use config::{
    saturating_millis, CommitPolicy, ControllerConfig, Latency, RosterConfig, ServerConfig,
    ServiceConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_LATENCY_MS, DEFAULT_PAGE_SIZE, DEFAULT_QUERY_PARAM,
};
pub use error::{ConfigError, SearchError, SearchErrorKind};
pub use types::{Epoch, Person, PersonId, SearchResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
