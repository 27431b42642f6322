//! Roster configuration
//!
//! One TOML document with three sections:
//!
//! ```toml
//! [service]
//! page_size = 10
//! people = 1000
//! seed = 42
//! latency = { mode = "fixed", ms = 1000 }
//!
//! [controller]
//! query_param = "search"
//! commit = { mode = "debounced", ms = 200 }
//!
//! [server]
//! addr = "127.0.0.1:3000"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default number of items per result page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default simulated network latency
pub const DEFAULT_LATENCY_MS: u64 = 1000;
/// Default debounce window
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
/// Default URL parameter carrying the committed query
pub const DEFAULT_QUERY_PARAM: &str = "search";

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
#[must_use]
pub fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Mock search service settings
    pub service: ServiceConfig,
    /// Search controller settings
    pub controller: ControllerConfig,
    /// HTTP server settings
    pub server: ServerConfig,
}

impl RosterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed TOML or unknown values
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - any error from [`RosterConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "service.page_size",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.controller.query_param.is_empty() {
            return Err(ConfigError::Invalid {
                field: "controller.query_param",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// With service settings
    #[inline]
    #[must_use]
    pub fn with_service(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }

    /// With controller settings
    #[inline]
    #[must_use]
    pub fn with_controller(mut self, controller: ControllerConfig) -> Self {
        self.controller = controller;
        self
    }
}

/// Mock search service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Items per page
    pub page_size: usize,
    /// Number of generated people
    pub people: usize,
    /// Seed for the name generator
    pub seed: u64,
    /// Use the fixed 40-person directory instead of generating one
    pub classic: bool,
    /// Artificial response delay
    pub latency: Latency,
}

impl ServiceConfig {
    /// With page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// With latency policy
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// With generated directory size and seed
    #[inline]
    #[must_use]
    pub fn with_people(mut self, people: usize, seed: u64) -> Self {
        self.people = people;
        self.seed = seed;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            people: 1000,
            seed: 42,
            classic: false,
            latency: Latency::default(),
        }
    }
}

/// Simulated network latency policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Latency {
    /// Respond immediately
    None,
    /// Delay every response
    Fixed { ms: u64 },
    /// Delay only responses to non-empty queries
    NonEmptyOnly { ms: u64 },
}

impl Latency {
    /// Fixed delay
    #[inline]
    #[must_use]
    pub fn fixed(delay: Duration) -> Self {
        Self::Fixed {
            ms: saturating_millis(delay),
        }
    }

    /// Delay to apply before answering `query`
    #[inline]
    #[must_use]
    pub fn delay_for(&self, query: &str) -> Duration {
        match *self {
            Self::None => Duration::ZERO,
            Self::Fixed { ms } => Duration::from_millis(ms),
            Self::NonEmptyOnly { ms } if !query.is_empty() => Duration::from_millis(ms),
            Self::NonEmptyOnly { .. } => Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::Fixed {
            ms: DEFAULT_LATENCY_MS,
        }
    }
}

/// Search controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// URL query-string key carrying the committed query
    pub query_param: String,
    /// When keystrokes become commits
    pub commit: CommitPolicy,
}

impl ControllerConfig {
    /// With commit policy
    #[inline]
    #[must_use]
    pub fn with_commit(mut self, commit: CommitPolicy) -> Self {
        self.commit = commit;
        self
    }

    /// With query parameter name
    #[inline]
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            commit: CommitPolicy::default(),
        }
    }
}

/// Commit policy, fixed for the lifetime of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Commit on every input
    Immediate,
    /// Commit once input has been quiet for `ms`
    Debounced { ms: u64 },
}

impl CommitPolicy {
    /// Debounced policy with the given window
    #[inline]
    #[must_use]
    pub fn debounced(window: Duration) -> Self {
        Self::Debounced {
            ms: saturating_millis(window),
        }
    }

    /// Quiescence window, `None` for immediate commits
    #[inline]
    #[must_use]
    pub fn window(&self) -> Option<Duration> {
        match *self {
            Self::Immediate => None,
            Self::Debounced { ms } => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self::Debounced {
            ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn oversized_durations_saturate() {
        assert_eq!(Latency::fixed(Duration::MAX), Latency::Fixed { ms: u64::MAX });
        assert_eq!(
            CommitPolicy::debounced(Duration::MAX),
            CommitPolicy::Debounced { ms: u64::MAX }
        );
        assert_eq!(saturating_millis(Duration::from_micros(2500)), 2);
    }

    #[test]
    fn defaults() {
        let config = RosterConfig::new();
        assert_eq!(config.service.page_size, 10);
        assert_eq!(config.service.latency, Latency::Fixed { ms: 1000 });
        assert_eq!(config.controller.query_param, "search");
        assert_eq!(config.controller.commit, CommitPolicy::Debounced { ms: 200 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_toml() {
        let config = RosterConfig::from_toml_str(
            r#"
            [service]
            page_size = 5
            latency = { mode = "non_empty_only", ms = 300 }

            [controller]
            commit = { mode = "immediate" }
            "#,
        )
        .unwrap();

        assert_eq!(config.service.page_size, 5);
        assert_eq!(config.service.people, 1000);
        assert_eq!(config.service.latency, Latency::NonEmptyOnly { ms: 300 });
        assert_eq!(config.controller.commit, CommitPolicy::Immediate);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = RosterConfig::from_toml_str("[service]\npage_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "service.page_size",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_latency_mode() {
        let err = RosterConfig::from_toml_str("[service]\nlatency = { mode = \"warp\" }\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\naddr = \"0.0.0.0:8080\"").unwrap();

        let config = RosterConfig::load(file.path()).unwrap();
        assert_eq!(config.server.addr.port(), 8080);
    }

    #[test]
    fn load_missing_file() {
        let err = RosterConfig::load("/nonexistent/roster.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn latency_delay_for() {
        let policy = Latency::NonEmptyOnly { ms: 250 };
        assert_eq!(policy.delay_for(""), Duration::ZERO);
        assert_eq!(policy.delay_for("a"), Duration::from_millis(250));
        assert_eq!(Latency::None.delay_for("a"), Duration::ZERO);
        assert_eq!(
            Latency::fixed(Duration::from_millis(10)).delay_for(""),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn commit_policy_window() {
        assert_eq!(CommitPolicy::Immediate.window(), None);
        assert_eq!(
            CommitPolicy::debounced(Duration::from_millis(150)).window(),
            Some(Duration::from_millis(150))
        );
    }
}
