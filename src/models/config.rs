//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Site used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.kleiner-kalender.de";

/// Root application configuration.
///
/// Immutable once handed to an [`EventClient`](crate::services::EventClient);
/// every request of a run reads from the same instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scheme and host of the calendar site, e.g. `https://example.org`
    #[serde(default)]
    pub base_url: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Detail link handling
    #[serde(default)]
    pub links: LinkConfig,
}

impl Config {
    /// Create a configuration for the given base URL.
    ///
    /// An empty base URL falls back to [`DEFAULT_BASE_URL`]. The value is not
    /// checked for well-formedness here; that happens when the listing URL is built.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: HttpConfig::default(),
            links: LinkConfig::default(),
        }
        .normalized()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Return a copy with an overridden base URL, re-applying the default rule.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.connect_timeout_secs == Some(0) {
            return Err(AppError::validation("http.connect_timeout_secs must be > 0"));
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim();
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
        };
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("")
    }
}

/// HTTP client settings.
///
/// Timeouts apply per request. Unset means the transport's own behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Connection establishment timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Pause between consecutive detail requests in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
            connect_timeout_secs: None,
            request_delay_ms: 0,
        }
    }
}

/// Detail link handling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkConfig {
    /// Resolve relative detail hrefs against the listing URL.
    ///
    /// Off by default: hrefs are requested and reported exactly as scraped.
    #[serde(default)]
    pub resolve_relative: bool,
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; kalender/0.1)".into()
    }
}
