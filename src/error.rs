// src/error.rs

//! Unified error handling for the event client.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for event client operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A listing or detail URL could not be formed
    #[error("Invalid URL '{url}': {source}")]
    UrlConstruction {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure while requesting a page
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Listing page answered with a non-200 status
    #[error("Failed when get event page {url} {status}")]
    ListingStatus { url: String, status: StatusCode },

    /// Detail page answered with a non-200 status
    #[error("status code error: {}", .status.as_u16())]
    DetailStatus { url: String, status: StatusCode },

    /// Page body could not be turned into a document
    #[error("Markup parse error: {0}")]
    Markup(String),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Listing page parsed but carried no event links
    #[error("No events found on event page {url}")]
    EmptyListing { url: String },

    /// A single event detail page failed; aborts the whole listing
    #[error("Failed to parse event from page {url} {source}")]
    Event {
        url: String,
        #[source]
        source: Box<AppError>,
    },

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a URL construction error.
    pub fn url_construction(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::UrlConstruction {
            url: url.into(),
            source,
        }
    }

    /// Create a network error for the given request URL.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Create a markup parse error.
    pub fn markup(message: impl fmt::Display) -> Self {
        Self::Markup(message.to_string())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Wrap a detail page failure with the URL of the failing event.
    pub fn event(url: impl Into<String>, source: AppError) -> Self {
        Self::Event {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The request URL this error is about, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::UrlConstruction { url, .. }
            | Self::Network { url, .. }
            | Self::ListingStatus { url, .. }
            | Self::DetailStatus { url, .. }
            | Self::EmptyListing { url }
            | Self::Event { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// The remote HTTP status for status errors, looking through event wrappers.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ListingStatus { status, .. } | Self::DetailStatus { status, .. } => Some(*status),
            Self::Event { source, .. } => source.status(),
            _ => None,
        }
    }
}
