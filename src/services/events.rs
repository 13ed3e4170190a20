// src/services/events.rs

//! Event client: listing fetch, link extraction and per-event detail fetch.

use std::time::Duration;

use chrono::Datelike;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, Event, ListingEntry};
use crate::services::detail::extract_content;
use crate::services::listing::extract_listing;
use crate::utils::http::{create_client, fetch_body};
use crate::utils::markup::{HtmlParser, MarkupParser};
use crate::utils::url::{listing_url, parse_absolute, resolve};

/// Service for fetching the events of one calendar day.
///
/// Requests run one after another. The first failing request aborts the
/// whole call and no partial result is returned.
pub struct EventClient<P = HtmlParser> {
    config: Config,
    client: Client,
    parser: P,
}

impl EventClient<HtmlParser> {
    /// Create a new event client with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_parser(config, HtmlParser)
    }
}

impl<P: MarkupParser> EventClient<P> {
    /// Create an event client with a custom markup backend.
    pub fn with_parser(config: Config, parser: P) -> Result<Self> {
        let client = create_client(&config.http)?;
        Ok(Self {
            config,
            client,
            parser,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch all events listed for `date`, each with its detail content.
    pub async fn events_by_date(&self, date: &impl Datelike) -> Result<Vec<Event>> {
        let url = listing_url(&self.config.base_url, date)?;
        let entries = self.fetch_listing(&url).await?;
        log::info!("Found {} events on {}", entries.len(), url);

        let delay = Duration::from_millis(self.config.http.request_delay_ms);
        let mut events = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let mut event = Event::from_entry(entry);
            if self.config.links.resolve_relative {
                let resolved = resolve(&url, &event.url)
                    .map_err(|e| AppError::event(event.url.clone(), e))?;
                event.url = resolved.to_string();
            }

            match self.fetch_content(&event.url).await {
                Ok(content) => event.content = content,
                Err(e) => return Err(AppError::event(event.url, e)),
            }
            events.push(event);
        }

        Ok(events)
    }

    /// Fetch a listing page and extract its entries.
    pub async fn fetch_listing(&self, url: &Url) -> Result<Vec<ListingEntry>> {
        let body = fetch_body(&self.client, url.as_str(), |status| {
            AppError::ListingStatus {
                url: url.to_string(),
                status,
            }
        })
        .await?;

        extract_listing(&self.parser, &body, url.as_str())
    }

    /// Fetch a detail page and extract its content. `url` is requested verbatim.
    pub async fn fetch_content(&self, url: &str) -> Result<String> {
        parse_absolute(url)?;
        let body = fetch_body(&self.client, url, |status| {
            AppError::DetailStatus {
                url: url.to_string(),
                status,
            }
        })
        .await?;

        extract_content(&self.parser, &body)
    }
}
