//! Event data structures.

use serde::{Deserialize, Serialize};

/// One `(title, href)` pair from a listing page, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Anchor text
    pub title: String,

    /// Raw `href` attribute, empty if absent
    pub href: String,
}

/// An event scraped from a listing page and its detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Link text from the listing page
    pub title: String,

    /// Concatenated qualifying paragraphs of the detail page
    pub content: String,

    /// Detail page URL as emitted by the listing page
    pub url: String,

    /// Reserved, never populated
    #[serde(default)]
    pub date: String,

    /// Reserved, never populated
    #[serde(default)]
    pub location: String,
}

impl Event {
    /// Create an event from a listing entry; content is filled in later.
    pub fn from_entry(entry: ListingEntry) -> Self {
        Self {
            title: entry.title,
            url: entry.href,
            ..Self::default()
        }
    }

    /// Format event for display using a template.
    ///
    /// Supported placeholders: `{title}`, `{url}`, `{content}`, `{date}`, `{location}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{url}", &self.url)
            .replace("{content}", &self.content)
            .replace("{date}", &self.date)
            .replace("{location}", &self.location)
    }
}
