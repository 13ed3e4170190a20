// src/services/listing.rs

//! Listing page extraction.

use crate::error::{AppError, Result};
use crate::models::ListingEntry;
use crate::utils::markup::{Markup, MarkupParser};

/// Anchors of the daily event list.
pub const LISTING_SELECTOR: &str = "div#ContentBody ul li a";

/// Extract `(title, href)` pairs from a listing page, in document order.
///
/// `url` is only used to name the page in the error when no anchor matches.
pub fn extract_listing<P: MarkupParser>(
    parser: &P,
    body: &str,
    url: &str,
) -> Result<Vec<ListingEntry>> {
    let document = parser.parse(body)?;
    let entries: Vec<ListingEntry> = document
        .select(LISTING_SELECTOR)?
        .into_iter()
        .map(|anchor| ListingEntry {
            title: anchor.text().trim().to_string(),
            href: anchor.attr("href").unwrap_or_default().to_string(),
        })
        .collect();

    if entries.is_empty() {
        return Err(AppError::EmptyListing {
            url: url.to_string(),
        });
    }
    Ok(entries)
}
