//! Service layer for the event client.
//!
//! - Listing page extraction (`extract_listing`)
//! - Detail page extraction (`extract_content`)
//! - Per-day coordination (`EventClient`)

mod detail;
mod events;
mod listing;

pub use detail::{CONTENT_SELECTOR, extract_content};
pub use events::EventClient;
pub use listing::{LISTING_SELECTOR, extract_listing};
