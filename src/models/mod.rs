// src/models/mod.rs

//! Domain models for the event client.

mod config;
mod event;

pub use config::{Config, DEFAULT_BASE_URL, HttpConfig, LinkConfig};
pub use event::{Event, ListingEntry};
