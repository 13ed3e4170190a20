// src/lib.rs

//! kleiner-kalender event client library

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{Config, Event};
pub use services::EventClient;
