//! Utility functions and helpers.

pub mod http;
pub mod markup;
pub mod url;
