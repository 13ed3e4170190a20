// src/services/detail.rs

//! Detail page extraction.

use crate::error::Result;
use crate::utils::markup::{Markup, MarkupParser};

/// Paragraphs inside the event text container.
pub const CONTENT_SELECTOR: &str = "div#TextContent p";

/// Concatenate the text of qualifying paragraphs, in document order.
///
/// A paragraph qualifies when it carries neither an `id` nor a `class`
/// attribute, whatever their value. No separator is inserted.
pub fn extract_content<P: MarkupParser>(parser: &P, body: &str) -> Result<String> {
    let document = parser.parse(body)?;
    let content = document
        .select(CONTENT_SELECTOR)?
        .iter()
        .filter(|p| !p.has_attr("id") && !p.has_attr("class"))
        .map(|p| p.text())
        .collect();
    Ok(content)
}
