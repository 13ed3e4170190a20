// src/utils/markup.rs

//! Markup traversal capability used by the extractors.
//!
//! Extractors only need to parse a body, select elements by CSS selector,
//! read attributes and read text. [`HtmlParser`] provides that on top of
//! `scraper`; another backend only has to implement the two traits.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Turns a page body into a queryable document.
pub trait MarkupParser {
    type Document: Markup;

    fn parse(&self, body: &str) -> Result<Self::Document>;
}

/// A parsed document.
pub trait Markup {
    /// All elements matching `selector`, in document order.
    fn select(&self, selector: &str) -> Result<Vec<Node>>;
}

/// Owned snapshot of a matched element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    attributes: Vec<(String, String)>,
    text: String,
}

impl Node {
    pub fn new(attributes: Vec<(String, String)>, text: impl Into<String>) -> Self {
        Self {
            attributes,
            text: text.into(),
        }
    }

    /// Attribute value; `Some("")` for an attribute present without a value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Concatenated text of all descendant text nodes, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `scraper`-backed HTML parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

/// Document produced by [`HtmlParser`].
pub struct HtmlDocument {
    html: Html,
}

impl MarkupParser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, body: &str) -> Result<HtmlDocument> {
        // html5ever recovers from malformed input; only a missing root is fatal.
        let html = Html::parse_document(body);
        if html.root_element().value().name() != "html" {
            return Err(AppError::markup("document has no <html> root"));
        }
        Ok(HtmlDocument { html })
    }
}

impl Markup for HtmlDocument {
    fn select(&self, selector: &str) -> Result<Vec<Node>> {
        let selector = parse_selector(selector)?;
        let nodes = self
            .html
            .select(&selector)
            .map(|element| {
                let attributes = element
                    .value()
                    .attrs()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect();
                Node::new(attributes, element.text().collect::<String>())
            })
            .collect();
        Ok(nodes)
    }
}

/// Compile a CSS selector.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
