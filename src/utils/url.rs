// src/utils/url.rs

//! URL construction utilities.

use chrono::Datelike;
use url::Url;

use crate::error::{AppError, Result};

/// Build the daily listing URL `<base_url>/kalender/<YYYY-MM-DD>.html`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kalender::utils::url::listing_url;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 23).unwrap();
/// assert_eq!(
///     listing_url("https://example.org", &date).unwrap().as_str(),
///     "https://example.org/kalender/2024-05-23.html"
/// );
/// ```
pub fn listing_url(base_url: &str, date: &impl Datelike) -> Result<Url> {
    let raw = format!(
        "{}/kalender/{:04}-{:02}-{:02}.html",
        base_url,
        date.year(),
        date.month(),
        date.day()
    );
    Url::parse(&raw).map_err(|e| AppError::url_construction(raw, e))
}

/// Check that an href can be requested as-is.
pub fn parse_absolute(href: &str) -> Result<Url> {
    Url::parse(href).map_err(|e| AppError::url_construction(href, e))
}

/// Resolve a potentially relative href against the page it was found on.
///
/// An empty href is rejected instead of resolving to `base` itself.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    if href.trim().is_empty() {
        return Err(AppError::url_construction(href, url::ParseError::EmptyHost));
    }
    base.join(href).map_err(|e| AppError::url_construction(href, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_listing_url_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 1).unwrap();
        assert_eq!(
            listing_url("http://localhost:8080", &date).unwrap().as_str(),
            "http://localhost:8080/kalender/2001-09-01.html"
        );
    }

    #[test]
    fn test_listing_url_uses_date_fields_of_datetime() {
        let date = Utc.with_ymd_and_hms(2024, 11, 23, 10, 0, 0).unwrap();
        assert_eq!(
            listing_url("https://www.kleiner-kalender.de", &date)
                .unwrap()
                .as_str(),
            "https://www.kleiner-kalender.de/kalender/2024-11-23.html"
        );
    }

    #[test]
    fn test_listing_url_rejects_malformed_base() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 23).unwrap();
        let err = listing_url("not a url", &date).unwrap_err();
        assert!(matches!(err, AppError::UrlConstruction { .. }));
        assert_eq!(err.url(), Some("not a url/kalender/2024-05-23.html"));
    }

    #[test]
    fn test_parse_absolute_rejects_relative() {
        assert!(parse_absolute("/event/vollmond.html").is_err());
        assert!(parse_absolute("").is_err());
        assert!(parse_absolute("https://example.org/event.html").is_ok());
    }

    #[test]
    fn test_resolve_rejects_empty_href() {
        let base = Url::parse("https://example.org/kalender/2024-05-23.html").unwrap();
        assert!(matches!(
            resolve(&base, "").unwrap_err(),
            AppError::UrlConstruction { .. }
        ));
        assert!(resolve(&base, "   ").is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = Url::parse("https://example.org/kalender/2024-05-23.html").unwrap();
        assert_eq!(
            resolve(&base, "/event/vollmond.html").unwrap().as_str(),
            "https://example.org/event/vollmond.html"
        );
        assert_eq!(
            resolve(&base, "other.html").unwrap().as_str(),
            "https://example.org/kalender/other.html"
        );
        assert_eq!(
            resolve(&base, "https://other.org/x").unwrap().as_str(),
            "https://other.org/x"
        );
    }
}
