//! Normalized news search records
//!
//! Search providers return records with inconsistent field presence. A
//! [`SearchRecord`] is the canonical form: every field is always populated,
//! either with provider data or with a fixed fallback string, so downstream
//! consumers never deal with missing fields.

use serde::{Deserialize, Serialize};

/// Fallback for a record without a title
pub const FALLBACK_TITLE: &str = "No title available";
/// Fallback for a record without a publication date
pub const FALLBACK_DATE: &str = "Date not available";
/// Fallback for a record without a named source
pub const FALLBACK_SOURCE: &str = "Unknown source";
/// Fallback for a record without a summary or snippet
pub const FALLBACK_SUMMARY: &str = "No description available";
/// Fallback for a record without a url or link
pub const FALLBACK_URL: &str = "No link available";

/// One normalized news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Article title
    pub title: String,
    /// Publication date as free-form text
    pub date: String,
    /// Name of the publishing source
    pub source: String,
    /// Brief summary/excerpt
    pub summary: String,
    /// Article URL
    pub url: String,
}

impl SearchRecord {
    /// Build a record from raw provider fields, substituting a fallback for
    /// each missing field independently.
    ///
    /// The summary prefers `body` over `snippet`; the url prefers `url` over
    /// `link`. Providers disagree on which of the pair they populate.
    pub fn from_parts(
        title: Option<String>,
        date: Option<String>,
        source: Option<String>,
        body: Option<String>,
        snippet: Option<String>,
        url: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            date: date.unwrap_or_else(|| FALLBACK_DATE.to_string()),
            source: source.unwrap_or_else(|| FALLBACK_SOURCE.to_string()),
            summary: body
                .or(snippet)
                .unwrap_or_else(|| FALLBACK_SUMMARY.to_string()),
            url: url.or(link).unwrap_or_else(|| FALLBACK_URL.to_string()),
        }
    }
}
