//! Search-result normalization
//!
//! Folds the provider's heterogeneous records into the canonical text block
//! consumed by the analysis prompt. Failure never propagates as an error
//! from here: the provider outcome is returned as data and the caller
//! decides what to do with it.

use chrono::DateTime;
use tracing::{info, instrument, warn};

use newsdesk_core::{NormalizedResults, SearchOutcome, SearchRecord};

use crate::duckduckgo::DuckDuckGoClient;
use crate::types::DdgNewsResult;

/// Queries the news provider and renders the canonical result block
pub struct ResultNormalizer {
    client: DuckDuckGoClient,
}

impl ResultNormalizer {
    /// Create a normalizer over a default DuckDuckGo client
    pub fn new() -> Self {
        Self {
            client: DuckDuckGoClient::new(),
        }
    }

    /// Create a normalizer over a specific client
    pub fn with_client(client: DuckDuckGoClient) -> Self {
        Self { client }
    }

    /// Search and normalize
    ///
    /// One outbound call, no retry. The three outcomes are all returned as
    /// ordinary values: a formatted block, the empty-result marker, or the
    /// provider error with its detail.
    #[instrument(skip(self))]
    pub async fn fetch(&self, query: &str, max_results: usize) -> SearchOutcome {
        let raw = match self.client.news(query, max_results).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("News search failed: {}", e);
                return SearchOutcome::ProviderError(e.to_string());
            }
        };

        if raw.is_empty() {
            info!("News search returned no results for '{}'", query);
            return SearchOutcome::NoResults;
        }

        let records: Vec<SearchRecord> = raw.into_iter().map(to_record).collect();
        let block = format_records(&records);

        info!("Normalized {} news records for '{}'", records.len(), query);

        SearchOutcome::Results(NormalizedResults {
            block,
            record_count: records.len(),
        })
    }
}

impl Default for ResultNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold one raw result into a fully-populated record
fn to_record(raw: DdgNewsResult) -> SearchRecord {
    SearchRecord::from_parts(
        raw.title,
        raw.date.and_then(format_epoch_date),
        raw.source,
        raw.body,
        raw.excerpt,
        raw.url,
        raw.link,
    )
}

/// Render epoch seconds as date text, dropping unrepresentable values
fn format_epoch_date(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// Render records as the canonical result block
///
/// One multi-line paragraph per record, 1-indexed, paragraphs separated by
/// a blank line. The layout is part of the prompt contract downstream.
pub fn format_records(records: &[SearchRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            format!(
                "{}. Title: {}\n   Date: {}\n   Source: {}\n   Summary: {}\n   URL: {}\n",
                idx + 1,
                record.title,
                record.date,
                record.source,
                record.summary,
                record.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::record::{FALLBACK_DATE, FALLBACK_SOURCE, FALLBACK_TITLE};

    fn record(n: usize) -> SearchRecord {
        SearchRecord {
            title: format!("Story {}", n),
            date: "2026-08-27 09:00 UTC".to_string(),
            source: "Reuters".to_string(),
            summary: format!("Summary of story {}", n),
            url: format!("https://example.com/{}", n),
        }
    }

    #[test]
    fn test_format_records_indexes_from_one() {
        let block = format_records(&[record(1), record(2)]);
        assert!(block.starts_with("1. Title: Story 1"));
        assert!(block.contains("2. Title: Story 2"));
        let first = block.find("1. Title").unwrap();
        let second = block.find("2. Title").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_records_blank_line_between_paragraphs() {
        let block = format_records(&[record(1), record(2)]);
        assert!(block.contains("\n\n2. Title"));
    }

    #[test]
    fn test_format_records_paragraph_layout() {
        let block = format_records(&[record(7)]);
        assert_eq!(
            block,
            "1. Title: Story 7\n   Date: 2026-08-27 09:00 UTC\n   Source: Reuters\n   Summary: Summary of story 7\n   URL: https://example.com/7\n"
        );
    }

    #[test]
    fn test_to_record_applies_fallbacks() {
        let raw = DdgNewsResult {
            excerpt: Some("Only a snippet survived.".to_string()),
            link: Some("https://example.com/only-link".to_string()),
            ..Default::default()
        };
        let record = to_record(raw);
        assert_eq!(record.title, FALLBACK_TITLE);
        assert_eq!(record.date, FALLBACK_DATE);
        assert_eq!(record.source, FALLBACK_SOURCE);
        assert_eq!(record.summary, "Only a snippet survived.");
        assert_eq!(record.url, "https://example.com/only-link");
    }

    #[test]
    fn test_to_record_prefers_body_and_url() {
        let raw = DdgNewsResult {
            body: Some("body text".to_string()),
            excerpt: Some("excerpt text".to_string()),
            url: Some("https://example.com/url".to_string()),
            link: Some("https://example.com/link".to_string()),
            ..Default::default()
        };
        let record = to_record(raw);
        assert_eq!(record.summary, "body text");
        assert_eq!(record.url, "https://example.com/url");
    }

    #[test]
    fn test_epoch_date_rendering() {
        let raw = DdgNewsResult {
            date: Some(1756339200),
            ..Default::default()
        };
        let record = to_record(raw);
        assert_eq!(record.date, "2025-08-28 00:00 UTC");
    }

    #[test]
    fn test_fallback_paragraph_is_well_formed() {
        // A record missing everything still renders all five lines.
        let block = format_records(&[to_record(DdgNewsResult::default())]);
        assert!(block.contains("Title: No title available"));
        assert!(block.contains("Date: Date not available"));
        assert!(block.contains("Source: Unknown source"));
        assert!(block.contains("Summary: No description available"));
        assert!(block.contains("URL: No link available"));
    }
}
