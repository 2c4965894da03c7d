//! Tagged outcomes for the two pipeline stages
//!
//! Both stages report failure as ordinary data rather than propagated
//! errors. The orchestration layer matches on these variants to decide
//! whether the next stage runs; the rendered text of each variant is what
//! the interaction surface shows the user.

use serde::{Deserialize, Serialize};

/// A successfully normalized result block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResults {
    /// 1-indexed, blank-line-separated paragraphs, one per record
    pub block: String,
    /// Number of records rendered into the block
    pub record_count: usize,
}

/// Outcome of the news-search stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Search succeeded and returned at least one record
    Results(NormalizedResults),
    /// Search succeeded but returned zero records
    NoResults,
    /// The provider call failed; carries the error detail
    ProviderError(String),
}

impl SearchOutcome {
    /// Whether analysis should be attempted on this outcome
    pub fn is_analyzable(&self) -> bool {
        matches!(self, SearchOutcome::Results(_))
    }

    /// User-facing text for this outcome
    pub fn display_text(&self) -> String {
        match self {
            SearchOutcome::Results(results) => results.block.clone(),
            SearchOutcome::NoResults => {
                "No results found. Try modifying your search query.".to_string()
            }
            SearchOutcome::ProviderError(detail) => format!(
                "Search error: {}\nTry again with a different search term or check your internet connection.",
                detail
            ),
        }
    }
}

/// Outcome of the completion stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The model produced a report
    Report(String),
    /// The endpoint answered with zero choices
    NoResponse,
    /// The provider call failed; carries the error detail
    ProviderError(String),
}

impl CompletionOutcome {
    /// User-facing text for this outcome
    pub fn display_text(&self) -> String {
        match self {
            CompletionOutcome::Report(text) => text.clone(),
            CompletionOutcome::NoResponse => "Error: No response generated".to_string(),
            CompletionOutcome::ProviderError(detail) => {
                format!("Error generating response: {}", detail)
            }
        }
    }
}
