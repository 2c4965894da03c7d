//! Analysis service
//!
//! Runs the sequential pipeline for one request: search, then prompt
//! composition and completion. The two network calls never overlap and
//! analysis runs only when the search stage produced results; the match on
//! [`SearchOutcome`] is the sole stage guard.

use tracing::{info, instrument, warn};

use newsdesk_analysis::{compose_analysis_prompt, CompletionClient};
use newsdesk_core::{
    ActivityLog, AnalysisRequest, AnalysisResponse, AnalysisStatus, CompletionOutcome,
    NewsdeskError, SearchOutcome,
};
use newsdesk_search::ResultNormalizer;

/// Label attached to the activity log of a completed run
const AGENT_NAME: &str = "News Analysis Agent";

/// Service running the search-then-analyze pipeline
pub struct AnalysisService {
    normalizer: ResultNormalizer,
    completion: CompletionClient,
}

impl AnalysisService {
    /// Create the service from the environment
    ///
    /// Requires `GROQ_API_KEY` to be set for the completion client.
    pub fn new() -> Result<Self, NewsdeskError> {
        let completion = CompletionClient::new()?;
        Ok(Self::with_clients(ResultNormalizer::new(), completion))
    }

    /// Create the service over specific clients
    pub fn with_clients(normalizer: ResultNormalizer, completion: CompletionClient) -> Self {
        Self {
            normalizer,
            completion,
        }
    }

    /// Run one analysis request to a terminal status
    ///
    /// Per-stage failures are returned inside the response, never as an
    /// `Err`; the caller renders whatever comes back.
    #[instrument(skip(self, request), fields(topic = %request.topic, depth = request.depth))]
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse {
        info!(status = ?AnalysisStatus::Searching, "Searching for recent news...");

        let query = search_query(&request.topic);
        let outcome = self.normalizer.fetch(&query, request.depth).await;

        let results = match outcome {
            SearchOutcome::Results(results) => results,
            failure => {
                warn!("Search stage ended the run: {:?}", failure);
                return search_failure_response(request, &failure);
            }
        };

        info!(
            status = ?AnalysisStatus::Analyzing,
            record_count = results.record_count,
            "Analyzing search results..."
        );

        let prompt = compose_analysis_prompt(&request.topic, &results.block);
        let outcome = self.completion.complete(&prompt).await;

        completion_response(request, prompt, outcome)
    }
}

/// Query text sent to the search provider for a topic
fn search_query(topic: &str) -> String {
    format!("Latest news about {} last 7 days", topic)
}

/// Terminal response for a search outcome that ends the run early
fn search_failure_response(request: &AnalysisRequest, outcome: &SearchOutcome) -> AnalysisResponse {
    match outcome {
        SearchOutcome::NoResults => AnalysisResponse::no_results(request, outcome.display_text()),
        _ => AnalysisResponse::search_error(request, outcome.display_text()),
    }
}

/// Terminal response for the completion stage
///
/// Zero choices from the endpoint count as a result, not an error: the
/// sentinel text becomes the report.
fn completion_response(
    request: &AnalysisRequest,
    prompt: String,
    outcome: CompletionOutcome,
) -> AnalysisResponse {
    match outcome {
        CompletionOutcome::ProviderError(_) => {
            AnalysisResponse::analysis_error(request, outcome.display_text())
        }
        result => {
            let output = result.display_text();
            let activity = ActivityLog {
                agent: AGENT_NAME.to_string(),
                prompt,
                output: output.clone(),
            };
            AnalysisResponse::complete(request, output, activity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::AnalysisType;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            topic: "renewable energy policy".to_string(),
            depth: 5,
            analysis_type: AnalysisType::Comprehensive,
        }
    }

    #[test]
    fn test_search_query_shape() {
        assert_eq!(
            search_query("renewable energy policy"),
            "Latest news about renewable energy policy last 7 days"
        );
    }

    #[test]
    fn test_no_results_ends_the_run() {
        let response = search_failure_response(&request(), &SearchOutcome::NoResults);
        assert_eq!(response.status, AnalysisStatus::NoResults);
        assert!(response.error.unwrap().starts_with("No results"));
        assert!(response.report.is_none());
    }

    #[test]
    fn test_search_error_surfaces_detail_unchanged() {
        let outcome = SearchOutcome::ProviderError("connection refused".to_string());
        let expected = outcome.display_text();
        let response = search_failure_response(&request(), &outcome);
        assert_eq!(response.status, AnalysisStatus::SearchError);
        assert_eq!(response.error.as_deref(), Some(expected.as_str()));
        assert!(expected.starts_with("Search error"));
        // Failed search never reaches the analysis stage.
        assert!(!outcome.is_analyzable());
    }

    #[test]
    fn test_report_completes_with_activity_log() {
        let prompt = "Analyze the following news information about chips.".to_string();
        let response = completion_response(
            &request(),
            prompt.clone(),
            CompletionOutcome::Report("## Key Points Summary".to_string()),
        );
        assert_eq!(response.status, AnalysisStatus::Complete);
        assert_eq!(response.report.as_deref(), Some("## Key Points Summary"));
        let activity = response.activity.unwrap();
        assert_eq!(activity.agent, AGENT_NAME);
        assert_eq!(activity.prompt, prompt);
        assert_eq!(activity.output, "## Key Points Summary");
    }

    #[test]
    fn test_no_response_counts_as_result() {
        let response = completion_response(
            &request(),
            "prompt".to_string(),
            CompletionOutcome::NoResponse,
        );
        assert_eq!(response.status, AnalysisStatus::Complete);
        assert_eq!(response.report.as_deref(), Some("Error: No response generated"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_search_to_prompt_text_flow() {
        // Two well-formed records flow into a two-paragraph block whose
        // indices and topic both land in the composed prompt.
        use newsdesk_core::SearchRecord;
        use newsdesk_search::format_records;

        let records = vec![
            SearchRecord {
                title: "Offshore wind auction clears".to_string(),
                date: "2026-08-26 14:00 UTC".to_string(),
                source: "Reuters".to_string(),
                summary: "Record participation in the latest auction round.".to_string(),
                url: "https://example.com/wind".to_string(),
            },
            SearchRecord {
                title: "Solar tariff review announced".to_string(),
                date: "2026-08-27 09:00 UTC".to_string(),
                source: "AP".to_string(),
                summary: "Regulators opened a review of import tariffs.".to_string(),
                url: "https://example.com/solar".to_string(),
            },
        ];

        let block = format_records(&records);
        assert!(block.contains("1. Title: Offshore wind auction clears"));
        assert!(block.contains("2. Title: Solar tariff review announced"));

        let prompt = compose_analysis_prompt("renewable energy policy", &block);
        assert!(prompt.contains("renewable energy policy"));
        assert!(prompt.contains(&block));
        assert!(prompt.contains("5. Fact Check & Reliability:"));
    }

    #[test]
    fn test_completion_error_fails_the_run() {
        let response = completion_response(
            &request(),
            "prompt".to_string(),
            CompletionOutcome::ProviderError("bad gateway".to_string()),
        );
        assert_eq!(response.status, AnalysisStatus::AnalysisError);
        let error = response.error.unwrap();
        assert!(error.starts_with("Error generating response"));
        assert!(error.contains("bad gateway"));
        assert!(response.activity.is_none());
    }
}
