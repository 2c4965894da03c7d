//! Request/response model for a single analysis run
//!
//! All request-scoped values travel explicitly through the pipeline; the
//! interaction surface is an adapter that builds an [`AnalysisRequest`] and
//! renders an [`AnalysisResponse`].

use serde::{Deserialize, Serialize};

/// Smallest accepted search depth
pub const MIN_SEARCH_DEPTH: usize = 3;
/// Largest accepted search depth
pub const MAX_SEARCH_DEPTH: usize = 10;
/// Search depth used when the surface does not specify one
pub const DEFAULT_SEARCH_DEPTH: usize = 5;

/// Report style selector collected from the user.
///
/// Currently informational only: it is carried through the request and
/// echoed in the response, but does not vary the prompt template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    #[default]
    Comprehensive,
    QuickSummary,
    Technical,
    Simplified,
}

/// One user-initiated analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// News topic or query text
    pub topic: String,
    /// Number of search results to gather (3-10)
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Requested report style
    #[serde(default)]
    pub analysis_type: AnalysisType,
}

fn default_depth() -> usize {
    DEFAULT_SEARCH_DEPTH
}

/// State of an analysis run
///
/// Idle -> Searching -> (NoResults | SearchError | Analyzing)
///      -> (Complete | AnalysisError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// Waiting for a topic
    Idle,
    /// Search call in flight
    Searching,
    /// Search returned zero records; terminal
    NoResults,
    /// Search provider failed; terminal
    SearchError,
    /// Prompt composition and completion in flight
    Analyzing,
    /// Report available; terminal
    Complete,
    /// Completion provider failed; terminal
    AnalysisError,
}

impl AnalysisStatus {
    /// Whether this status ends the run
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AnalysisStatus::NoResults
                | AnalysisStatus::SearchError
                | AnalysisStatus::Complete
                | AnalysisStatus::AnalysisError
        )
    }
}

/// Raw prompt and output of a completed run, for the surface's activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Label of the agent that ran
    pub agent: String,
    /// Exact prompt sent to the completion endpoint
    pub prompt: String,
    /// Raw text returned by the completion endpoint
    pub output: String,
}

/// Result of an analysis run, rendered by the interaction surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Terminal status of the run
    pub status: AnalysisStatus,
    /// Topic the run analyzed
    pub topic: String,
    /// Report style the surface asked for, echoed back
    pub analysis_type: AnalysisType,
    /// Report text, present on a completed run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// User-facing failure text, present on a failed run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Activity log, present on a completed run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityLog>,
}

impl AnalysisResponse {
    pub fn no_results(request: &AnalysisRequest, message: String) -> Self {
        Self {
            status: AnalysisStatus::NoResults,
            topic: request.topic.clone(),
            analysis_type: request.analysis_type,
            report: None,
            error: Some(message),
            activity: None,
        }
    }

    pub fn search_error(request: &AnalysisRequest, message: String) -> Self {
        Self {
            status: AnalysisStatus::SearchError,
            topic: request.topic.clone(),
            analysis_type: request.analysis_type,
            report: None,
            error: Some(message),
            activity: None,
        }
    }

    pub fn complete(request: &AnalysisRequest, report: String, activity: ActivityLog) -> Self {
        Self {
            status: AnalysisStatus::Complete,
            topic: request.topic.clone(),
            analysis_type: request.analysis_type,
            report: Some(report),
            error: None,
            activity: Some(activity),
        }
    }

    pub fn analysis_error(request: &AnalysisRequest, message: String) -> Self {
        Self {
            status: AnalysisStatus::AnalysisError,
            topic: request.topic.clone(),
            analysis_type: request.analysis_type,
            report: None,
            error: Some(message),
            activity: None,
        }
    }
}
