//! Core types for the Newsdesk analysis service
//!
//! This crate defines the shared data structures used across the service:
//! normalized search records, stage outcomes, and the request/response
//! model exchanged with the interaction surface.

pub mod error;
pub mod outcome;
pub mod record;
pub mod request;

pub use error::{NewsdeskError, NewsdeskResult};
pub use outcome::{CompletionOutcome, NormalizedResults, SearchOutcome};
pub use record::SearchRecord;
pub use request::{
    ActivityLog, AnalysisRequest, AnalysisResponse, AnalysisStatus, AnalysisType,
    DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH,
};
