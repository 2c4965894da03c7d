//! Analysis stage for the Newsdesk service
//!
//! Combines the fixed analysis prompt template with the Groq chat
//! completion client that turns a normalized result block into the
//! multi-section report.

pub mod completion;
pub mod prompt;

pub use completion::CompletionClient;
pub use prompt::compose_analysis_prompt;
