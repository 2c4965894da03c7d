//! News search for the Newsdesk analysis service
//!
//! This crate provides the DuckDuckGo news client and the result
//! normalizer that folds its heterogeneous records into the canonical
//! text block consumed by the analysis prompt.

pub mod duckduckgo;
pub mod error;
pub mod normalizer;
pub mod types;

pub use duckduckgo::DuckDuckGoClient;
pub use error::SearchError;
pub use normalizer::{format_records, ResultNormalizer};
pub use types::{DdgNewsResponse, DdgNewsResult};
