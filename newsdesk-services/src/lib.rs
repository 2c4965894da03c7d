//! Service layer for the Newsdesk analysis pipeline

pub mod analysis_service;

pub use analysis_service::AnalysisService;
