//! The analysis prompt template
//!
//! The template wording is a contract with the downstream model: the five
//! numbered sections drive the structure of the generated report, so the
//! text is fixed and only the topic and the result block are interpolated.

/// Compose the analysis prompt for a topic and its normalized result block.
///
/// Deterministic: identical inputs produce an identical prompt.
pub fn compose_analysis_prompt(topic: &str, search_results: &str) -> String {
    format!(
        r#"Analyze the following news information about {topic}.
    Search Results: {search_results}

    Please provide a comprehensive analysis including:
    1. Key Points Summary:
       - Main events and developments
       - Critical updates and changes

    2. Stakeholder Analysis:
       - Primary parties involved
       - Their roles and positions

    3. Impact Assessment:
       - Immediate implications
       - Potential long-term effects
       - Broader context and significance

    4. Multiple Perspectives:
       - Different viewpoints on the issue
       - Areas of agreement and contention

    5. Fact Check & Reliability:
       - Verification of major claims
       - Consistency across sources
       - Source credibility assessment

    Please format the analysis in a clear, journalistic style with section headers."#
    )
}
