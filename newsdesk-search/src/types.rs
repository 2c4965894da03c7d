//! Wire types for the DuckDuckGo news endpoint
//!
//! Every record field is optional: the endpoint omits fields freely, and
//! mirrors of it disagree on whether the summary arrives as `body` or
//! `excerpt` and the address as `url` or `link`.

use serde::Deserialize;

/// Response payload of the `news.js` endpoint
#[derive(Debug, Deserialize)]
pub struct DdgNewsResponse {
    /// Result records, possibly empty
    #[serde(default)]
    pub results: Vec<DdgNewsResult>,
}

/// A single raw news result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DdgNewsResult {
    /// Article title
    #[serde(default)]
    pub title: Option<String>,
    /// Summary text, first of the two summary fields
    #[serde(default)]
    pub body: Option<String>,
    /// Summary text, second of the two summary fields
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Publishing source name
    #[serde(default)]
    pub source: Option<String>,
    /// Article address, first of the two address fields
    #[serde(default)]
    pub url: Option<String>,
    /// Article address, second of the two address fields
    #[serde(default)]
    pub link: Option<String>,
    /// Publication time as epoch seconds
    #[serde(default)]
    pub date: Option<i64>,
    /// Thumbnail address
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "results": [{
                "title": "Solar output hits record",
                "excerpt": "Grid operators reported...",
                "source": "Reuters",
                "url": "https://reuters.com/solar",
                "date": 1756339200,
                "image": "https://reuters.com/solar.jpg"
            }]
        }"#;
        let response: DdgNewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        let record = &response.results[0];
        assert_eq!(record.title.as_deref(), Some("Solar output hits record"));
        assert_eq!(record.excerpt.as_deref(), Some("Grid operators reported..."));
        assert!(record.body.is_none());
        assert_eq!(record.date, Some(1756339200));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Unknown fields are ignored, known fields default to None.
        let json = r#"{"results": [{"relative_time": "2h ago"}]}"#;
        let response: DdgNewsResponse = serde_json::from_str(json).unwrap();
        let record = &response.results[0];
        assert!(record.title.is_none());
        assert!(record.url.is_none());
        assert!(record.date.is_none());
    }

    #[test]
    fn test_deserialize_missing_results() {
        let response: DdgNewsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
