use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::llm::SummaryLength;

fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    if url.len() > 2048 {
        return Err("URL too long".to_string());
    }
    Ok(())
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContentRequest {
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub url: String,
    /// Defaults to `medium`.
    pub length: Option<SummaryLength>,
    /// Defaults to the configured target language.
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateRequest {
    pub url: String,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct KeyPointsRequest {
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HighlightRequest {
    pub url: String,
    /// Sentences to mark. When absent, key points are generated from the
    /// page text and highlighted instead.
    pub sentences: Option<Vec<String>>,
}

impl ContentRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.url)
    }
}
impl SummarizeRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.url)
    }
}
impl TranslateRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.url)
    }
}
impl KeyPointsRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.url)
    }
}
impl HighlightRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_url(&self.url)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummarizeResponse {
    pub title: String,
    pub url: String,
    pub summary: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranslateResponse {
    pub title: String,
    pub url: String,
    pub translation: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KeyPointsResponse {
    pub title: String,
    pub url: String,
    /// Parsed one-per-line points, list markers stripped.
    pub key_points: Vec<String>,
    /// The model's verbatim listing.
    pub raw: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HighlightResponse {
    pub title: String,
    pub url: String,
    pub marks_placed: usize,
    /// The sentences that were searched for.
    pub sentences: Vec<String>,
    /// Id of the first marker, usable as a scroll anchor.
    pub first_mark_id: Option<String>,
    /// Full document markup with markers inserted.
    pub html: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_url() {
        let request = ContentRequest { url: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_url() {
        let request = ContentRequest {
            url: format!("https://example.com/{}", "a".repeat(2048)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_normal_url() {
        let request = SummarizeRequest {
            url: "https://example.com/article".to_string(),
            length: None,
            language: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_summary_length_deserializes_lowercase() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "length": "short"}"#).unwrap();
        assert_eq!(request.length, Some(SummaryLength::Short));
    }
}
