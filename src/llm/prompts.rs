//! Prompt templates for the three content operations, and the key-point
//! line parser that feeds the highlight flow.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// System prompt shared by all operations.
pub const SYSTEM_PROMPT: &str = "You are a professional web content analysis assistant, \
skilled at summarizing, translating and extracting key information. Format your output \
in Markdown, using ### headings and **bold** to organize content where it helps.";

pub const DEFAULT_LANGUAGE: &str = "English";

/// Key-point lines at or below this length are dropped before highlighting.
pub const MIN_KEY_POINT_CHARS: usize = 10;

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d.*•·-]+\s*").unwrap());

/// Requested summary size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// About 100 characters.
    Short,
    /// About 200-300 characters.
    #[default]
    Medium,
    /// About 500 characters.
    Long,
}

impl SummaryLength {
    fn guidance(self) -> &'static str {
        match self {
            SummaryLength::Short => "about 100 characters",
            SummaryLength::Medium => "about 200-300 characters",
            SummaryLength::Long => "about 500 characters",
        }
    }
}

pub fn summarize(text: &str, length: SummaryLength, language: &str) -> String {
    format!(
        "Summarize the following web page content in {language}.\n\n\
         Requirements:\n\
         - Style: concise and professional\n\
         - Length: {}\n\
         - Format: Markdown\n\n\
         Page content:\n{text}\n\nSummary:",
        length.guidance(),
    )
}

pub fn translate(text: &str, language: &str) -> String {
    format!(
        "Translate the following content into {language}, preserving the \
         original Markdown formatting and structure:\n\n{text}\n\nTranslation:",
    )
}

pub fn key_points(text: &str) -> String {
    format!(
        "Extract the key points from the following text.\n\n\
         Requirements:\n\
         - Extract the 5-10 most important points\n\
         - Each point is concise, no longer than one sentence\n\
         - Use a clear list format\n\
         - Order by importance\n\n\
         Text:\n{text}\n\nKey points:",
    )
}

/// Split a key-point listing into highlightable sentences: one per line,
/// leading list markers (digits, dots, dashes, asterisks, bullet glyphs)
/// stripped, lines of [`MIN_KEY_POINT_CHARS`] or fewer characters dropped.
pub fn parse_key_points(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| line.chars().count() > MIN_KEY_POINT_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_points_strips_list_markers() {
        let listing = "1. The first important point\n\
                       - The second important point\n\
                       * The third important point\n\
                       • The fourth important point";
        let points = parse_key_points(listing);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], "The first important point");
        assert_eq!(points[3], "The fourth important point");
    }

    #[test]
    fn test_parse_key_points_drops_short_lines() {
        let listing = "1. Long enough to keep around\n2. tiny\n\n3. Also long enough to keep";
        let points = parse_key_points(listing);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_summarize_prompt_carries_length_and_language() {
        let prompt = summarize("body text", SummaryLength::Short, "French");
        assert!(prompt.contains("French"));
        assert!(prompt.contains("about 100 characters"));
        assert!(prompt.contains("body text"));
    }

    #[test]
    fn test_translate_prompt_preserves_structure_instruction() {
        let prompt = translate("## heading", "German");
        assert!(prompt.contains("German"));
        assert!(prompt.contains("preserving"));
        assert!(prompt.contains("## heading"));
    }

    #[test]
    fn test_key_points_prompt_asks_for_ranked_bullets() {
        let prompt = key_points("long article");
        assert!(prompt.contains("5-10"));
        assert!(prompt.contains("importance"));
    }
}
